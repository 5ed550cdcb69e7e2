use crate::application::state::ConnectionStatus;
use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger},
    market_data::MarketApi,
};

/// Use Case: probe the health endpoint and translate the result into a status
pub struct CheckConnectivityUseCase<'a, A: MarketApi> {
    api: &'a A,
}

impl<'a, A: MarketApi> CheckConnectivityUseCase<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> ConnectionStatus {
        let status = match self.api.health().await {
            Ok(version) => ConnectionStatus::Connected { version },
            Err(AppError::ConfigMissing) => ConnectionStatus::Disconnected {
                reason: "no API URL configured".to_string(),
            },
            Err(e) => ConnectionStatus::Error { reason: e.to_string() },
        };
        get_logger().info(
            LogComponent::Application("Connectivity"),
            &format!("Health check: {}", status.label()),
        );
        status
    }
}
