use rand::Rng;

use crate::application::analysis::{AnalysisOutcome, DataSource};
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
    market_data::{AnalysisRequest, ChartDataMap, MarketApi, synthetic},
};

/// Use Case: fetch series for a request, degrading to synthetic data on any failure
pub struct RunAnalysisUseCase<'a, A: MarketApi> {
    api: &'a A,
}

impl<'a, A: MarketApi> RunAnalysisUseCase<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn execute<R: Rng>(&self, request: &AnalysisRequest, now_ms: u64, rng: &mut R) -> AnalysisOutcome {
        match self.fetch_remote(request).await {
            Ok(data) => AnalysisOutcome { data, source: DataSource::Remote, fallback_reason: None },
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("RunAnalysis"),
                    &format!("Analysis API failed ({e}), generating demo data"),
                );
                let data = synthetic::generate_chart_data(&request.symbols, request.period.days(), now_ms, rng);
                let reason = match e {
                    AppError::ConfigMissing => "No API configured".to_string(),
                    _ => "API unavailable".to_string(),
                };
                AnalysisOutcome { data, source: DataSource::Synthetic, fallback_reason: Some(reason) }
            }
        }
    }

    async fn fetch_remote(&self, request: &AnalysisRequest) -> AppResult<ChartDataMap> {
        let series = self.api.analyze(request).await?;
        let data = ChartDataMap::from_unordered(&request.symbols, series);
        if data.is_empty() {
            return Err(AppError::Decode("response contained no series for the requested symbols".into()));
        }
        Ok(data)
    }
}
