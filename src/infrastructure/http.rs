use std::collections::HashMap;
use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use super::dto::{AnalyzeResponse, HealthResponse, SearchResponse, SymbolsResponse};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::market_data::{AnalysisRequest, MarketApi, SeriesPoint, Symbol, SymbolInfo};

pub const HEALTH_TIMEOUT_MS: u32 = 5_000;
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Resolve `fut`, or fail with `Timeout` once `timeout_ms` elapses
pub async fn with_timeout<F: Future>(timeout_ms: u32, fut: F) -> AppResult<F::Output> {
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(TimeoutFuture::new(timeout_ms));
    match future::select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(AppError::Timeout(timeout_ms)),
    }
}

/// REST client for the analysis service
#[derive(Debug, Clone, Default)]
pub struct HttpMarketApi {
    base_url: Option<String>,
}

impl HttpMarketApi {
    /// `base_url` is expected normalized (no trailing slash); `None` means unconfigured
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    pub fn endpoint(&self, path: &str) -> AppResult<String> {
        let base = self.base_url.as_deref().ok_or(AppError::ConfigMissing)?;
        Ok(format!("{}/{}", base, path.trim_start_matches('/')))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, timeout_ms: u32) -> AppResult<T> {
        let url = self.endpoint(path)?;
        get_logger().debug(LogComponent::Infrastructure("HttpApi"), &format!("GET {url}"));
        let response = with_timeout(timeout_ms, Request::get(&url).send())
            .await?
            .map_err(|e| AppError::Network(format!("GET {path} failed: {e}")))?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> AppResult<T> {
        if !response.ok() {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("HttpApi"),
                &format!("{path} answered with an error status"),
                &format!("status={} {}", response.status(), response.status_text()),
            );
            return Err(AppError::Network(format!("HTTP {} from {path}", response.status())));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(format!("{path}: {e}")))
    }
}

impl MarketApi for HttpMarketApi {
    async fn health(&self) -> AppResult<String> {
        let health: HealthResponse = self.get_json("health", HEALTH_TIMEOUT_MS).await?;
        Ok(health.into_version())
    }

    async fn symbols(&self) -> AppResult<Vec<SymbolInfo>> {
        let response: SymbolsResponse = self.get_json("symbols", REQUEST_TIMEOUT_MS).await?;
        let symbols = response.into_symbols();
        get_logger().info(
            LogComponent::Infrastructure("HttpApi"),
            &format!("Loaded {} symbols", symbols.len()),
        );
        Ok(symbols)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SymbolInfo>> {
        let encoded = String::from(js_sys::encode_uri_component(query.trim()));
        let response: SearchResponse = self.get_json(&format!("search/{encoded}"), REQUEST_TIMEOUT_MS).await?;
        Ok(response.into_symbols())
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<HashMap<Symbol, Vec<SeriesPoint>>> {
        let url = self.endpoint("analyze")?;
        let body = serde_json::to_string(request)?;
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Infrastructure("HttpApi"),
            &format!("POST {url}"),
            &body,
        );
        let pending = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AppError::Network(format!("could not build analyze request: {e}")))?
            .send();
        let response = with_timeout(REQUEST_TIMEOUT_MS, pending)
            .await?
            .map_err(|e| AppError::Network(format!("POST analyze failed: {e}")))?;
        let analysis: AnalyzeResponse = Self::decode("analyze", response).await?;
        analysis.into_series()
    }
}
