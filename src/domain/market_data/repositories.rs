use serde::Serialize;
use std::collections::HashMap;

use super::entities::{SeriesPoint, SymbolInfo};
use super::value_objects::{Period, Symbol};
use crate::domain::chart::ChartType;
use crate::domain::errors::AppResult;

/// Body of an analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub symbols: Vec<Symbol>,
    pub period: Period,
    pub chart_type: ChartType,
}

/// Remote market analysis service.
///
/// Every method may fail; callers decide whether to fall back.
#[allow(async_fn_in_trait)]
pub trait MarketApi {
    /// Service version reported by the health endpoint
    async fn health(&self) -> AppResult<String>;

    /// Full categorized symbol list, flattened in category order
    async fn symbols(&self) -> AppResult<Vec<SymbolInfo>>;

    async fn search(&self, query: &str) -> AppResult<Vec<SymbolInfo>>;

    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<HashMap<Symbol, Vec<SeriesPoint>>>;
}
