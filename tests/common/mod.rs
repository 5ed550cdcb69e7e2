#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use symbol_chart_wasm::domain::errors::{AppError, AppResult};
use symbol_chart_wasm::domain::market_data::{
    AnalysisRequest, MarketApi, SeriesPoint, Symbol, SymbolInfo, Timestamp,
};

/// In-memory `MarketApi` answering every call with a canned result
pub struct StubApi {
    pub health: AppResult<String>,
    pub symbols: AppResult<Vec<SymbolInfo>>,
    pub search: AppResult<Vec<SymbolInfo>>,
    pub analyze: AppResult<HashMap<Symbol, Vec<SeriesPoint>>>,
    pub calls: RefCell<Vec<String>>,
}

impl StubApi {
    pub fn failing(error: AppError) -> Self {
        Self {
            health: Err(error.clone()),
            symbols: Err(error.clone()),
            search: Err(error.clone()),
            analyze: Err(error),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn offline() -> Self {
        Self::failing(AppError::Network("connection refused".into()))
    }

    pub fn unconfigured() -> Self {
        Self::failing(AppError::ConfigMissing)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl MarketApi for StubApi {
    async fn health(&self) -> AppResult<String> {
        self.calls.borrow_mut().push("health".into());
        self.health.clone()
    }

    async fn symbols(&self) -> AppResult<Vec<SymbolInfo>> {
        self.calls.borrow_mut().push("symbols".into());
        self.symbols.clone()
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SymbolInfo>> {
        self.calls.borrow_mut().push(format!("search:{query}"));
        self.search.clone()
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<HashMap<Symbol, Vec<SeriesPoint>>> {
        self.calls.borrow_mut().push(format!("analyze:{}", request.period.token()));
        self.analyze.clone()
    }
}

pub fn point(timestamp: u64, close: f64, percentage_change: f64) -> SeriesPoint {
    SeriesPoint {
        timestamp: Timestamp::from_millis(timestamp),
        open: close,
        high: close,
        low: close,
        close,
        volume: 1_000,
        percentage_change,
    }
}
