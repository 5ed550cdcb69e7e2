//! Wire shapes of the analysis service and their conversion into domain types.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::domain::errors::{AppError, AppResult};
use crate::domain::market_data::{SeriesPoint, Symbol, SymbolInfo};

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthResponse {
    pub fn into_version(self) -> String {
        self.version.unwrap_or_else(|| "unknown".to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogSymbolDto {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market: String,
}

#[derive(Debug, Deserialize)]
pub struct SymbolsResponse {
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<CatalogSymbolDto>>,
}

impl SymbolsResponse {
    /// Flatten categories into catalog entries, category by category
    pub fn into_symbols(self) -> Vec<SymbolInfo> {
        self.categories
            .into_iter()
            .flat_map(|(category, symbols)| {
                symbols.into_iter().filter(|dto| !dto.symbol.trim().is_empty()).map(move |dto| {
                    let name = if dto.name.is_empty() { dto.symbol.clone() } else { dto.name };
                    SymbolInfo::new(&dto.symbol, &name, &dto.market, &category)
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResultDto {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultDto>,
}

impl SearchResponse {
    pub fn into_symbols(self) -> Vec<SymbolInfo> {
        self.results
            .into_iter()
            .filter(|dto| !dto.symbol.trim().is_empty())
            .map(|dto| {
                let name = if dto.name.is_empty() { dto.symbol.clone() } else { dto.name };
                SymbolInfo::new(&dto.symbol, &name, &dto.market, &dto.category)
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub data: HashMap<String, Vec<SeriesPoint>>,
    #[serde(default)]
    pub success: bool,
}

impl AnalyzeResponse {
    pub fn into_series(self) -> AppResult<HashMap<Symbol, Vec<SeriesPoint>>> {
        if !self.success {
            return Err(AppError::Network("analysis service reported failure".into()));
        }
        Ok(self
            .data
            .into_iter()
            .map(|(symbol, points)| (Symbol::from(symbol.as_str()), points))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_flattened_with_their_category() {
        let json = r#"{"categories": {
            "stocks": [{"symbol": "aapl", "name": "Apple Inc.", "market": "NASDAQ"}],
            "indices": [{"symbol": "^GSPC", "name": "S&P 500", "market": "INDEX"}, {"symbol": " "}]
        }}"#;
        let symbols = serde_json::from_str::<SymbolsResponse>(json).unwrap().into_symbols();
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].identifier.value(), "^GSPC");
        assert_eq!(symbols[0].category, "indices");
        assert_eq!(symbols[1].identifier.value(), "AAPL");
        assert_eq!(symbols[1].category, "stocks");
    }

    #[test]
    fn search_results_default_missing_fields() {
        let json = r#"{"results": [{"symbol": "MSFT"}]}"#;
        let symbols = serde_json::from_str::<SearchResponse>(json).unwrap().into_symbols();
        assert_eq!(symbols[0].display_name, "MSFT");
        assert_eq!(symbols[0].market, "");
    }

    #[test]
    fn unsuccessful_analysis_is_an_error() {
        let json = r#"{"data": {}, "success": false}"#;
        let response: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_series().is_err());
    }

    #[test]
    fn analysis_series_are_keyed_by_symbol() {
        let json = r#"{"success": true, "data": {"aapl": [
            {"timestamp": 1000, "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5,
             "volume": 42, "percentage_change": 0.0}
        ]}}"#;
        let series = serde_json::from_str::<AnalyzeResponse>(json).unwrap().into_series().unwrap();
        let points = &series[&Symbol::from("AAPL")];
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].volume, 42);
    }

    #[test]
    fn health_without_version_is_unknown() {
        let health: HealthResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(health.into_version(), "unknown");
    }
}
