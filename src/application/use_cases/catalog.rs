use crate::domain::{
    logging::{LogComponent, get_logger},
    market_data::{MarketApi, SymbolCatalog, SymbolInfo},
};

/// Use Case: populate the catalog from the service, else the built-in list
pub struct LoadCatalogUseCase<'a, A: MarketApi> {
    api: &'a A,
}

impl<'a, A: MarketApi> LoadCatalogUseCase<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> SymbolCatalog {
        match self.api.symbols().await {
            Ok(entries) if !entries.is_empty() => {
                let catalog = SymbolCatalog::from_entries(entries);
                get_logger().info(
                    LogComponent::Application("LoadCatalog"),
                    &format!("Loaded {} symbols from API", catalog.len()),
                );
                catalog
            }
            Ok(_) => {
                get_logger().warn(
                    LogComponent::Application("LoadCatalog"),
                    "API returned an empty catalog, using built-in symbols",
                );
                SymbolCatalog::fallback()
            }
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("LoadCatalog"),
                    &format!("Catalog unavailable ({e}), using built-in symbols"),
                );
                SymbolCatalog::fallback()
            }
        }
    }
}

/// Use Case: remote search first, local substring match when that yields nothing
pub struct SearchSymbolsUseCase<'a, A: MarketApi> {
    api: &'a A,
    catalog: &'a SymbolCatalog,
}

impl<'a, A: MarketApi> SearchSymbolsUseCase<'a, A> {
    pub fn new(api: &'a A, catalog: &'a SymbolCatalog) -> Self {
        Self { api, catalog }
    }

    pub async fn execute(&self, query: &str, limit: usize) -> Vec<SymbolInfo> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.api.search(query).await {
            Ok(mut results) if !results.is_empty() => {
                results.truncate(limit);
                results
            }
            Ok(_) => self.catalog.search(query, limit),
            Err(e) => {
                get_logger().debug(
                    LogComponent::Application("SearchSymbols"),
                    &format!("Remote search failed ({e}), searching locally"),
                );
                self.catalog.search(query, limit)
            }
        }
    }
}
