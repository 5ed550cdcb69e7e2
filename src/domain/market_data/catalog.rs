//! In-memory symbol catalog with local substring search.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::entities::SymbolInfo;
use super::value_objects::Symbol;

/// Default number of suggestions returned by a search
pub const SEARCH_LIMIT: usize = 8;

static FALLBACK_SYMBOLS: Lazy<Vec<SymbolInfo>> = Lazy::new(|| {
    vec![
        SymbolInfo::new("AAPL", "Apple Inc.", "NASDAQ", "stocks"),
        SymbolInfo::new("MSFT", "Microsoft Corporation", "NASDAQ", "stocks"),
        SymbolInfo::new("GOOGL", "Alphabet Inc.", "NASDAQ", "stocks"),
        SymbolInfo::new("TSLA", "Tesla, Inc.", "NASDAQ", "stocks"),
        SymbolInfo::new("^GSPC", "S&P 500", "INDEX", "indices"),
        SymbolInfo::new("^DJI", "Dow Jones Industrial Average", "INDEX", "indices"),
    ]
});

/// Built-in sample entries used when the remote catalog is unavailable
pub fn fallback_symbols() -> &'static [SymbolInfo] {
    &FALLBACK_SYMBOLS
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolCatalog {
    entries: Vec<SymbolInfo>,
}

impl SymbolCatalog {
    /// Build from entries; later duplicates of an identifier are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = SymbolInfo>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|info| seen.insert(info.identifier.clone()))
            .collect();
        Self { entries }
    }

    pub fn fallback() -> Self {
        Self::from_entries(fallback_symbols().iter().cloned())
    }

    pub fn get(&self, identifier: &Symbol) -> Option<&SymbolInfo> {
        self.entries.iter().find(|info| &info.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolInfo> {
        self.entries.iter()
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for info in &self.entries {
            if !names.contains(&info.category.as_str()) {
                names.push(&info.category);
            }
        }
        names
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a SymbolInfo> {
        self.entries.iter().filter(move |info| info.category == category)
    }

    /// Case-insensitive substring search on identifier and display name.
    /// Results keep catalog order; a blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SymbolInfo> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|info| info.matches(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}
