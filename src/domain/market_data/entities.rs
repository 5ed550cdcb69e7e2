pub use super::value_objects::{Symbol, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog entry describing a tradable instrument or index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub identifier: Symbol,
    pub display_name: String,
    pub market: String,
    pub category: String,
}

impl SymbolInfo {
    pub fn new(identifier: &str, display_name: &str, market: &str, category: &str) -> Self {
        Self {
            identifier: Symbol::from(identifier),
            display_name: display_name.to_string(),
            market: market.to_string(),
            category: category.to_string(),
        }
    }

    /// Case-insensitive substring match on identifier or display name.
    /// `needle` must already be lower case.
    pub fn matches(&self, needle: &str) -> bool {
        self.identifier.value().to_lowercase().contains(needle)
            || self.display_name.to_lowercase().contains(needle)
    }
}

/// One sample of a symbol's time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(rename = "timestamp", alias = "timestamp_millis")]
    pub timestamp: Timestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    #[serde(alias = "pct_change")]
    pub percentage_change: f64,
}

/// Per-symbol series in insertion order.
///
/// The map is only ever replaced wholesale by an analysis run, or shrunk by
/// removing a symbol; it is never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataMap {
    entries: Vec<(Symbol, Vec<SeriesPoint>)>,
}

impl ChartDataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map ordered by `order`, keeping only symbols present in both.
    /// Each series is sorted by timestamp.
    pub fn from_unordered(order: &[Symbol], mut series: HashMap<Symbol, Vec<SeriesPoint>>) -> Self {
        let entries = order
            .iter()
            .filter_map(|symbol| {
                let mut points = series.remove(symbol)?;
                points.sort_by_key(|p| p.timestamp);
                Some((symbol.clone(), points))
            })
            .collect();
        Self { entries }
    }

    /// Insert or overwrite the series for `symbol`, keeping its position if present
    pub fn insert(&mut self, symbol: Symbol, mut points: Vec<SeriesPoint>) {
        points.sort_by_key(|p| p.timestamp);
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, existing)) => *existing = points,
            None => self.entries.push((symbol, points)),
        }
    }

    pub fn remove(&mut self, symbol: &Symbol) -> Option<Vec<SeriesPoint>> {
        let index = self.entries.iter().position(|(s, _)| s == symbol)?;
        Some(self.entries.remove(index).1)
    }

    pub fn retain_symbols(&mut self, keep: impl Fn(&Symbol) -> bool) {
        self.entries.retain(|(s, _)| keep(s));
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&[SeriesPoint]> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, points)| points.as_slice())
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.entries.iter().any(|(s, _)| s == symbol)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter().map(|(s, _)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &[SeriesPoint])> {
        self.entries.iter().map(|(s, points)| (s, points.as_slice()))
    }

    pub fn summaries(&self) -> Vec<SeriesSummary> {
        self.iter()
            .filter_map(|(symbol, points)| SeriesSummary::from_points(symbol, points))
            .collect()
    }
}

/// Legend line shown under the chart
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub identifier: Symbol,
    pub last_close: f64,
    pub change_pct: f64,
    pub points: usize,
}

impl SeriesSummary {
    pub fn from_points(symbol: &Symbol, points: &[SeriesPoint]) -> Option<Self> {
        let last = points.last()?;
        Some(Self {
            identifier: symbol.clone(),
            last_close: last.close,
            change_pct: last.percentage_change,
            points: points.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(ts: u64, close: f64) -> SeriesPoint {
        SeriesPoint {
            timestamp: Timestamp::from_millis(ts),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1,
            percentage_change: 0.0,
        }
    }

    #[test]
    fn from_unordered_follows_requested_order_and_drops_strays() {
        let mut raw = HashMap::new();
        raw.insert(Symbol::from("MSFT"), vec![point(1, 1.0)]);
        raw.insert(Symbol::from("AAPL"), vec![point(1, 2.0)]);
        raw.insert(Symbol::from("TSLA"), vec![point(1, 3.0)]);

        let order = [Symbol::from("AAPL"), Symbol::from("MSFT")];
        let map = ChartDataMap::from_unordered(&order, raw);

        let keys: Vec<&str> = map.symbols().map(|s| s.value()).collect();
        assert_eq!(keys, ["AAPL", "MSFT"]);
    }

    #[test]
    fn insert_sorts_points_chronologically() {
        let mut map = ChartDataMap::new();
        map.insert(Symbol::from("AAPL"), vec![point(3, 1.0), point(1, 1.0), point(2, 1.0)]);
        let ts: Vec<u64> = map
            .get(&Symbol::from("AAPL"))
            .unwrap()
            .iter()
            .map(|p| p.timestamp.value())
            .collect();
        assert_eq!(ts, [1, 2, 3]);
    }

    #[test]
    fn series_point_reads_wire_aliases() {
        let json = r#"{"timestamp_millis": 5, "open": 1.0, "high": 2.0, "low": 0.5,
                       "close": 1.5, "volume": 10, "pct_change": 50.0}"#;
        let p: SeriesPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p.timestamp.value(), 5);
        assert_eq!(p.percentage_change, 50.0);
    }

    #[test]
    fn summary_uses_last_point() {
        let mut last = point(2, 12.0);
        last.percentage_change = 20.0;
        let summary = SeriesSummary::from_points(&Symbol::from("AAPL"), &[point(1, 10.0), last]).unwrap();
        assert_eq!(summary.last_close, 12.0);
        assert_eq!(summary.change_pct, 20.0);
        assert_eq!(summary.points, 2);
        assert!(SeriesSummary::from_points(&Symbol::from("AAPL"), &[]).is_none());
    }
}
