//! Placeholder random-walk series used in demo mode.
//!
//! Not a financial model: prices only need to look plausible on a chart.

use rand::Rng;
use std::collections::HashMap;

use super::entities::{ChartDataMap, SeriesPoint};
use super::value_objects::{Symbol, Timestamp};

/// Upper bound on generated points regardless of the period length
pub const MAX_SYNTHETIC_POINTS: usize = 50;

const MAX_STEP_CHANGE: f64 = 0.02;
const MAX_WICK: f64 = 0.01;

/// Number of points generated for a period of `days` days
pub fn point_count(days: u32) -> usize {
    (days as usize).clamp(1, MAX_SYNTHETIC_POINTS)
}

fn base_price<R: Rng>(symbol: &Symbol, rng: &mut R) -> f64 {
    if symbol.is_index() {
        rng.gen_range(1_000.0..40_000.0)
    } else {
        rng.gen_range(10.0..500.0)
    }
}

/// Generate `point_count(days)` daily points ending at `now_ms`, oldest first.
pub fn generate_series<R: Rng>(symbol: &Symbol, days: u32, now_ms: u64, rng: &mut R) -> Vec<SeriesPoint> {
    let count = point_count(days);
    let base = base_price(symbol, rng);
    let mut close = base;
    let mut points = Vec::with_capacity(count);

    for step in (0..count as u64).rev() {
        let open = close;
        close *= 1.0 + rng.gen_range(-MAX_STEP_CHANGE..=MAX_STEP_CHANGE);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..MAX_WICK));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..MAX_WICK));

        points.push(SeriesPoint {
            timestamp: Timestamp::from_millis(now_ms.saturating_sub(step * Timestamp::DAY_MS)),
            open,
            high,
            low,
            close,
            volume: rng.gen_range(100_000..10_000_000),
            percentage_change: (close / base - 1.0) * 100.0,
        });
    }

    points
}

/// Synthetic replacement for a whole analysis response
pub fn generate_chart_data<R: Rng>(symbols: &[Symbol], days: u32, now_ms: u64, rng: &mut R) -> ChartDataMap {
    let series: HashMap<Symbol, Vec<SeriesPoint>> = symbols
        .iter()
        .map(|symbol| (symbol.clone(), generate_series(symbol, days, now_ms, rng)))
        .collect();
    ChartDataMap::from_unordered(symbols, series)
}
