use rand::{SeedableRng, rngs::StdRng};
use symbol_chart_wasm::domain::market_data::synthetic::{MAX_SYNTHETIC_POINTS, generate_chart_data, generate_series};
use symbol_chart_wasm::domain::market_data::{Period, Symbol, Timestamp};

const NOW: u64 = 1_700_000_000_000;

#[test]
fn one_week_yields_seven_daily_points_ending_now() {
    let mut rng = StdRng::seed_from_u64(7);
    let period: Period = "1w".parse().unwrap();
    let points = generate_series(&Symbol::from("AAPL"), period.days(), NOW, &mut rng);

    assert_eq!(points.len(), 7);
    assert_eq!(points.last().unwrap().timestamp.value(), NOW);
    assert_eq!(points[0].timestamp.value(), NOW - 6 * Timestamp::DAY_MS);
    assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[test]
fn long_periods_are_capped() {
    let mut rng = StdRng::seed_from_u64(1);
    let period: Period = "2Y".parse().unwrap();
    let points = generate_series(&Symbol::from("MSFT"), period.days(), NOW, &mut rng);
    assert_eq!(points.len(), MAX_SYNTHETIC_POINTS);
}

#[test]
fn unknown_period_token_means_one_day() {
    assert_eq!(Period::days_for_token("5m"), 1);
    let mut rng = StdRng::seed_from_u64(2);
    let points = generate_series(&Symbol::from("TSLA"), Period::days_for_token("5m"), NOW, &mut rng);
    assert_eq!(points.len(), 1);
}

#[test]
fn candles_are_well_formed_and_change_is_relative_to_base() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = generate_series(&Symbol::from("GOOGL"), 30, NOW, &mut rng);
    let base = points[0].open;

    for pair in points.windows(2) {
        assert_eq!(pair[1].open, pair[0].close);
    }
    for p in &points {
        assert!(p.high >= p.open.max(p.close));
        assert!(p.low <= p.open.min(p.close));
        assert!((100_000..10_000_000).contains(&p.volume));
        let expected = (p.close / base - 1.0) * 100.0;
        assert!((p.percentage_change - expected).abs() < 1e-9);
    }
}

#[test]
fn indices_start_from_a_higher_base() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        let index = generate_series(&Symbol::from("^GSPC"), 1, NOW, &mut rng);
        assert!((1_000.0..40_000.0).contains(&index[0].open));
        let stock = generate_series(&Symbol::from("AAPL"), 1, NOW, &mut rng);
        assert!((10.0..500.0).contains(&stock[0].open));
    }
}

#[test]
fn chart_data_follows_request_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let symbols = [Symbol::from("TSLA"), Symbol::from("^DJI"), Symbol::from("AAPL")];
    let data = generate_chart_data(&symbols, 3, NOW, &mut rng);

    let order: Vec<&str> = data.symbols().map(|s| s.value()).collect();
    assert_eq!(order, ["TSLA", "^DJI", "AAPL"]);
    assert!(data.iter().all(|(_, points)| points.len() == 3));
}
