//! Golden file integration tests.
//!
//! Reads tests/testdata/dashboard_golden.json and checks the time window,
//! product filter/sort, sort-key parsing, summary tiles and sparkline
//! heights against the built-in datasets.

use serde::Deserialize;

use salesdash_core::data::{PRODUCTS, SALES_SERIES};
use salesdash_core::products::{parse_currency_magnitude, parse_signed_percent};
use salesdash_core::trend::window;
use salesdash_core::{
    MemoryStore, ProductFilter, ProductTableState, SalesTrendState, SortKey, SparkScale,
    ThemePreference, TimeRange,
};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    windows: Vec<WindowCase>,
    products: Vec<ProductCase>,
    parsing: Vec<ParseCase>,
    summary: SummaryCase,
    spark: SparkCase,
}

#[derive(Deserialize)]
struct WindowCase {
    range: String,
    months: Vec<String>,
}

#[derive(Deserialize)]
struct ProductCase {
    filter: String,
    sort: String,
    names: Vec<String>,
}

#[derive(Deserialize)]
struct ParseCase {
    sales: String,
    sales_value: f64,
    growth: String,
    growth_value: f64,
}

#[derive(Deserialize)]
struct Period {
    #[serde(default)]
    index: usize,
    month: String,
    sales: u32,
    target: u32,
    profit: u32,
}

#[derive(Deserialize)]
struct SummaryCase {
    hover: Period,
    fallback: Period,
}

#[derive(Deserialize)]
struct SparkCase {
    trend: Vec<u8>,
    container: u16,
    cap: u16,
    heights: Vec<u16>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/dashboard_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn assert_period(actual: salesdash_core::SalesPeriod, expected: &Period) {
    assert_eq!(actual.month, expected.month);
    assert_eq!(actual.sales, expected.sales);
    assert_eq!(actual.target, expected.target);
    assert_eq!(actual.profit, expected.profit);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_windows() {
    for case in load_golden_data().windows {
        let range: TimeRange = case.range.parse().unwrap();
        let months: Vec<&str> = window(&SALES_SERIES, range).iter().map(|p| p.month).collect();
        assert_eq!(months, case.months, "range {}", case.range);
    }
}

#[test]
fn golden_product_views() {
    for case in load_golden_data().products {
        let filter: ProductFilter = case.filter.parse().unwrap();
        let sort: SortKey = case.sort.parse().unwrap();
        let names: Vec<&str> = ProductTableState::new(filter, sort)
            .rows(&PRODUCTS)
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, case.names, "filter {} sort {}", case.filter, case.sort);
    }
}

#[test]
fn golden_sort_key_parsing() {
    for case in load_golden_data().parsing {
        let sales = parse_currency_magnitude(&case.sales).unwrap();
        assert!((sales - case.sales_value).abs() < 1e-9, "{}", case.sales);
        let growth = parse_signed_percent(&case.growth).unwrap();
        assert!((growth - case.growth_value).abs() < 1e-9, "{}", case.growth);
    }
}

#[test]
fn golden_summary_tiles() {
    let golden = load_golden_data().summary;
    for range in TimeRange::ALL {
        let mut state = SalesTrendState::new(TimeRange::OneYear);
        state.hover_index(&SALES_SERIES, golden.hover.index);
        assert_period(state.summary(&SALES_SERIES).unwrap(), &golden.hover);

        state.leave();
        assert_period(state.summary(&SALES_SERIES).unwrap(), &golden.fallback);

        state.set_range(range);
        assert_period(state.summary(&SALES_SERIES).unwrap(), &golden.fallback);
    }
}

#[test]
fn golden_spark_heights() {
    let golden = load_golden_data().spark;
    let scale = SparkScale {
        container: golden.container,
        cap: golden.cap,
    };
    assert_eq!(scale.heights(&golden.trend), golden.heights);
}

#[test]
fn theme_toggles_round_trip_through_the_store() {
    let store = MemoryStore::with_raw("true");
    let mut theme = ThemePreference::new(Box::new(store.clone()));
    for _ in 0..3 {
        theme.toggle();
    }
    assert!(!theme.is_dark());
    assert_eq!(store.raw().as_deref(), Some("false"));
    let reloaded = ThemePreference::new(Box::new(store));
    assert!(!reloaded.is_dark());
}
