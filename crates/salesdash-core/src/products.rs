//! Top-products table: status filter, sort keys and the string parsers
//! behind the numeric sorts.
//!
//! Filtering runs before sorting and both are recomputed from the full
//! product list whenever the state changes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::DashError;

/// Product trend badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    TrendingUp,
    Stable,
    Declining,
}

impl ProductStatus {
    /// Badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TrendingUp => "Trending Up",
            Self::Stable => "Stable",
            Self::Declining => "Declining",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::TrendingUp, Self::Stable, Self::Declining]
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| DashError::invalid("product status", s))
    }
}

/// A row of the products table. `sales` and `growth` are display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub sales: &'static str,
    pub growth: &'static str,
    pub status: ProductStatus,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Product {
    /// Growth strings starting with `+` render as gains.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.growth.starts_with('+')
    }
}

/// Lower-case a status label and replace spaces with hyphens,
/// e.g. `"Trending Up"` becomes `"trending-up"`.
#[must_use]
pub fn status_slug(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

/// Status filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductFilter {
    #[default]
    All,
    TrendingUp,
    Stable,
    Declining,
}

impl ProductFilter {
    /// Filters in button order.
    pub const ALL: [ProductFilter; 4] = [
        Self::All,
        Self::TrendingUp,
        Self::Stable,
        Self::Declining,
    ];

    /// Button caption.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::TrendingUp => "Trending Up",
            Self::Stable => "Stable",
            Self::Declining => "Declining",
        }
    }

    /// Value compared against a product's status slug.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::TrendingUp => "trending-up",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::TrendingUp,
            Self::TrendingUp => Self::Stable,
            Self::Stable => Self::Declining,
            Self::Declining => Self::All,
        }
    }

    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        self == Self::All || status_slug(product.status.label()) == self.value()
    }
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for ProductFilter {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.value() == s.trim())
            .ok_or_else(|| DashError::invalid("filter", s))
    }
}

/// Column the table is sorted by. Numeric keys sort descending, names
/// ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Sales,
    Growth,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Sales, Self::Growth, Self::Name];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Growth => "growth",
            Self::Name => "name",
        }
    }

    /// Whether the key sorts largest first.
    #[must_use]
    pub fn is_descending(self) -> bool {
        self != Self::Name
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashError::invalid("sort key", s))
    }
}

/// Parse the longest numeric prefix of `s` (after leading whitespace):
/// optional sign, digits with an optional fraction, optional exponent.
/// Returns `None` when no digits are found.
#[must_use]
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Sales sort value: drop every character other than digits, `.` and
/// `-`, then read the leading number.
///
/// Magnitude suffixes are discarded along with the currency symbol, so
/// `"$1.2M"` reads as `1.2` and `"$840K"` as `840`.
#[must_use]
pub fn parse_currency_magnitude(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_leading_float(&cleaned)
}

/// Growth sort value: the leading signed number of a percent string.
#[must_use]
pub fn parse_signed_percent(s: &str) -> Option<f64> {
    parse_leading_float(s)
}

/// Name ordering in three passes: base letters ignoring accents and case,
/// then accents, then lower case before upper case.
///
/// Decomposing to NFD splits `É` into `E` plus a combining acute, so
/// `"Éclair"` sorts next to `"Eclair"` rather than after `"Zebra"`.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.nfd().cmp(a.nfd()))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Descending order on parsed values; unparseable values rank lowest.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(f64::NEG_INFINITY);
    let b = b.unwrap_or(f64::NEG_INFINITY);
    b.total_cmp(&a)
}

/// Compare two products under `key`.
#[must_use]
pub fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Sales => descending(
            parse_currency_magnitude(a.sales),
            parse_currency_magnitude(b.sales),
        ),
        SortKey::Growth => descending(
            parse_signed_percent(a.growth),
            parse_signed_percent(b.growth),
        ),
        SortKey::Name => locale_compare(a.name, b.name),
    }
}

/// Filter then sort. The sort is stable, so ties keep list order.
#[must_use]
pub fn visible_products(
    products: &[Product],
    filter: ProductFilter,
    sort: SortKey,
) -> Vec<&Product> {
    let mut rows: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();
    rows.sort_by(|a, b| compare(sort, a, b));
    rows
}

/// Filter and sort selection of the products table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductTableState {
    pub filter: ProductFilter,
    pub sort: SortKey,
}

impl ProductTableState {
    #[must_use]
    pub fn new(filter: ProductFilter, sort: SortKey) -> Self {
        Self { filter, sort }
    }

    pub fn set_filter(&mut self, filter: ProductFilter) {
        self.filter = filter;
        tracing::debug!(filter = %filter, "product filter changed");
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        tracing::debug!(sort = %sort, "product sort changed");
    }

    /// Rows to display for the current state.
    #[must_use]
    pub fn rows<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        visible_products(products, self.filter, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PRODUCTS;

    fn names(rows: &[&Product]) -> Vec<&'static str> {
        rows.iter().map(|p| p.name).collect()
    }

    fn sales(rows: &[&Product]) -> Vec<&'static str> {
        rows.iter().map(|p| p.sales).collect()
    }

    #[test]
    fn slug_rule() {
        assert_eq!(status_slug("Trending Up"), "trending-up");
        assert_eq!(status_slug("Stable"), "stable");
    }

    #[test]
    fn declining_filter_keeps_cloud_storage() {
        let rows = visible_products(&PRODUCTS, ProductFilter::Declining, SortKey::Sales);
        assert_eq!(names(&rows), vec!["Cloud Storage Pro"]);
        assert_eq!(rows[0].growth, "-2.3%");
    }

    #[test]
    fn trending_up_filter() {
        let rows = visible_products(&PRODUCTS, ProductFilter::TrendingUp, SortKey::Name);
        assert_eq!(
            names(&rows),
            vec!["API Services", "Business Analytics", "Enterprise Suite"]
        );
    }

    // Known deviation from dollar order: K/M suffixes are not interpreted,
    // so "$1.2M" sorts as 1.2 and lands last.
    #[test]
    fn sales_sort_ignores_magnitude_suffix() {
        let rows = visible_products(&PRODUCTS, ProductFilter::All, SortKey::Sales);
        assert_eq!(
            sales(&rows),
            vec!["$840K", "$650K", "$450K", "$380K", "$1.2M"]
        );
    }

    #[test]
    fn growth_sort_descending() {
        let rows = visible_products(&PRODUCTS, ProductFilter::All, SortKey::Growth);
        let growth: Vec<&str> = rows.iter().map(|p| p.growth).collect();
        assert_eq!(growth, vec!["+41.2%", "+23.1%", "+14.3%", "+8.5%", "-2.3%"]);
    }

    #[test]
    fn name_sort_ascending() {
        let rows = visible_products(&PRODUCTS, ProductFilter::All, SortKey::Name);
        assert_eq!(
            names(&rows),
            vec![
                "API Services",
                "Business Analytics",
                "Cloud Storage Pro",
                "Enterprise Suite",
                "Security Package"
            ]
        );
    }

    #[test]
    fn name_sort_is_case_insensitive_and_stable() {
        let mut a = PRODUCTS[0];
        a.name = "alpha";
        let mut b = PRODUCTS[1];
        b.name = "Beta";
        let mut c = PRODUCTS[2];
        c.name = "alpha";
        c.category = "second";
        let list = [b, a, c];
        let rows = visible_products(&list, ProductFilter::All, SortKey::Name);
        assert_eq!(names(&rows), vec!["alpha", "alpha", "Beta"]);
        assert_eq!(rows[0].category, a.category);
        assert_eq!(rows[1].category, "second");
    }

    #[test]
    fn lower_case_before_upper_case() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("b", "A"), Ordering::Greater);
        assert_eq!(locale_compare("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut zebra = PRODUCTS[0];
        zebra.name = "Zebra Suite";
        let mut eclair = PRODUCTS[1];
        eclair.name = "\u{c9}clair Analytics";
        let mut delta = PRODUCTS[2];
        delta.name = "Delta Reports";
        let list = [zebra, eclair, delta];
        let rows = visible_products(&list, ProductFilter::All, SortKey::Name);
        assert_eq!(
            names(&rows),
            vec!["Delta Reports", "\u{c9}clair Analytics", "Zebra Suite"]
        );
        assert_eq!(locale_compare("\u{e9}", "f"), Ordering::Less);
        assert_eq!(locale_compare("e", "\u{e9}"), Ordering::Less);
        // Precomposed and decomposed spellings compare equal.
        assert_eq!(locale_compare("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn malformed_values_sort_last() {
        let mut broken = PRODUCTS[0];
        broken.name = "Broken";
        broken.sales = "n/a";
        broken.growth = "unknown";
        let list = [broken, PRODUCTS[1], PRODUCTS[2]];
        let by_sales = visible_products(&list, ProductFilter::All, SortKey::Sales);
        assert_eq!(by_sales.last().unwrap().name, "Broken");
        let by_growth = visible_products(&list, ProductFilter::All, SortKey::Growth);
        assert_eq!(by_growth.last().unwrap().name, "Broken");
    }

    #[test]
    fn currency_parser() {
        assert_eq!(parse_currency_magnitude("$1.2M"), Some(1.2));
        assert_eq!(parse_currency_magnitude("$840K"), Some(840.0));
        assert_eq!(parse_currency_magnitude("-$5"), Some(-5.0));
        assert_eq!(parse_currency_magnitude("$1,250K"), Some(1250.0));
        assert_eq!(parse_currency_magnitude("free"), None);
    }

    #[test]
    fn percent_parser() {
        assert_eq!(parse_signed_percent("+14.3%"), Some(14.3));
        assert_eq!(parse_signed_percent("-2.3%"), Some(-2.3));
        assert_eq!(parse_signed_percent("  7%"), Some(7.0));
        assert_eq!(parse_signed_percent(".5%"), Some(0.5));
        assert_eq!(parse_signed_percent("%"), None);
        assert_eq!(parse_signed_percent("-"), None);
    }

    #[test]
    fn leading_float_prefixes() {
        assert_eq!(parse_leading_float("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_float("3."), Some(3.0));
        assert_eq!(parse_leading_float("2e3x"), Some(2000.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("-.25"), Some(-0.25));
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn parse_filter_and_sort_names() {
        assert_eq!(
            "trending-up".parse::<ProductFilter>().unwrap(),
            ProductFilter::TrendingUp
        );
        assert!("trending up".parse::<ProductFilter>().is_err());
        assert_eq!("Growth".parse::<SortKey>().unwrap(), SortKey::Growth);
        assert!("price".parse::<SortKey>().is_err());
        assert_eq!(
            "Trending Up".parse::<ProductStatus>().unwrap(),
            ProductStatus::TrendingUp
        );
    }

    #[test]
    fn filter_cycle_visits_all() {
        let mut state = ProductTableState::default();
        let mut seen = vec![state.filter];
        for _ in 0..3 {
            state.cycle_filter();
            seen.push(state.filter);
        }
        assert_eq!(seen, ProductFilter::ALL.to_vec());
        state.cycle_filter();
        assert_eq!(state.filter, ProductFilter::All);
    }

    #[test]
    fn every_filter_value_matches_a_slug_or_all() {
        for filter in ProductFilter::ALL {
            if filter != ProductFilter::All {
                assert!(PRODUCTS.iter().any(|p| filter.matches(p)));
            }
        }
    }
}
