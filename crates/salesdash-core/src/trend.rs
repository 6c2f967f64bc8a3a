//! Sales trend: time-window selection and hover-driven summary tiles.

use std::fmt;
use std::str::FromStr;

use crate::error::DashError;

/// One month of the sales series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPeriod {
    pub month: &'static str,
    pub sales: u32,
    pub target: u32,
    pub profit: u32,
}

/// Selectable chart window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    #[default]
    OneYear,
}

impl TimeRange {
    /// Ranges in button order.
    pub const ALL: [TimeRange; 4] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
    ];

    /// Number of trailing months shown.
    #[must_use]
    pub fn months(self) -> usize {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    /// Button caption.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "Last Month",
            Self::ThreeMonths => "Last 3 Months",
            Self::SixMonths => "Last 6 Months",
            Self::OneYear => "Last Year",
        }
    }

    /// Next range in button order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::OneMonth => Self::ThreeMonths,
            Self::ThreeMonths => Self::SixMonths,
            Self::SixMonths => Self::OneYear,
            Self::OneYear => Self::OneMonth,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeRange {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashError::invalid("time range", s))
    }
}

/// The last `range.months()` entries of `series` (all of it if shorter).
#[must_use]
pub fn window(series: &[SalesPeriod], range: TimeRange) -> &[SalesPeriod] {
    let start = series.len().saturating_sub(range.months());
    &series[start..]
}

/// Index of the sample nearest to a horizontal offset inside a plot of
/// `width` columns holding `len` evenly spaced samples.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn nearest_sample(offset: u16, width: u16, len: usize) -> Option<usize> {
    if len == 0 || width == 0 {
        return None;
    }
    if len == 1 || width == 1 {
        return Some(0);
    }
    let offset = offset.min(width - 1);
    let fraction = f64::from(offset) / f64::from(width - 1);
    let index = (fraction * (len - 1) as f64).round() as usize;
    Some(index.min(len - 1))
}

/// Column offset of sample `index` in the same geometry as
/// [`nearest_sample`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn sample_offset(index: usize, width: u16, len: usize) -> u16 {
    if len <= 1 || width <= 1 {
        return 0;
    }
    let fraction = index.min(len - 1) as f64 / (len - 1) as f64;
    (fraction * f64::from(width - 1)).round() as u16
}

/// Selected window and hovered sample of the sales chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesTrendState {
    pub range: TimeRange,
    hovered: Option<SalesPeriod>,
}

impl SalesTrendState {
    #[must_use]
    pub fn new(range: TimeRange) -> Self {
        Self {
            range,
            hovered: None,
        }
    }

    /// Entries plotted for the current range.
    #[must_use]
    pub fn filtered<'a>(&self, series: &'a [SalesPeriod]) -> &'a [SalesPeriod] {
        window(series, self.range)
    }

    /// Select a new window. Any hover is dropped since it was positioned
    /// within the previous window.
    pub fn set_range(&mut self, range: TimeRange) {
        if range != self.range {
            self.hovered = None;
        }
        self.range = range;
        tracing::debug!(range = %range, "time range changed");
    }

    pub fn cycle_range(&mut self) {
        self.set_range(self.range.next());
    }

    #[must_use]
    pub fn hovered(&self) -> Option<SalesPeriod> {
        self.hovered
    }

    /// Pointer moved over the chart: hover the sample at `index` of the
    /// current window.
    pub fn hover_index(&mut self, series: &[SalesPeriod], index: usize) {
        if let Some(period) = self.filtered(series).get(index) {
            self.hovered = Some(*period);
        }
    }

    /// Pointer left the chart.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Move the hover by `delta` samples within the current window,
    /// starting from the last sample when nothing is hovered.
    pub fn step_hover(&mut self, series: &[SalesPeriod], delta: isize) {
        let window = self.filtered(series);
        if window.is_empty() {
            return;
        }
        let last = window.len() - 1;
        let current = self
            .hovered
            .and_then(|h| window.iter().position(|p| *p == h))
            .unwrap_or(last);
        let next = current.saturating_add_signed(delta).min(last);
        self.hovered = Some(window[next]);
    }

    /// Index of the hovered sample within the current window.
    #[must_use]
    pub fn hovered_index(&self, series: &[SalesPeriod]) -> Option<usize> {
        let hovered = self.hovered?;
        self.filtered(series).iter().position(|p| *p == hovered)
    }

    /// Values for the summary tiles: the hovered sample, else the last
    /// entry of the full series regardless of the selected range.
    #[must_use]
    pub fn summary(&self, series: &[SalesPeriod]) -> Option<SalesPeriod> {
        self.hovered.or_else(|| series.last().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SALES_SERIES;

    fn months(periods: &[SalesPeriod]) -> Vec<&'static str> {
        periods.iter().map(|p| p.month).collect()
    }

    #[test]
    fn three_months_is_last_three() {
        assert_eq!(
            months(window(&SALES_SERIES, TimeRange::ThreeMonths)),
            vec!["Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn one_year_is_whole_series() {
        assert_eq!(window(&SALES_SERIES, TimeRange::OneYear).len(), 12);
        assert_eq!(months(window(&SALES_SERIES, TimeRange::OneMonth)), vec!["Dec"]);
        assert_eq!(window(&SALES_SERIES, TimeRange::SixMonths)[0].month, "Jul");
    }

    #[test]
    fn window_of_short_series_is_whole_series() {
        assert_eq!(window(&SALES_SERIES[..2], TimeRange::SixMonths).len(), 2);
        assert!(window(&[], TimeRange::OneYear).is_empty());
    }

    #[test]
    fn parse_range_names() {
        assert_eq!("3M".parse::<TimeRange>().unwrap(), TimeRange::ThreeMonths);
        assert_eq!("1y".parse::<TimeRange>().unwrap(), TimeRange::OneYear);
        assert!("2W".parse::<TimeRange>().is_err());
    }

    #[test]
    fn range_cycle_wraps() {
        let mut r = TimeRange::OneMonth;
        for _ in 0..4 {
            r = r.next();
        }
        assert_eq!(r, TimeRange::OneMonth);
        assert_eq!(TimeRange::OneYear.label(), "Last Year");
    }

    #[test]
    fn hover_sets_summary_and_leave_falls_back_to_december() {
        let mut state = SalesTrendState::new(TimeRange::OneYear);
        state.hover_index(&SALES_SERIES, 5);
        let june = state.summary(&SALES_SERIES).unwrap();
        assert_eq!(
            (june.month, june.sales, june.target, june.profit),
            ("Jun", 2390, 2800, 1490)
        );

        state.leave();
        let dec = state.summary(&SALES_SERIES).unwrap();
        assert_eq!((dec.sales, dec.target, dec.profit), (6100, 5400, 3660));
    }

    #[test]
    fn fallback_ignores_selected_range() {
        let mut state = SalesTrendState::new(TimeRange::OneMonth);
        state.set_range(TimeRange::ThreeMonths);
        assert_eq!(state.summary(&SALES_SERIES).unwrap().month, "Dec");
        let shortened = &SALES_SERIES[..6];
        // The window would end at Jun; the tiles still show the full series' last entry.
        assert_eq!(state.summary(shortened).unwrap().month, "Jun");
    }

    #[test]
    fn range_change_drops_hover() {
        let mut state = SalesTrendState::new(TimeRange::ThreeMonths);
        state.step_hover(&SALES_SERIES, -1);
        assert_eq!(state.hovered().unwrap().month, "Nov");
        state.cycle_range();
        assert_eq!(state.range, TimeRange::SixMonths);
        assert_eq!(state.hovered(), None);
        assert_eq!(state.summary(&SALES_SERIES).unwrap().month, "Dec");

        state.step_hover(&SALES_SERIES, -2);
        state.set_range(TimeRange::SixMonths);
        assert_eq!(state.hovered().unwrap().month, "Oct");
    }

    #[test]
    fn hover_index_is_relative_to_window() {
        let mut state = SalesTrendState::new(TimeRange::ThreeMonths);
        state.hover_index(&SALES_SERIES, 0);
        assert_eq!(state.hovered().unwrap().month, "Oct");
        assert_eq!(state.hovered_index(&SALES_SERIES), Some(0));
        state.hover_index(&SALES_SERIES, 7);
        assert_eq!(state.hovered().unwrap().month, "Oct");
    }

    #[test]
    fn step_hover_clamps_to_window() {
        let mut state = SalesTrendState::new(TimeRange::ThreeMonths);
        state.step_hover(&SALES_SERIES, -1);
        assert_eq!(state.hovered().unwrap().month, "Nov");
        state.step_hover(&SALES_SERIES, -5);
        assert_eq!(state.hovered().unwrap().month, "Oct");
        state.step_hover(&SALES_SERIES, 10);
        assert_eq!(state.hovered().unwrap().month, "Dec");
    }

    #[test]
    fn nearest_sample_rounds_to_closest() {
        assert_eq!(nearest_sample(0, 45, 12), Some(0));
        assert_eq!(nearest_sample(44, 45, 12), Some(11));
        assert_eq!(nearest_sample(200, 45, 12), Some(11));
        assert_eq!(nearest_sample(20, 45, 12), Some(5));
        assert_eq!(nearest_sample(3, 10, 1), Some(0));
        assert_eq!(nearest_sample(3, 10, 0), None);
    }

    #[test]
    fn sample_offset_inverts_nearest_sample() {
        for len in [1usize, 3, 6, 12] {
            for index in 0..len {
                let offset = sample_offset(index, 57, len);
                assert_eq!(nearest_sample(offset, 57, len), Some(index));
            }
        }
    }
}
