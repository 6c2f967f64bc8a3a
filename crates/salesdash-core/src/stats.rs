//! KPI stat cards and their sparkline bar heights.

use crate::constants::{SPARK_CAP_EIGHTHS, SPARK_CONTAINER_EIGHTHS, TREND_LEN};
use crate::icon::Icon;

/// Whether a KPI moved up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Positive,
    Negative,
}

impl ChangeDirection {
    #[must_use]
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }

    /// Up/down arrow for the change text.
    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Positive => "▲",
            Self::Negative => "▼",
        }
    }
}

/// Accent colour of a stat card icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Blue,
    Purple,
    Pink,
    Green,
}

/// A KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub direction: ChangeDirection,
    pub icon: Icon,
    pub color: ColorToken,
    /// Last seven days, each in `0..=100`.
    pub trend: [u8; TREND_LEN],
}

/// Maps trend values to bar heights.
///
/// A value is a percentage of `container`; the result is clipped to
/// `cap`. Values are used as-is, without normalising against the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparkScale {
    pub container: u16,
    pub cap: u16,
}

impl Default for SparkScale {
    fn default() -> Self {
        Self {
            container: SPARK_CONTAINER_EIGHTHS,
            cap: SPARK_CAP_EIGHTHS,
        }
    }
}

impl SparkScale {
    /// Height of one bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self, value: u8) -> u16 {
        let scaled = u32::from(value) * u32::from(self.container) / 100;
        scaled.min(u32::from(self.cap)) as u16
    }

    /// Heights for a whole trend, in order.
    #[must_use]
    pub fn heights(&self, trend: &[u8]) -> Vec<u16> {
        trend.iter().map(|&v| self.height(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::STAT_CARDS;

    #[test]
    fn percent_scale_caps_values() {
        let scale = SparkScale {
            container: 100,
            cap: 75,
        };
        assert_eq!(
            scale.heights(&[65, 59, 80, 81, 56, 55, 70]),
            vec![65, 59, 75, 75, 56, 55, 70]
        );
    }

    #[test]
    fn default_scale_uses_eighths() {
        let scale = SparkScale::default();
        assert_eq!(scale.height(0), 0);
        assert_eq!(scale.height(50), 16);
        assert_eq!(scale.height(65), 20);
        // 81% of 32 is 25.9, above the three-row cap
        assert_eq!(scale.height(81), SPARK_CAP_EIGHTHS);
        assert_eq!(scale.height(100), SPARK_CAP_EIGHTHS);
    }

    #[test]
    fn direction_indicator() {
        assert_eq!(ChangeDirection::Positive.indicator(), "▲");
        assert_eq!(ChangeDirection::Negative.indicator(), "▼");
    }

    #[test]
    fn change_text_agrees_with_direction() {
        for card in &STAT_CARDS {
            assert_eq!(card.change.starts_with('+'), card.direction.is_positive());
            assert!(card.trend.iter().all(|&v| v <= 100));
        }
    }
}
