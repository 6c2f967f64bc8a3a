//! Constants shared by the dashboard views.

/// Number of samples in a stat card trend.
pub const TREND_LEN: usize = 7;

/// Sparkline container height in eighths of a terminal row.
///
/// Trend values are percentages of this height.
pub const SPARK_CONTAINER_EIGHTHS: u16 = 32;

/// Maximum sparkline bar height in eighths of a terminal row (three rows).
pub const SPARK_CAP_EIGHTHS: u16 = 24;

/// Unread notification count shown in the top bar.
pub const NOTIFICATION_COUNT: u32 = 3;

/// Figure printed in the centre of the revenue ring.
///
/// This is a fixed label, not the sum of the segment amounts.
pub const REVENUE_CENTER_TOTAL: &str = "$2.4M";

/// Gap between adjacent revenue wedges, in degrees.
pub const RING_PADDING_DEGREES: f64 = 5.0;

/// Angle where the first wedge starts (3 o'clock), in degrees.
pub const RING_START_DEGREES: f64 = 0.0;

/// Inner radius of the ring in normalised canvas units.
pub const RING_INNER_RADIUS: f64 = 0.6;

/// Outer radius of the ring in normalised canvas units.
pub const RING_OUTER_RADIUS: f64 = 0.8;

/// Scale applied to the outer radius of the active wedge.
pub const RING_ACTIVE_SCALE: f64 = 1.1;

/// Key holding the dark-mode flag in the preference store.
pub const PREFERENCE_KEY: &str = "darkMode";

/// Name of the signed-in user shown in the greeting.
pub const USER_FIRST_NAME: &str = "John";

/// Initials shown on the profile avatar.
pub const USER_INITIALS: &str = "JD";

/// E-mail shown at the top of the profile menu.
pub const USER_EMAIL: &str = "john.doe@example.com";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
