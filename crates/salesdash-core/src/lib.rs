//! # salesdash-core
//!
//! Data model and view-state logic for the SalesDash sales dashboard.
//! Everything here is terminal-agnostic: the static datasets, the
//! navigation accordion, sparkline bar heights, revenue ring geometry,
//! the sales time window, product filtering and sorting, and the
//! persisted theme preference.

pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod icon;
pub mod nav;
pub mod products;
pub mod revenue;
pub mod stats;
pub mod theme;
pub mod trend;

// Re-exports
pub use constants::{exit_codes, NOTIFICATION_COUNT, PREFERENCE_KEY, REVENUE_CENTER_TOTAL};
pub use error::DashError;
pub use icon::Icon;
pub use nav::{NavChild, NavSection, NavState, UserAction};
pub use products::{Product, ProductFilter, ProductStatus, ProductTableState, SortKey};
pub use revenue::{RevenueSegment, RevenueState, Wedge};
pub use stats::{ChangeDirection, ColorToken, SparkScale, StatCard};
pub use theme::{JsonFileStore, MemoryStore, PreferenceStore, ThemeMode, ThemePreference};
pub use trend::{SalesPeriod, SalesTrendState, TimeRange};
