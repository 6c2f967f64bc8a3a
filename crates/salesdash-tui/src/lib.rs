//! # salesdash-tui
//!
//! Interactive sales dashboard using ratatui with Elm architecture.

pub mod buttons;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod layout;
pub mod messages;
pub mod model;
pub mod products;
pub mod profile_menu;
pub mod revenue;
pub mod sales_chart;
pub mod sidebar;
pub mod stat_cards;
pub mod styles;

pub use layout::DashboardLayout;
pub use messages::{PointerEvent, PointerKind, TuiMessage};
pub use model::{TuiApp, TuiOptions};
pub use styles::Palette;
