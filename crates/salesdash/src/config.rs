//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use salesdash_core::theme::default_path;
use salesdash_core::{DashError, ProductFilter, SortKey, TimeRange};
use salesdash_tui::TuiOptions;

/// SalesDash: terminal sales dashboard with revenue, trend and product views.
#[derive(Parser, Debug)]
#[command(name = "salesdash", version, about)]
pub struct AppConfig {
    /// Preference file holding the dark-mode flag.
    #[arg(long, env = "SALESDASH_PREFS")]
    pub prefs: Option<PathBuf>,

    /// Print a plain-text snapshot instead of launching the TUI.
    #[arg(long)]
    pub report: bool,

    /// Initial time range: 1M, 3M, 6M or 1Y.
    #[arg(long, default_value = "1Y")]
    pub range: String,

    /// Initial product filter: all, trending-up, stable or declining.
    #[arg(long, default_value = "all")]
    pub filter: String,

    /// Initial product sort: sales, growth or name.
    #[arg(long, default_value = "sales")]
    pub sort: String,

    /// Disable mouse capture.
    #[arg(long)]
    pub no_mouse: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Preference file location, explicit or default.
    #[must_use]
    pub fn prefs_path(&self) -> PathBuf {
        self.prefs.clone().unwrap_or_else(default_path)
    }

    /// Typed initial view settings.
    pub fn tui_options(&self) -> Result<TuiOptions, DashError> {
        Ok(TuiOptions {
            range: self.range.parse::<TimeRange>()?,
            filter: self.filter.parse::<ProductFilter>()?,
            sort: self.sort.parse::<SortKey>()?,
            mouse: !self.no_mouse,
        })
    }
}
