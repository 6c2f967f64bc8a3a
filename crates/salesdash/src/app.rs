//! Application entry point and dispatch.

use anyhow::{Context, Result};
use salesdash_core::{JsonFileStore, ThemePreference};
use salesdash_tui::{TuiApp, TuiOptions};

use crate::config::AppConfig;
use crate::report::render_report;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        crate::completion::write_completion(shell, &mut std::io::stdout())
            .context("failed to write completion script")?;
        return Ok(());
    }

    let options = config.tui_options()?;
    let theme = load_theme(config);

    if config.report {
        return run_report(&options, &theme);
    }

    run_tui(theme, options)
}

fn load_theme(config: &AppConfig) -> ThemePreference {
    let path = config.prefs_path();
    tracing::debug!(path = %path.display(), "using preference file");
    ThemePreference::new(Box::new(JsonFileStore::new(path)))
}

fn run_report(options: &TuiOptions, theme: &ThemePreference) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    print!(
        "{}",
        render_report(options, theme.mode(), today, crate::ui::use_color())
    );
    Ok(())
}

fn run_tui(theme: ThemePreference, options: TuiOptions) -> Result<()> {
    let mut app = TuiApp::new(theme, options);
    app.run().context("terminal UI failed")?;
    Ok(())
}
