//! SalesDash: terminal sales dashboard.

use salesdash_lib::{app, config, errors, ui};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    let code = match app::run(&config) {
        Ok(()) => salesdash_core::exit_codes::SUCCESS,
        Err(err) => {
            ui::print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}
