//! Error handling and exit codes.

use salesdash_core::exit_codes;
use salesdash_core::DashError;

/// Exit code for a dashboard error.
#[must_use]
pub fn handle_error(err: &DashError) -> i32 {
    match err {
        DashError::Io(_) | DashError::Serialize(_) => exit_codes::ERROR_GENERIC,
        DashError::InvalidOption { .. } => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for any error reaching `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DashError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
