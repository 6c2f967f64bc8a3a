//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Name and version, as printed at the foot of a report.
#[must_use]
pub fn full_version() -> String {
    format!("salesdash {}", version())
}
