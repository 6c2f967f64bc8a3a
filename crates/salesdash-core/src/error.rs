//! Error type for the dashboard core.

/// Errors raised by preference storage and option parsing.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    /// Reading or writing the preference file failed.
    #[error("preference I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The preference value could not be serialized.
    #[error("preference serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An unknown time range, filter or sort key was requested.
    #[error("invalid {kind}: {value}")]
    InvalidOption { kind: &'static str, value: String },
}

impl DashError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        Self::InvalidOption {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_message() {
        let err = DashError::invalid("time range", "2W");
        assert_eq!(err.to_string(), "invalid time range: 2W");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashError = io.into();
        assert!(matches!(err, DashError::Io(_)));
    }
}
