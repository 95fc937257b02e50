// crates/core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Error decoding a stats cache document from raw bytes.
///
/// Decoding is all-or-nothing: a single bad field (including a date string
/// that matches neither accepted format) fails the whole document.
#[derive(Debug, Error)]
#[error("malformed stats cache: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

/// Errors that can occur when loading the stats cache from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Stats file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied reading stats file: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl LoadError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// The message shown to the user. Only "file not found" is surfaced
    /// distinctly; read and decode failures coalesce into one generic
    /// message, with the specific diagnostic available via `Display`.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "No stats file found",
            _ => "Unable to read stats",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_io_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = LoadError::io("/test/path", io_err);
        assert!(matches!(err, LoadError::NotFound { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoadError::io("/test/path", io_err);
        assert!(matches!(err, LoadError::PermissionDenied { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
        let err = LoadError::io("/test/path", io_err);
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_user_message_distinguishes_only_not_found() {
        let not_found = LoadError::not_found("/stats/stats-cache.json");
        assert_eq!(not_found.user_message(), "No stats file found");

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let denied = LoadError::io("/stats/stats-cache.json", io_err);
        assert_eq!(denied.user_message(), "Unable to read stats");
    }

    #[test]
    fn test_load_error_display_includes_path() {
        let err = LoadError::not_found("/path/to/stats-cache.json");
        assert!(err.to_string().contains("/path/to/stats-cache.json"));
        assert!(err.to_string().contains("not found"));
    }
}
