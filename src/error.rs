use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for locale verification operations
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Failed to read a locale file from disk
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Locale file is not valid JSON
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to list the locales directory
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the final report
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl VerifyError {
    /// Create a Read error from a path and io error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a Parse error from a path and serde_json error
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for VerifyError
pub type Result<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = VerifyError::read("src/i18n/locales/en.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("en.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err = VerifyError::parse("locales/ar.json", json_err);
        let msg = err.to_string();
        assert!(msg.contains("invalid JSON"));
        assert!(msg.contains("ar.json"));
    }

    #[test]
    fn test_read_dir_error_names_directory() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = VerifyError::ReadDir {
            path: PathBuf::from("src/i18n/locales"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to read directory"));
        assert!(msg.contains("locales"));
    }

    #[test]
    fn test_render_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let err: VerifyError = json_err.into();
        assert!(err.to_string().contains("failed to render report"));
    }
}
