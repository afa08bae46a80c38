//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Preference Store Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Storage error: {message}")]
    Storage { message: String },

    // ─────────────────────────────────────────────────────────────
    // Analysis Pipeline Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported media type for {path}: {media_type}")]
    UnsupportedMediaType { path: PathBuf, media_type: String },

    #[error("Image intake failed: {message}")]
    Intake { message: String },

    #[error("Select a crop or upload an image before analyzing")]
    MissingPrecondition,

    #[error("Inference failed: {message}")]
    Inference { message: String },

    #[error("Failed to save report: {message}")]
    Report { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn unsupported_media_type(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            path: path.into(),
            media_type: media_type.into(),
        }
    }

    pub fn intake(message: impl Into<String>) -> Self {
        Self::Intake {
            message: message.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::storage("disk full");
        assert_eq!(err.to_string(), "Storage error: disk full");

        let err = Error::MissingPrecondition;
        assert!(err.to_string().contains("Select a crop"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unsupported_media_type_mentions_path() {
        let err = Error::unsupported_media_type("/tmp/notes.txt", "text/plain");
        assert!(err.to_string().contains("/tmp/notes.txt"));
        assert!(err.to_string().contains("text/plain"));
    }

    #[test]
    fn test_constructors_carry_message() {
        assert_eq!(
            Error::inference("model offline").to_string(),
            "Inference failed: model offline"
        );
        assert_eq!(
            Error::report("read-only fs").to_string(),
            "Failed to save report: read-only fs"
        );
        assert!(Error::config("bad toml").to_string().contains("bad toml"));
    }
}
