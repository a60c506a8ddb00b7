//! Error types for the board document engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for koan-core operations
pub type Result<T> = std::result::Result<T, KoanError>;

/// Errors that can occur while validating or storing board documents
#[derive(Debug, Error)]
pub enum KoanError {
    /// Input is not recognizable as a board document at all
    #[error("input is not valid board data: {message}")]
    InvalidDocument { message: String },

    /// Document was written by a newer version of the software
    #[error("the board you are trying to read is too recent (version {version}); upgrade Koan to at least that version and try again")]
    UnsupportedVersion { version: String },

    /// A board with the same safe name already exists on disk
    #[error("a board with the same name already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// Filesystem failure while creating or writing a board
    #[error("storage failure at {path}: {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KoanError {
    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create a storage failure for the given path
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// True for the two conditions `validate` treats as unrecoverable
    /// for a given document.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidDocument { .. } | Self::UnsupportedVersion { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_version_names_the_version() {
        let err = KoanError::UnsupportedVersion {
            version: "999.0.0".into(),
        };
        assert!(err.to_string().contains("999.0.0"));
    }

    #[test]
    fn test_invalid_document_display() {
        let err = KoanError::invalid_document("missing discriminator");
        assert!(err.to_string().contains("missing discriminator"));
    }

    #[test]
    fn test_rejection_classification() {
        assert!(KoanError::invalid_document("x").is_rejection());
        assert!(KoanError::UnsupportedVersion {
            version: "2.0.0".into()
        }
        .is_rejection());
        assert!(!KoanError::AlreadyExists {
            path: PathBuf::from("/tmp/b")
        }
        .is_rejection());
    }
}
