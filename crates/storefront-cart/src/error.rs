//! Error types for cart persistence
//!
//! None of these reach the ledger's callers: a failed load yields an empty
//! cart and a failed save is logged by the writer.

use std::path::PathBuf;

/// Errors from a key-value store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Key contains characters the store cannot represent
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// IO error in a file-backed store
    #[error("io error on {path}: {source}")]
    Io {
        /// File the store was accessing
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors encoding or decoding the persisted cart payload
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Ledger could not be serialized
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored bytes are not a cart line array
    #[error("failed to decode cart: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_display() {
        let err = StorageError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "invalid storage key: '../etc'");
    }

    #[test]
    fn io_error_display() {
        let err = StorageError::io_error(
            "/tmp/cart",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("io error on /tmp/cart"));
    }
}
