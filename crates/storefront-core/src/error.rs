//! Error types for the storefront screen
//!
//! Cart and view operations themselves cannot fail; errors here come from
//! setup (configuration, catalog data) or from events naming unknown items.

use std::path::PathBuf;
use storefront_catalog::{CatalogError, ItemId};

/// Main storefront error type
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Event referenced an item that is not in the catalog
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// Catalog data could not be loaded
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Catalog file could not be read
    #[error("io error reading catalog {path}: {source}")]
    CatalogRead {
        /// Catalog file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the config schema
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for storefront operations
pub type StorefrontResult<T> = Result<T, StorefrontError>;
