//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading catalogs or configuration.
///
/// The query engine and grid reducer never fail; these only surface at the
/// loading edge.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog or config file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A loaded product breaks a data model invariant.
    #[error("Invalid product {id}: {reason}")]
    Validation { id: String, reason: String },
}

impl CatalogError {
    pub(crate) fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::Validation {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
