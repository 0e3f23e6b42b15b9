//! Error types for the profile catalog.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while looking up or loading profiles.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No profile with this id exists.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// Two profiles share an id.
    #[error("duplicate profile id: {0}")]
    DuplicateProfile(String),

    /// A catalog must contain at least one profile.
    #[error("catalog has no profiles")]
    Empty,

    /// A pity kind string was not recognised.
    #[error("invalid pity kind: {0} (expected direct, exchange, or none)")]
    InvalidPityKind(String),

    /// A profile file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A profile document is not valid JSON for the catalog schema.
    #[error("invalid profile file: {0}")]
    Parse(#[from] serde_json::Error),
}
