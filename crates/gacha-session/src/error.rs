//! Error types for gacha sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A pull must draw at least once.
    #[error("invalid draw count: {0} (must be at least 1)")]
    InvalidDrawCount(u32),

    /// Profile lookup failed.
    #[error("{0}")]
    Catalog(#[from] gacha_catalog::CatalogError),

    /// The session could not be serialized.
    #[error("cannot export session: {0}")]
    Export(#[from] serde_json::Error),
}
