//! Error types for the gacha core.

/// Alias for `Result<T, GachaError>`.
pub type GachaResult<T> = Result<T, GachaError>;

/// Errors that can occur when building or interpreting a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum GachaError {
    /// A linear soft pity curve needs a hard pity threshold above its start.
    #[error("linear soft pity starting at {start} needs a hard pity above it (got {hard_pity})")]
    InvalidSoftPitySpan {
        /// The draw count at which soft pity begins.
        start: u32,
        /// The configured hard pity threshold (0 = none).
        hard_pity: u32,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
}
