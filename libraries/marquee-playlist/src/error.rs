//! Error types for playlist configuration

use thiserror::Error;

/// Playlist errors
///
/// Navigation never fails; invalid requests are ignored. Errors only come
/// from building an engine out of external configuration.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Configuration could not be decoded
    #[error("Invalid playlist config: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration decoded but holds an unusable value
    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
