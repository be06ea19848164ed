//! Error types for event dispatch and configuration

use thiserror::Error;

/// Event bus errors
#[derive(Debug, Error)]
pub enum EventsError {
    /// A listener panicked during `emit`
    ///
    /// Logged at the dispatch site and never returned to the emitter.
    #[error("Listener for `{event}` on the {vocabulary} bus panicked: {message}")]
    ListenerPanicked {
        vocabulary: &'static str,
        event: &'static str,
        message: String,
    },

    /// Configuration could not be decoded
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for event bus operations
pub type Result<T> = std::result::Result<T, EventsError>;
