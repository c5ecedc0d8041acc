//! Application error types with rich context

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
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Capability Retrieval Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Capability retrieval failed: {message}")]
    Capabilities { message: String },

    #[error("Invalid service endpoint: {url}")]
    InvalidEndpoint { url: String },

    #[error("Layer has no service endpoint configured: {node}")]
    MissingEndpoint { node: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
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

    pub fn capabilities(message: impl Into<String>) -> Self {
        Self::Capabilities {
            message: message.into(),
        }
    }

    pub fn invalid_endpoint(url: impl Into<String>) -> Self {
        Self::InvalidEndpoint { url: url.into() }
    }

    pub fn missing_endpoint(node: impl Into<String>) -> Self {
        Self::MissingEndpoint { node: node.into() }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Recoverable errors degrade the panel to "nothing selected" or
    /// "default tab" states rather than surfacing to the user.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Capabilities { .. }
                | Error::InvalidEndpoint { .. }
                | Error::MissingEndpoint { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should abort panel construction
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
