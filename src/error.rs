//! Error types for sortviz.
//!
//! All fallible operations return `Result<T, VizError>` instead of
//! panicking. Sorting itself is infallible given a valid slice; errors
//! come from the rendering surface, the terminal, and configuration.

use thiserror::Error;

/// Result type alias for sortviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all sortviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// The rendering surface could not be created or driven.
    #[error("Surface error: {message}")]
    Surface {
        /// Description of the surface failure.
        message: String,
    },

    /// Terminal or stream I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a surface error with a message.
    #[must_use]
    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface {
            message: message.into(),
        }
    }

    /// Check if this error came from the rendering surface.
    #[must_use]
    pub const fn is_surface_failure(&self) -> bool {
        matches!(self, Self::Surface { .. })
    }
}
