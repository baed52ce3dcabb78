//! Error types and handling infrastructure for curse-screen.
//!
//! Backend faults (terminal I/O failures, writes outside the screen, unknown color
//! pairs) are reported through [`ScreenError`] and are meant to be propagated up to
//! the process. Register and stack misuse is *not* an error: those operations report
//! a [`ContextOutcome`](crate::context::ContextOutcome) instead.

use thiserror::Error;

/// The main error type for curse-screen operations.
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The underlying terminal failed (write, flush, mode switch, event read)
    #[error("Terminal operation failed: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A write started outside the addressable screen
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} screen")]
    OutOfBounds {
        row: u16,
        col: u16,
        rows: u16,
        cols: u16,
    },

    /// A write referenced a color pair that was never registered
    #[error("Color pair {id} has not been registered")]
    UnknownColorPair { id: u8 },

    /// The input source has no more key events to deliver
    #[error("Input source closed")]
    InputClosed,

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for curse-screen operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

impl ScreenError {
    /// Create a Terminal error from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }

    /// Create a Config error with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for the error raised when drawing outside the screen
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl From<std::io::Error> for ScreenError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::BrokenPipe => "Terminal output closed",
            std::io::ErrorKind::Interrupted => "Terminal operation interrupted",
            _ => "Terminal I/O failed",
        };
        Self::Terminal {
            message: message.to_string(),
            source: err,
        }
    }
}
