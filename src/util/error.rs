//! Error types for the gaf library.

use thiserror::Error;

/// Main error type for GAF decoding operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A fixed-size read needs more bytes than the input holds
    #[error("Unexpected end of stream: {needed}-byte read at position {position} overruns the input")]
    UnexpectedEndOfStream { position: usize, needed: usize },

    /// An input contract was broken before decoding started
    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),

    /// The stream contents violate the format's positional invariants
    #[error("Malformed stream: {0}")]
    MalformedStream(String),
}

impl Error {
    /// Create an end-of-stream error for a read of `needed` bytes at `position`.
    pub fn eof(position: usize, needed: usize) -> Self {
        Self::UnexpectedEndOfStream { position, needed }
    }

    /// Create a precondition error from a message.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolated(msg.into())
    }

    /// Create a malformed-stream error from a message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedStream(msg.into())
    }
}

/// Result type alias for GAF decoding operations.
pub type Result<T> = std::result::Result<T, Error>;
