//! Error type definitions for group operations

use thiserror::Error as ThisError;

/// Primary error type for group operations
///
/// Two classes of failure exist. Runtime failures (`InvalidLength`,
/// `InvalidEncoding`, `InvalidEmbedding`, `InvalidParameter`) are caused by
/// caller input and are always recoverable. `Construction` means a curve
/// failed its own consistency checks and must not be used.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Where the parameter was rejected
        context: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Where the length was checked
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Bytes that do not denote a point on the curve
    #[error("Invalid encoding: {context}: {message}")]
    InvalidEncoding {
        /// Where decoding failed
        context: &'static str,
        /// What was wrong with the input
        message: String,
    },

    /// A point that does not carry embedded data
    #[error("Invalid embedded data: {context}: {message}")]
    InvalidEmbedding {
        /// Where extraction failed
        context: &'static str,
        /// What was wrong with the point
        message: String,
    },

    /// A curve failed its construction-time consistency checks
    #[error("Curve construction failed: {context}: {message}")]
    Construction {
        /// The curve or parameter set being built
        context: &'static str,
        /// The check that failed
        message: String,
    },
}

/// Result type for group operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidEmbedding { message, .. } => Self::InvalidEmbedding { context, message },
            Self::Construction { message, .. } => Self::Construction { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { .. } => self,
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidEmbedding { context, .. } => Self::InvalidEmbedding { context, message },
            Self::Construction { context, .. } => Self::Construction { context, message },
        }
    }

    /// True for the unrecoverable construction-time class
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }
}
