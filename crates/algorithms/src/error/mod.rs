//! Error handling for group primitives

use edcurve_api::{Error as CoreError, Result as CoreResult};
use std::borrow::Cow;
use thiserror::Error as ThisError;

/// The error type for group primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Bytes that do not decode to a curve point
    #[error("Invalid encoding for {context}: {details}")]
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        details: &'static str,
    },

    /// Point that does not carry a valid embedded payload
    #[error("Invalid embedded data: {details}")]
    Embedding {
        /// Why extraction failed
        details: &'static str,
    },

    /// Curve parameters or distinguished points failed validation
    #[error("Construction of {context} failed: {details}")]
    Construction {
        /// Curve or parameter set being built
        context: &'static str,
        /// The check that failed
        details: Cow<'static, str>,
    },
}

// Add convenience helpers
impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Construction error
    pub fn construction<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Construction {
            context,
            details: details.into(),
        }
    }
}

/// Result type for group primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, details } => CoreError::InvalidEncoding {
                context,
                message: details.to_string(),
            },
            Error::Embedding { details } => CoreError::InvalidEmbedding {
                context: "extract",
                message: details.to_string(),
            },
            Error::Construction { context, details } => CoreError::Construction {
                context,
                message: details.into_owned(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.with_context(ctx)
}

// Re-export core error handling traits for convenience
pub use edcurve_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
