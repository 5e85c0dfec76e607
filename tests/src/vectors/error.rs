//! Structured error types for the vector runner

use thiserror::Error;

/// Why a vector file could not be loaded or a case failed
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("group operation failed: {0}")]
    Group(#[from] edcurve_api::Error),

    #[error("case {test_id}: mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        test_id: u64,
        expected: String,
        actual: String,
    },

    #[error("case {test_id}: expected failure but operation succeeded")]
    UnexpectedSuccess { test_id: u64 },

    #[error("case {test_id}: error '{message}' does not mention '{expected}'")]
    WrongFailure {
        test_id: u64,
        expected: String,
        message: String,
    },

    #[error("case {test_id}: unknown expected result '{result}'")]
    UnknownExpectation { test_id: u64, result: String },
}

pub type Result<T> = std::result::Result<T, VectorError>;
