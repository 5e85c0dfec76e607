//! Data model for vector files

use serde::Deserialize;

/// A whole vector file for one group
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorFile {
    pub algorithm: String,
    pub point_len: usize,
    #[serde(default)]
    pub scalar_mult: Vec<ScalarMultCase>,
    #[serde(default)]
    pub decode: Vec<DecodeCase>,
}

/// `scalar · B` must encode to `point`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarMultCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    /// Little-endian scalar, hex
    pub scalar: String,
    /// Compressed point, hex
    pub point: String,
}

/// Decoding `point` must succeed or fail as stated
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    pub point: String,
    #[serde(default = "default_expected_result")]
    pub expected_result: String,
    #[serde(default)]
    pub error_contains: Option<String>,
}

fn default_expected_result() -> String {
    "valid".into()
}
