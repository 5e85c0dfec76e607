//! Curve25519 known-answer vectors

use edcurve_tests::fixtures::{FULL, PRIME_ORDER};
use edcurve_tests::vectors::{self, VectorError};

#[test]
fn test_vector_file_loads() {
    let file = vectors::load(vectors::CURVE25519_VECTORS).unwrap();
    assert_eq!(file.algorithm, "Curve25519");
    assert_eq!(file.point_len, 32);
    assert!(!file.scalar_mult.is_empty());
    assert!(!file.decode.is_empty());
}

#[test]
fn test_scalar_mult_vectors() {
    let file = vectors::load(vectors::CURVE25519_VECTORS).unwrap();
    let ran = vectors::run_scalar_mult(&*PRIME_ORDER, &file).unwrap();
    assert_eq!(ran, file.scalar_mult.len());
}

#[test]
fn test_decode_vectors_both_group_kinds() {
    let file = vectors::load(vectors::CURVE25519_VECTORS).unwrap();
    assert_eq!(vectors::run_decode(&*PRIME_ORDER, &file).unwrap(), file.decode.len());
    assert_eq!(vectors::run_decode(&*FULL, &file).unwrap(), file.decode.len());
}

#[test]
fn test_runner_reports_mismatch() {
    let json = r#"{
        "algorithm": "Curve25519",
        "pointLen": 32,
        "scalarMult": [
            { "tcId": 42, "scalar": "0200000000000000000000000000000000000000000000000000000000000000",
              "point": "5866666666666666666666666666666666666666666666666666666666666666" }
        ]
    }"#;
    let file = vectors::load(json).unwrap();
    match vectors::run_scalar_mult(&*PRIME_ORDER, &file) {
        Err(VectorError::Mismatch { test_id, .. }) => assert_eq!(test_id, 42),
        other => panic!("expected a mismatch, got {:?}", other),
    }
}

#[test]
fn test_runner_reports_unexpected_success() {
    let json = r#"{
        "algorithm": "Curve25519",
        "pointLen": 32,
        "decode": [
            { "tcId": 7, "point": "5866666666666666666666666666666666666666666666666666666666666666",
              "expectedResult": "invalid" }
        ]
    }"#;
    let file = vectors::load(json).unwrap();
    assert!(matches!(
        vectors::run_decode(&*PRIME_ORDER, &file),
        Err(VectorError::UnexpectedSuccess { test_id: 7 })
    ));
}

#[test]
fn test_runner_rejects_bad_input() {
    assert!(matches!(vectors::load("{"), Err(VectorError::Json(_))));

    let json = r#"{ "algorithm": "Curve25519", "pointLen": 32,
        "decode": [ { "tcId": 1, "point": "zz" } ] }"#;
    let file = vectors::load(json).unwrap();
    assert!(matches!(
        vectors::run_decode(&*PRIME_ORDER, &file),
        Err(VectorError::Hex(_))
    ));
}
