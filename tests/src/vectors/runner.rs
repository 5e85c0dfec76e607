//! Executes vector files against a group

use super::error::{Result, VectorError};
use super::model::VectorFile;
use edcurve_api::{Group, GroupElement};
use num_bigint::BigUint;

/// The Curve25519 vector file shipped with this crate
pub static CURVE25519_VECTORS: &str = include_str!("../../vectors/curve25519.json");

/// Parse a vector file
pub fn load(json: &str) -> Result<VectorFile> {
    Ok(serde_json::from_str(json)?)
}

/// Check every scalar multiplication case; returns the number of cases run
///
/// Each expected point is also decoded and re-encoded.
pub fn run_scalar_mult<G>(group: &G, file: &VectorFile) -> Result<usize>
where
    G: Group<Scalar = BigUint>,
{
    for case in &file.scalar_mult {
        let scalar = BigUint::from_bytes_le(&hex::decode(&case.scalar)?);
        let actual = hex::encode(group.base().mul(&scalar).encode());
        if actual != case.point {
            return Err(VectorError::Mismatch {
                test_id: case.test_id,
                expected: case.point.clone(),
                actual,
            });
        }

        let mut decoded = group.identity();
        decoded.decode(&hex::decode(&case.point)?)?;
        let reencoded = hex::encode(decoded.encode());
        if reencoded != case.point {
            return Err(VectorError::Mismatch {
                test_id: case.test_id,
                expected: case.point.clone(),
                actual: reencoded,
            });
        }
    }
    Ok(file.scalar_mult.len())
}

/// Check every decoding case; returns the number of cases run
pub fn run_decode<G: Group>(group: &G, file: &VectorFile) -> Result<usize> {
    for case in &file.decode {
        let bytes = hex::decode(&case.point)?;
        let mut p = group.identity();
        let outcome = p.decode(&bytes);

        match (case.expected_result.as_str(), outcome) {
            ("valid", Ok(())) => {
                let actual = hex::encode(p.encode());
                if actual != case.point {
                    return Err(VectorError::Mismatch {
                        test_id: case.test_id,
                        expected: case.point.clone(),
                        actual,
                    });
                }
            }
            ("valid", Err(e)) => return Err(e.into()),
            ("invalid", Ok(())) => {
                return Err(VectorError::UnexpectedSuccess {
                    test_id: case.test_id,
                })
            }
            ("invalid", Err(e)) => {
                let message = e.to_string();
                if let Some(expected) = &case.error_contains {
                    if !message.contains(expected.as_str()) {
                        return Err(VectorError::WrongFailure {
                            test_id: case.test_id,
                            expected: expected.clone(),
                            message,
                        });
                    }
                }
                if p != group.identity() {
                    return Err(VectorError::Mismatch {
                        test_id: case.test_id,
                        expected: "unchanged point".into(),
                        actual: p.to_string(),
                    });
                }
            }
            (other, _) => {
                return Err(VectorError::UnknownExpectation {
                    test_id: case.test_id,
                    result: other.to_string(),
                })
            }
        }
    }
    Ok(file.decode.len())
}
