//! Constants for twisted Edwards curves

/// Curve25519 in twisted Edwards form: -x² + y² = 1 + d·x²·y²
pub mod curve25519 {
    /// Human readable curve name
    pub const NAME: &str = "Curve25519";

    /// Field prime p = 2^255 - 19
    pub const P: &str =
        "57896044618658097711785492504343953926634992332820282019728792003956564819949";

    /// Prime subgroup order r = 2^252 + 27742317777372353535851937790883648493
    pub const R: &str =
        "7237005577332262213973186563042994240857116359379907606001950938285454250989";

    /// Low part of the subgroup order, r - 2^252
    pub const R_LOW: &str = "27742317777372353535851937790883648493";

    /// Cofactor s
    pub const COFACTOR: u64 = 8;

    /// Coefficient a = -1, as a signed small integer
    pub const A: i64 = -1;

    /// Numerator of d = -121665 / 121666
    pub const D_NUM: i64 = -121665;

    /// Denominator of d = -121665 / 121666
    pub const D_DEN: i64 = 121666;

    /// Coefficient d reduced modulo p
    pub const D: &str =
        "37095705934669439343138083508754565189542113879843219016388785533085940283555";

    /// x-coordinate of the standard base point
    pub const BASE_X: &str =
        "15112221349535400772501151409588531511454012693041857206046113283949847762202";

    /// y-coordinate of the standard base point, 4/5 mod p
    pub const BASE_Y: &str =
        "46316835694926478169428394003475163141307993866256225615783033603165251855960";

    /// Size of a field element in bytes
    pub const FIELD_ELEMENT_SIZE: usize = 32;

    /// Size of a compressed point in bytes: y plus the sign bit of x
    pub const POINT_COMPRESSED_SIZE: usize = 32;

    /// Number of payload bytes a single point can carry
    pub const EMBED_CAPACITY: usize = 29;

    /// Size of the wide random buffer reduced into a scalar
    pub const SCALAR_WIDE_SIZE: usize = 64;
}
