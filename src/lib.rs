//! BN128 Precompile Library
//!
//! Point addition, scalar multiplication and batched pairing checks on the
//! BN128 (alt-bn128) curve, with the byte layouts used by contract
//! precompiles. Can be used as a library or via the `bn128` CLI binary.

pub mod codec;
pub mod curve;
pub mod error;
pub mod field;
pub mod ops;
pub mod pairing;
pub mod scalar;

pub use crate::curve::{G1Affine, G2Affine, G1, G2};
pub use crate::error::{Bn128Error, Result};
pub use crate::ops::{
    ec_add, ec_pairing_check, ec_scalar_mul, g1_add, g1_scalar_mul, g2_add, g2_scalar_mul,
    pairing_check, Curve, CurveOps, OpLimits,
};
pub use crate::pairing::{pairing, PairingCheck};
pub use crate::scalar::{Scalar, CURVE_ORDER};
