//! Scalars of the order-R groups and scalar multiplication

use alloy_primitives::U256;

use crate::curve::{CurveParams, Jacobian};
use crate::error::{Bn128Error, Result};

/// Group order R (of G1, of the G2 subgroup and of the pairing target group)
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const CURVE_ORDER: U256 = U256::from_limbs([
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// Integer in `[0, R)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Scalar(U256);

impl Scalar {
    pub const ZERO: Scalar = Scalar(U256::ZERO);
    pub const ONE: Scalar = Scalar(U256::from_limbs([1, 0, 0, 0]));

    /// Unsigned big-endian bytes of any length. Leading zero bytes are
    /// ignored and the empty string is zero. Values `>= R` are rejected
    /// rather than reduced.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Scalar> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let value =
            U256::try_from_be_slice(&bytes[start..]).ok_or(Bn128Error::ScalarOutOfRange)?;
        Scalar::from_u256(value)
    }

    pub fn from_u256(value: U256) -> Result<Scalar> {
        if value >= CURVE_ORDER {
            return Err(Bn128Error::ScalarOutOfRange);
        }
        Ok(Scalar(value))
    }

    pub fn from_u64(value: u64) -> Scalar {
        // every u64 is far below R
        Scalar(U256::from(value))
    }

    pub fn to_u256(self) -> U256 {
        self.0
    }
}

impl<C: CurveParams> Jacobian<C> {
    /// `k * self`
    pub fn mul(&self, k: &Scalar) -> Self {
        self.mul_u256(&k.0)
    }

    /// Double-and-add from the most significant bit. Accepts any 256-bit
    /// value so that `R * P` is expressible for the subgroup check.
    pub(crate) fn mul_u256(&self, k: &U256) -> Self {
        let mut acc = Jacobian::identity();
        for i in (0..k.bit_len()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = Jacobian::add(&acc, self);
            }
        }
        acc
    }
}
