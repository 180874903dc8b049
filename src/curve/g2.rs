//! G2: the D-type sextic twist `y^2 = x^3 + 3 / (9 + u)` over `Fq2`
//!
//! The twist has a large cofactor, so decoded points must pass an explicit
//! subgroup check (`R * Q == O`) before they are used.

use super::{Affine, CurveParams, Jacobian};
use crate::field::fq6::{XI_TO_Q2_MINUS_1_OVER_3, XI_TO_Q_MINUS_1_OVER_3};
use crate::field::{FieldElement, Fq, Fq2};
use crate::scalar::CURVE_ORDER;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Params;

/// 3 / xi
const TWIST_B: Fq2 = Fq2::new(
    Fq::from_raw([0x3bf938e377b802a8, 0x020b1b273633535d, 0x26b7edf049755260, 0x2514c6324384a86d]),
    Fq::from_raw([0x38e7ecccd1dcff67, 0x65f0b37d93ce0d3e, 0xd749d0dd22ac00aa, 0x0141b9ce4a688d4d]),
);

/// xi^((q - 1) / 2): y-coordinate factor of the twisted Frobenius
const TWIST_Y: Fq2 = Fq2::new(
    Fq::from_raw([0xe4bbdd0c2936b629, 0xbb30f162e133bacb, 0x31a9d1b6f9645366, 0x253570bea500f8dd]),
    Fq::from_raw([0xa1d77ce45ffe77c7, 0x07affd117826d1db, 0x6d16bd27bb7edc6b, 0x2c87200285defecc]),
);

const GENERATOR_X: Fq2 = Fq2::new(
    Fq::from_raw([0x8e83b5d102bc2026, 0xdceb1935497b0172, 0xfbb8264797811adf, 0x19573841af96503b]),
    Fq::from_raw([0xafb4737da84c6140, 0x6043dd5a5802d8c4, 0x09e950fc52a02f86, 0x14fef0833aea7b6b]),
);

const GENERATOR_Y: Fq2 = Fq2::new(
    Fq::from_raw([0x619dfa9d886be9f6, 0xfe7fd297f59e9b78, 0xff9e1a62231b7dfe, 0x28fd7eebae9e4206]),
    Fq::from_raw([0x64095b56c71856ee, 0xdc57f922327d3cbb, 0x55f935be33351076, 0x0da4a0e693fd6482]),
);

impl CurveParams for G2Params {
    type Base = Fq2;
    const NAME: &'static str = "bn128-g2";
    const B: Fq2 = TWIST_B;

    fn generator() -> Affine<Self> {
        Affine::new_unchecked(GENERATOR_X, GENERATOR_Y)
    }

    fn is_in_subgroup(p: &Affine<Self>) -> bool {
        Jacobian::from(*p).mul_u256(&CURVE_ORDER).is_identity()
    }
}

pub type G2Affine = Affine<G2Params>;
pub type G2 = Jacobian<G2Params>;

/// Untwist-Frobenius-twist endomorphism `pi(x, y) = (x^q c_x, y^q c_y)`.
pub(crate) fn frobenius(p: &G2Affine) -> G2Affine {
    if p.infinity {
        return *p;
    }
    Affine::new_unchecked(
        Fq2::mul(p.x.conjugate(), XI_TO_Q_MINUS_1_OVER_3),
        Fq2::mul(p.y.conjugate(), TWIST_Y),
    )
}

/// `pi^2`, which on this twist is `(x * xi^((q^2 - 1) / 3), -y)`.
pub(crate) fn frobenius_squared(p: &G2Affine) -> G2Affine {
    if p.infinity {
        return *p;
    }
    Affine::new_unchecked(Fq2::mul(p.x, XI_TO_Q2_MINUS_1_OVER_3), Fq2::neg(p.y))
}
