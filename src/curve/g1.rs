//! G1: `y^2 = x^3 + 3` over `Fq`
//!
//! The curve has prime order R, so every point on it is in the subgroup.

use super::{Affine, CurveParams, Jacobian};
use crate::field::{FieldElement, Fq};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Params;

/// 3 in Montgomery form
const B: Fq = Fq::from_raw([0x7a17caa950ad28d7, 0x1f6ac17ae15521b9, 0x334bea4e696bd284, 0x2a1f6744ce179d8e]);

/// 2 in Montgomery form
const GENERATOR_Y: Fq =
    Fq::from_raw([0xa6ba871b8b1e1b3a, 0x14f1d651eb8e167b, 0xccdd46def0f28c58, 0x1c14ef83340fbe5e]);

impl CurveParams for G1Params {
    type Base = Fq;
    const NAME: &'static str = "bn128-g1";
    const B: Fq = B;

    /// (1, 2)
    fn generator() -> Affine<Self> {
        Affine::new_unchecked(Fq::ONE, GENERATOR_Y)
    }
}

pub type G1Affine = Affine<G1Params>;
pub type G1 = Jacobian<G1Params>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Bn128Error;

    #[test]
    fn test_constants() {
        assert_eq!(B, Fq::from_u64(3));
        assert_eq!(GENERATOR_Y, Fq::from_u64(2));
    }

    #[test]
    fn test_generator_on_curve() {
        assert!(G1Params::generator().is_on_curve());
        assert_eq!(G1Affine::new(Fq::ONE, Fq::from_u64(2)).unwrap(), G1Params::generator());
    }

    #[test]
    fn test_rejects_point_off_curve() {
        let err = G1Affine::new(Fq::ONE, Fq::from_u64(3)).unwrap_err();
        assert_eq!(err, Bn128Error::NotOnCurve { curve: "bn128-g1" });
    }

    #[test]
    fn test_zero_coordinates_are_identity() {
        let p = G1Affine::new(Fq::ZERO, Fq::ZERO).unwrap();
        assert!(p.is_identity());
        // (0, y) with y != 0 is an ordinary point and x^3 + 3 = y^2 fails
        assert!(G1Affine::new(Fq::ZERO, Fq::ONE).is_err());
    }
}
