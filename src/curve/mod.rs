//! Short-Weierstrass group law `y^2 = x^3 + b` shared by G1 and G2
//!
//! The formulas only use [`FieldElement`], so the same code runs over `Fq`
//! for G1 and over `Fq2` for the twisted curve G2.

pub mod g1;
pub mod g2;

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Neg, Sub};

use crate::error::{Bn128Error, Result};
use crate::field::FieldElement;

pub use g1::{G1Affine, G1Params, G1};
pub use g2::{G2Affine, G2Params, G2};

/// Fixed parameters of one of the two BN128 groups.
pub trait CurveParams: Copy + Debug + Eq + 'static {
    /// Coordinate field
    type Base: FieldElement;

    /// Name used in error messages and by the host dispatcher.
    const NAME: &'static str;

    /// Curve coefficient `b`
    const B: Self::Base;

    fn generator() -> Affine<Self>;

    /// Prime-order subgroup membership of a point already known to be on
    /// the curve.
    fn is_in_subgroup(_p: &Affine<Self>) -> bool {
        true
    }
}

/// Affine point on the curve and in the prime-order subgroup.
///
/// Fields are private to the crate; outside it a point can only come from
/// [`Affine::new`], the generators, or group operations on such points.
/// The identity is stored with zero coordinates and `infinity` set, so
/// derived equality is group equality.
///
/// ```compile_fail
/// use bn128_precompile::G1Affine;
/// use bn128_precompile::field::{FieldElement, Fq};
///
/// let p: G1Affine = bn128_precompile::curve::Affine { x: Fq::ZERO, y: Fq::ZERO, infinity: false };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) infinity: bool,
}

impl<C: CurveParams> Affine<C> {
    /// Validated construction. `(0, 0)` is accepted as the identity.
    pub fn new(x: C::Base, y: C::Base) -> Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::identity());
        }
        let p = Self::new_unchecked(x, y);
        if !p.is_on_curve() {
            return Err(Bn128Error::NotOnCurve { curve: C::NAME });
        }
        if !C::is_in_subgroup(&p) {
            return Err(Bn128Error::NotInSubgroup { curve: C::NAME });
        }
        Ok(p)
    }

    pub(crate) const fn new_unchecked(x: C::Base, y: C::Base) -> Self {
        Affine { x, y, infinity: false }
    }

    pub const fn identity() -> Self {
        Affine { x: C::Base::ZERO, y: C::Base::ZERO, infinity: true }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Affine `x`; zero for the identity.
    #[inline]
    pub fn x(&self) -> C::Base {
        self.x
    }

    /// Affine `y`; zero for the identity.
    #[inline]
    pub fn y(&self) -> C::Base {
        self.y
    }

    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let y2 = C::Base::square(self.y);
        let x3 = C::Base::mul(C::Base::square(self.x), self.x);
        y2 == C::Base::add(x3, C::B)
    }
}

impl<C: CurveParams> Neg for Affine<C> {
    type Output = Affine<C>;

    fn neg(self) -> Affine<C> {
        if self.infinity {
            self
        } else {
            Affine::new_unchecked(self.x, C::Base::neg(self.y))
        }
    }
}

/// Jacobian point `(X, Y, Z)` standing for `(X / Z^2, Y / Z^3)`; `Z = 0` is
/// the identity.
#[derive(Clone, Copy, Debug)]
pub struct Jacobian<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) z: C::Base,
}

impl<C: CurveParams> Jacobian<C> {
    pub const fn identity() -> Self {
        Jacobian { x: C::Base::ONE, y: C::Base::ONE, z: C::Base::ZERO }
    }

    pub fn generator() -> Self {
        C::generator().into()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// dbl-2009-l (a = 0)
    pub fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        let a = C::Base::square(self.x);
        let b = C::Base::square(self.y);
        let c = C::Base::square(b);

        // D = 2 * ((X + B)^2 - A - C)
        let d = C::Base::sub(C::Base::sub(C::Base::square(C::Base::add(self.x, b)), a), c);
        let d = C::Base::double(d);
        let e = C::Base::add(C::Base::double(a), a);
        let f = C::Base::square(e);

        let x3 = C::Base::sub(f, C::Base::double(d));
        let c8 = C::Base::double(C::Base::double(C::Base::double(c)));
        let y3 = C::Base::sub(C::Base::mul(e, C::Base::sub(d, x3)), c8);
        let z3 = C::Base::double(C::Base::mul(self.y, self.z));

        Jacobian { x: x3, y: y3, z: z3 }
    }

    /// add-2007-bl, falling back to doubling when both inputs are the same
    /// point and to the identity when they are inverses.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1z1 = C::Base::square(self.z);
        let z2z2 = C::Base::square(other.z);
        let u1 = C::Base::mul(self.x, z2z2);
        let u2 = C::Base::mul(other.x, z1z1);
        let s1 = C::Base::mul(C::Base::mul(self.y, other.z), z2z2);
        let s2 = C::Base::mul(C::Base::mul(other.y, self.z), z1z1);

        if u1 == u2 {
            return if s1 == s2 { self.double() } else { Self::identity() };
        }

        let h = C::Base::sub(u2, u1);
        let i = C::Base::square(C::Base::double(h));
        let j = C::Base::mul(h, i);
        let r = C::Base::double(C::Base::sub(s2, s1));
        let v = C::Base::mul(u1, i);

        let x3 = C::Base::sub(C::Base::sub(C::Base::square(r), j), C::Base::double(v));
        let s1j = C::Base::mul(s1, j);
        let y3 = C::Base::sub(C::Base::mul(r, C::Base::sub(v, x3)), C::Base::double(s1j));
        let zz = C::Base::square(C::Base::add(self.z, other.z));
        let z3 = C::Base::mul(C::Base::sub(C::Base::sub(zz, z1z1), z2z2), h);

        Jacobian { x: x3, y: y3, z: z3 }
    }

    /// Normalize to affine coordinates. Only the identity has no inverse of
    /// `Z`, so a failed inversion maps to the affine identity.
    pub fn to_affine(&self) -> Affine<C> {
        match C::Base::inv(self.z) {
            Some(zinv) => {
                let zinv2 = C::Base::square(zinv);
                let zinv3 = C::Base::mul(zinv2, zinv);
                Affine::new_unchecked(C::Base::mul(self.x, zinv2), C::Base::mul(self.y, zinv3))
            }
            None => Affine::identity(),
        }
    }

    /// Same point with `Z = 1`, or the fixed identity representation.
    pub fn to_canonical_form(&self) -> Self {
        self.to_affine().into()
    }
}

impl<C: CurveParams> From<Affine<C>> for Jacobian<C> {
    fn from(p: Affine<C>) -> Self {
        if p.infinity {
            Jacobian::identity()
        } else {
            Jacobian { x: p.x, y: p.y, z: C::Base::ONE }
        }
    }
}

impl<C: CurveParams> PartialEq for Jacobian<C> {
    /// Cross-multiplied comparison, no inversion needed.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        let z1z1 = C::Base::square(self.z);
        let z2z2 = C::Base::square(other.z);
        if C::Base::mul(self.x, z2z2) != C::Base::mul(other.x, z1z1) {
            return false;
        }
        let z1z1z1 = C::Base::mul(z1z1, self.z);
        let z2z2z2 = C::Base::mul(z2z2, other.z);
        C::Base::mul(self.y, z2z2z2) == C::Base::mul(other.y, z1z1z1)
    }
}

impl<C: CurveParams> Eq for Jacobian<C> {}

impl<C: CurveParams> Add for Jacobian<C> {
    type Output = Jacobian<C>;

    fn add(self, rhs: Jacobian<C>) -> Jacobian<C> {
        Jacobian::add(&self, &rhs)
    }
}

impl<C: CurveParams> AddAssign for Jacobian<C> {
    fn add_assign(&mut self, rhs: Jacobian<C>) {
        *self = *self + rhs;
    }
}

impl<C: CurveParams> Neg for Jacobian<C> {
    type Output = Jacobian<C>;

    fn neg(self) -> Jacobian<C> {
        Jacobian { x: self.x, y: C::Base::neg(self.y), z: self.z }
    }
}

impl<C: CurveParams> Sub for Jacobian<C> {
    type Output = Jacobian<C>;

    fn sub(self, rhs: Jacobian<C>) -> Jacobian<C> {
        Jacobian::add(&self, &-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laws<C: CurveParams>() {
        let g = Jacobian::<C>::generator();
        let o = Jacobian::<C>::identity();

        assert_eq!(g + o, g);
        assert_eq!(o + g, g);
        assert!((g + (-g)).is_identity());
        assert_eq!(g + g, g.double());

        let g2 = g.double();
        let g3 = g2 + g;
        assert_eq!(g + g2, g3);
        assert_eq!(g3 - g, g2);
        assert_eq!((g2 + g2) + g2, g3.double());
        assert!(g3.to_affine().is_on_curve());
        assert_eq!(g3.to_canonical_form(), g3);
        assert_eq!(g3.to_canonical_form().z, C::Base::ONE);
    }

    #[test]
    fn test_group_laws_g1() {
        laws::<G1Params>();
    }

    #[test]
    fn test_group_laws_g2() {
        laws::<G2Params>();
    }

    #[test]
    fn test_identity_representation() {
        let o = G1::identity();
        assert_eq!(o.to_affine(), G1Affine::identity());
        assert_eq!(G1::from(G1Affine::identity()), o);
        assert!(o.double().is_identity());
        assert_eq!(-G2Affine::identity(), G2Affine::identity());
    }

    #[test]
    fn test_new_rejects_invalid_coordinates() {
        use crate::field::{Fq, Fq2};

        let off_curve = Fq2::new(Fq::from_u64(5), Fq::ZERO);
        assert_eq!(
            G2Affine::new(Fq2::ONE, off_curve),
            Err(Bn128Error::NotOnCurve { curve: "bn128-g2" })
        );
        assert_eq!(
            G1Affine::new(Fq::ONE, Fq::from_u64(3)),
            Err(Bn128Error::NotOnCurve { curve: "bn128-g1" })
        );

        let o = G1Affine::new(Fq::ZERO, Fq::ZERO).unwrap();
        assert_eq!(o, G1Affine::identity());
        assert!(o.x().is_zero() && o.y().is_zero());

        let g = G2Params::generator();
        assert_eq!(G2Affine::new(g.x(), g.y()).unwrap(), g);
    }

    #[test]
    fn test_affine_neg_is_on_curve() {
        let g = G2Params::generator();
        assert!((-g).is_on_curve());
        assert_ne!(-g, g);
        assert_eq!(-(-g), g);
    }
}
