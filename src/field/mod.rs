//! BN128 field tower
//!
//! `Fq` is the base field, `Fq2 = Fq[u]/(u^2 + 1)` carries G2 coordinates,
//! and `Fq6 = Fq2[v]/(v^3 - (9 + u))`, `Fq12 = Fq6[w]/(w^2 - v)` hold
//! pairing values.
//!
//! Every level implements [`FieldElement`], which is the only capability the
//! generic group law in [`crate::curve`] relies on.

pub mod fq;
pub mod fq12;
pub mod fq2;
pub mod fq6;

pub use fq::{Fq, MODULUS};
pub use fq12::Fq12;
pub use fq2::Fq2;
pub use fq6::Fq6;

/// Exact arithmetic shared by every level of the tower.
///
/// Values are always kept reduced, so derived equality is field equality.
pub trait FieldElement: Copy + Eq + core::fmt::Debug {
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;

    fn add(a: Self, b: Self) -> Self;

    fn sub(a: Self, b: Self) -> Self;

    fn mul(a: Self, b: Self) -> Self;

    fn neg(a: Self) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn inv(a: Self) -> Option<Self>;

    #[inline]
    fn square(a: Self) -> Self {
        Self::mul(a, a)
    }

    #[inline]
    fn double(a: Self) -> Self {
        Self::add(a, a)
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}
