//! Quadratic extension `Fq2 = Fq[u] / (u^2 + 1)`
//!
//! G2 coordinates live here. Elements are `c0 + c1 * u`.

use super::{FieldElement, Fq};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fq2 {
    pub c0: Fq,
    pub c1: Fq,
}

impl Fq2 {
    #[inline(always)]
    pub const fn new(c0: Fq, c1: Fq) -> Self {
        Fq2 { c0, c1 }
    }

    /// Complex conjugate `c0 - c1 * u`, which is also the q-power Frobenius.
    #[inline]
    pub fn conjugate(self) -> Fq2 {
        Fq2::new(self.c0, Fq::neg(self.c1))
    }

    /// Multiply both components by a base field scalar.
    #[inline]
    pub fn mul_by_fq(self, k: Fq) -> Fq2 {
        Fq2::new(Fq::mul(self.c0, k), Fq::mul(self.c1, k))
    }

    /// Multiply by the cubic non-residue `xi = 9 + u`:
    /// (c0 + c1 u)(9 + u) = (9 c0 - c1) + (9 c1 + c0) u
    #[inline]
    pub fn mul_by_nonresidue(self) -> Fq2 {
        let eight = Fq2::double(Fq2::double(Fq2::double(self)));
        let nine = Fq2::add(eight, self);
        Fq2::new(Fq::sub(nine.c0, self.c1), Fq::add(nine.c1, self.c0))
    }

    /// `self^(q^power)`
    #[inline]
    pub fn frobenius_map(self, power: usize) -> Fq2 {
        if power % 2 == 0 {
            self
        } else {
            self.conjugate()
        }
    }
}

impl FieldElement for Fq2 {
    const ZERO: Fq2 = Fq2::new(Fq::ZERO, Fq::ZERO);
    const ONE: Fq2 = Fq2::new(Fq::ONE, Fq::ZERO);

    #[inline]
    fn add(a: Fq2, b: Fq2) -> Fq2 {
        Fq2::new(Fq::add(a.c0, b.c0), Fq::add(a.c1, b.c1))
    }

    #[inline]
    fn sub(a: Fq2, b: Fq2) -> Fq2 {
        Fq2::new(Fq::sub(a.c0, b.c0), Fq::sub(a.c1, b.c1))
    }

    /// Karatsuba: three base field multiplications.
    #[inline]
    fn mul(a: Fq2, b: Fq2) -> Fq2 {
        let v0 = Fq::mul(a.c0, b.c0);
        let v1 = Fq::mul(a.c1, b.c1);
        let cross = Fq::mul(Fq::add(a.c0, a.c1), Fq::add(b.c0, b.c1));
        Fq2::new(Fq::sub(v0, v1), Fq::sub(Fq::sub(cross, v0), v1))
    }

    #[inline]
    fn neg(a: Fq2) -> Fq2 {
        Fq2::new(Fq::neg(a.c0), Fq::neg(a.c1))
    }

    /// (c0 + c1 u)^2 = (c0 + c1)(c0 - c1) + 2 c0 c1 u
    #[inline]
    fn square(a: Fq2) -> Fq2 {
        let c0 = Fq::mul(Fq::add(a.c0, a.c1), Fq::sub(a.c0, a.c1));
        let c1 = Fq::double(Fq::mul(a.c0, a.c1));
        Fq2::new(c0, c1)
    }

    /// 1 / (c0 + c1 u) = (c0 - c1 u) / (c0^2 + c1^2)
    #[inline]
    fn inv(a: Fq2) -> Option<Fq2> {
        let norm = Fq::add(Fq::square(a.c0), Fq::square(a.c1));
        let t = Fq::inv(norm)?;
        Some(Fq2::new(Fq::mul(a.c0, t), Fq::neg(Fq::mul(a.c1, t))))
    }
}

impl core::fmt::Debug for Fq2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fq2({:?} + {:?} * u)", self.c0, self.c1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fq2(c0: u64, c1: u64) -> Fq2 {
        Fq2::new(Fq::from_u64(c0), Fq::from_u64(c1))
    }

    #[test]
    fn test_u_squared_is_minus_one() {
        let u = fq2(0, 1);
        assert_eq!(Fq2::mul(u, u), Fq2::neg(Fq2::ONE));
    }

    #[test]
    fn test_mul_matches_schoolbook() {
        // (3 + 4u)(5 + 6u) = 15 - 24 + (18 + 20)u = -9 + 38u
        let c = Fq2::mul(fq2(3, 4), fq2(5, 6));
        assert_eq!(c, Fq2::new(Fq::neg(Fq::from_u64(9)), Fq::from_u64(38)));
    }

    #[test]
    fn test_square_matches_mul() {
        let a = fq2(123456, 987654321);
        assert_eq!(Fq2::square(a), Fq2::mul(a, a));
    }

    #[test]
    fn test_inv() {
        let a = fq2(17, 42);
        assert_eq!(Fq2::mul(a, Fq2::inv(a).unwrap()), Fq2::ONE);
        assert!(Fq2::inv(Fq2::ZERO).is_none());
    }

    #[test]
    fn test_mul_by_nonresidue() {
        let a = fq2(11, 13);
        assert_eq!(a.mul_by_nonresidue(), Fq2::mul(a, fq2(9, 1)));
    }

    #[test]
    fn test_frobenius_is_conjugation() {
        let a = fq2(5, 8);
        assert_eq!(a.frobenius_map(1), a.conjugate());
        assert_eq!(a.frobenius_map(2), a);
        assert_eq!(Fq2::mul(a, a.conjugate()).c1, Fq::ZERO);
    }
}
