//! Cubic extension `Fq6 = Fq2[v] / (v^3 - xi)`, `xi = 9 + u`

use super::{FieldElement, Fq, Fq2};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fq6 {
    pub c0: Fq2,
    pub c1: Fq2,
    pub c2: Fq2,
}

/// xi^((q^k - 1) / 3) for k = 0..6, Montgomery form
const FROBENIUS_COEFF_FQ6_C1: [Fq2; 6] = [
    Fq2::new(
        Fq::from_raw([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec]),
        Fq::from_raw([0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3]),
    ),
    Fq2::new(
        Fq::from_raw([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0xc9af22f716ad6bad, 0xb311782a4aa662b2, 0x19eeaf64e248c7f4, 0x20273e77e3439f82]),
        Fq::from_raw([0xacc02860f7ce93ac, 0x3933d5817ba76b4c, 0x69e6188b446c8467, 0x0a46036d4417cc55]),
    ),
    Fq2::new(
        Fq::from_raw([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0xf91aba2654e8e3b1, 0x4771cb2fdc92ce12, 0xdcb16ae0fc8bdf35, 0x274aa195cd9d8be4]),
        Fq::from_raw([0x5cfc50ae18811f8b, 0x4bb28433cb43988c, 0x4fd35f13c3b56219, 0x301949bd2fc8883a]),
    ),
];

/// xi^((2 q^k - 2) / 3) for k = 0..6, Montgomery form
const FROBENIUS_COEFF_FQ6_C2: [Fq2; 6] = [
    Fq2::new(
        Fq::from_raw([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0x7361d77f843abe92, 0xa5bb2bd3273411fb, 0x9c941f314b3e2399, 0x15df9cddbb9fd3ec]),
        Fq::from_raw([0x5dddfd154bd8c949, 0x62cb29a5a4445b60, 0x37bc870a0c7dd2b9, 0x24830a9d3171f0fd]),
    ),
    Fq2::new(
        Fq::from_raw([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0x448a93a57b6762df, 0xbfd62df528fdeadf, 0xd858f5d00e9bd47a, 0x06b03d4d3476ec58]),
        Fq::from_raw([0x2b19daf4bcc936d1, 0xa1a54e7a56f4299f, 0xb533eee05adeaef1, 0x170c812b84dda0b2]),
    ),
    Fq2::new(
        Fq::from_raw([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0x843420f1d8dadbd6, 0x31f010c9183fcdb2, 0x436330b527a76049, 0x13d47447f11adfe4]),
        Fq::from_raw([0xef494023a857fa74, 0x2a925d02d5ab101a, 0x83b015829ba62f10, 0x2539111d0c13aea3]),
    ),
];

/// xi^((q - 1) / 3): x-coordinate factor of the twisted Frobenius on G2
pub(crate) const XI_TO_Q_MINUS_1_OVER_3: Fq2 = FROBENIUS_COEFF_FQ6_C1[1];

/// xi^((q^2 - 1) / 3): x-coordinate factor of the squared twisted Frobenius
pub(crate) const XI_TO_Q2_MINUS_1_OVER_3: Fq2 = FROBENIUS_COEFF_FQ6_C1[2];

impl Fq6 {
    #[inline(always)]
    pub const fn new(c0: Fq2, c1: Fq2, c2: Fq2) -> Self {
        Fq6 { c0, c1, c2 }
    }

    /// Multiply by `v`: (c0, c1, c2) -> (xi c2, c0, c1)
    #[inline]
    pub fn mul_by_nonresidue(self) -> Fq6 {
        Fq6::new(self.c2.mul_by_nonresidue(), self.c0, self.c1)
    }

    /// `self^(q^power)`
    pub fn frobenius_map(self, power: usize) -> Fq6 {
        Fq6::new(
            self.c0.frobenius_map(power),
            Fq2::mul(self.c1.frobenius_map(power), FROBENIUS_COEFF_FQ6_C1[power % 6]),
            Fq2::mul(self.c2.frobenius_map(power), FROBENIUS_COEFF_FQ6_C2[power % 6]),
        )
    }
}

impl FieldElement for Fq6 {
    const ZERO: Fq6 = Fq6::new(Fq2::ZERO, Fq2::ZERO, Fq2::ZERO);
    const ONE: Fq6 = Fq6::new(Fq2::ONE, Fq2::ZERO, Fq2::ZERO);

    #[inline]
    fn add(a: Fq6, b: Fq6) -> Fq6 {
        Fq6::new(Fq2::add(a.c0, b.c0), Fq2::add(a.c1, b.c1), Fq2::add(a.c2, b.c2))
    }

    #[inline]
    fn sub(a: Fq6, b: Fq6) -> Fq6 {
        Fq6::new(Fq2::sub(a.c0, b.c0), Fq2::sub(a.c1, b.c1), Fq2::sub(a.c2, b.c2))
    }

    /// Karatsuba over Fq2 (six Fq2 multiplications).
    fn mul(a: Fq6, b: Fq6) -> Fq6 {
        let t0 = Fq2::mul(a.c0, b.c0);
        let t1 = Fq2::mul(a.c1, b.c1);
        let t2 = Fq2::mul(a.c2, b.c2);

        // c0 = t0 + xi * ((a1 + a2)(b1 + b2) - t1 - t2)
        let s12 = Fq2::mul(Fq2::add(a.c1, a.c2), Fq2::add(b.c1, b.c2));
        let c0 = Fq2::add(t0, Fq2::sub(Fq2::sub(s12, t1), t2).mul_by_nonresidue());

        // c1 = (a0 + a1)(b0 + b1) - t0 - t1 + xi * t2
        let s01 = Fq2::mul(Fq2::add(a.c0, a.c1), Fq2::add(b.c0, b.c1));
        let c1 = Fq2::add(Fq2::sub(Fq2::sub(s01, t0), t1), t2.mul_by_nonresidue());

        // c2 = (a0 + a2)(b0 + b2) - t0 - t2 + t1
        let s02 = Fq2::mul(Fq2::add(a.c0, a.c2), Fq2::add(b.c0, b.c2));
        let c2 = Fq2::add(Fq2::sub(Fq2::sub(s02, t0), t2), t1);

        Fq6::new(c0, c1, c2)
    }

    #[inline]
    fn neg(a: Fq6) -> Fq6 {
        Fq6::new(Fq2::neg(a.c0), Fq2::neg(a.c1), Fq2::neg(a.c2))
    }

    fn inv(a: Fq6) -> Option<Fq6> {
        let t0 = Fq2::sub(Fq2::square(a.c0), Fq2::mul(a.c1, a.c2).mul_by_nonresidue());
        let t1 = Fq2::sub(Fq2::square(a.c2).mul_by_nonresidue(), Fq2::mul(a.c0, a.c1));
        let t2 = Fq2::sub(Fq2::square(a.c1), Fq2::mul(a.c0, a.c2));

        let norm = Fq2::add(
            Fq2::mul(a.c0, t0),
            Fq2::add(Fq2::mul(a.c2, t1), Fq2::mul(a.c1, t2)).mul_by_nonresidue(),
        );
        let norm_inv = Fq2::inv(norm)?;

        Some(Fq6::new(
            Fq2::mul(t0, norm_inv),
            Fq2::mul(t1, norm_inv),
            Fq2::mul(t2, norm_inv),
        ))
    }
}

impl core::fmt::Debug for Fq6 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fq6({:?}, {:?}, {:?})", self.c0, self.c1, self.c2)
    }
}
