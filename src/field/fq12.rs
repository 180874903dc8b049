//! Quadratic extension `Fq12 = Fq6[w] / (w^2 - v)`
//!
//! The pairing target group is the order-R subgroup of `Fq12^*`.

use ruint::Uint;

use super::{FieldElement, Fq, Fq2, Fq6};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fq12 {
    pub c0: Fq6,
    pub c1: Fq6,
}

/// xi^((q^k - 1) / 6) for k = 0..12, Montgomery form
const FROBENIUS_COEFF_FQ12_C1: [Fq2; 12] = [
    Fq2::new(
        Fq::from_raw([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0xaf9ba69633144907, 0xca6b1d7387afb78a, 0x11bded5ef08a2087, 0x02f34d751a1f3a7c]),
        Fq::from_raw([0xa222ae234c492d72, 0xd00f02a4565de15b, 0xdc2ff3a253dfc926, 0x10a75716b3899551]),
    ),
    Fq2::new(
        Fq::from_raw([0xca8d800500fa1bf2, 0xf0c5d61468b39769, 0x0e201271ad0d4418, 0x04290f65bad856e6]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0x365316184e46d97d, 0x0af7129ed4c96d9f, 0x659da72fca1009b5, 0x08116d8983a20d23]),
        Fq::from_raw([0xb1df4af7c39c1939, 0x3d9f02878a73bf7f, 0x9b2220928caf0ae0, 0x26684515eff054a6]),
    ),
    Fq2::new(
        Fq::from_raw([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0x86b76f821b329076, 0x408bf52b4d19b614, 0x53dfb9d0d985e92d, 0x051e20146982d2a7]),
        Fq::from_raw([0x0fbc9cd47752ebc7, 0x6d8fffe33415de24, 0xbef22cf038cf41b9, 0x15c0edff3c66bf54]),
    ),
    Fq2::new(
        Fq::from_raw([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0x8c84e580a568b440, 0xcd164d1de0c21302, 0xa692585790f737d5, 0x2d7100fdc71265ad]),
        Fq::from_raw([0x99fdddf38c33cfd5, 0xc77267ed1213e931, 0xdc2052142da18f36, 0x1fbcf75c2da80ad7]),
    ),
    Fq2::new(
        Fq::from_raw([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0x05cd75fe8a3623ca, 0x8c8a57f293a85cee, 0x52b29e86b7714ea8, 0x2852e0e95d8f9306]),
        Fq::from_raw([0x8a41411f14e0e40e, 0x59e26809ddfe0b0d, 0x1d2e2523f4d24d7d, 0x09fc095cf1414b83]),
    ),
    Fq2::new(
        Fq::from_raw([0x08cfc388c494f1ab, 0x19b315148d1373d4, 0x584e90fdcb6c0213, 0x09e1685bdf2f8849]),
        Fq::from_raw([0, 0, 0, 0]),
    ),
    Fq2::new(
        Fq::from_raw([0xb5691c94bd4a6cd1, 0x56f575661b581478, 0x64708be5a7fb6f30, 0x2b462e5e77aecd82]),
        Fq::from_raw([0x2c63ef42612a1180, 0x29f16aae345bec69, 0xf95e18c648b216a4, 0x1aa36073a4cae0d4]),
    ),
];

impl Fq12 {
    #[inline(always)]
    pub const fn new(c0: Fq6, c1: Fq6) -> Self {
        Fq12 { c0, c1 }
    }

    /// `c0 - c1 w`, equal to `self^(q^6)`. For elements of norm one
    /// (everything after the easy part of the final exponentiation)
    /// this is also the inverse.
    #[inline]
    pub fn conjugate(self) -> Fq12 {
        Fq12::new(self.c0, Fq6::neg(self.c1))
    }

    /// `self^(q^power)`
    pub fn frobenius_map(self, power: usize) -> Fq12 {
        let c0 = self.c0.frobenius_map(power);
        let c1 = self.c1.frobenius_map(power);
        let k = FROBENIUS_COEFF_FQ12_C1[power % 12];
        Fq12::new(
            c0,
            Fq6::new(Fq2::mul(c1.c0, k), Fq2::mul(c1.c1, k), Fq2::mul(c1.c2, k)),
        )
    }

    /// Left-to-right square-and-multiply over an arbitrary-width exponent.
    pub fn pow<const BITS: usize, const LIMBS: usize>(self, exp: &Uint<BITS, LIMBS>) -> Fq12 {
        let mut result = Fq12::ONE;
        for i in (0..exp.bit_len()).rev() {
            result = Fq12::square(result);
            if exp.bit(i) {
                result = Fq12::mul(result, self);
            }
        }
        result
    }
}

impl FieldElement for Fq12 {
    const ZERO: Fq12 = Fq12::new(Fq6::ZERO, Fq6::ZERO);
    const ONE: Fq12 = Fq12::new(Fq6::ONE, Fq6::ZERO);

    #[inline]
    fn add(a: Fq12, b: Fq12) -> Fq12 {
        Fq12::new(Fq6::add(a.c0, b.c0), Fq6::add(a.c1, b.c1))
    }

    #[inline]
    fn sub(a: Fq12, b: Fq12) -> Fq12 {
        Fq12::new(Fq6::sub(a.c0, b.c0), Fq6::sub(a.c1, b.c1))
    }

    /// Karatsuba over Fq6 (three Fq6 multiplications).
    fn mul(a: Fq12, b: Fq12) -> Fq12 {
        let t0 = Fq6::mul(a.c0, b.c0);
        let t1 = Fq6::mul(a.c1, b.c1);
        let cross = Fq6::mul(Fq6::add(a.c0, a.c1), Fq6::add(b.c0, b.c1));
        Fq12::new(
            Fq6::add(t0, t1.mul_by_nonresidue()),
            Fq6::sub(Fq6::sub(cross, t0), t1),
        )
    }

    #[inline]
    fn neg(a: Fq12) -> Fq12 {
        Fq12::new(Fq6::neg(a.c0), Fq6::neg(a.c1))
    }

    /// Complex squaring: two Fq6 multiplications.
    fn square(a: Fq12) -> Fq12 {
        let ab = Fq6::mul(a.c0, a.c1);
        let t = Fq6::mul(Fq6::add(a.c0, a.c1), Fq6::add(a.c0, a.c1.mul_by_nonresidue()));
        Fq12::new(
            Fq6::sub(Fq6::sub(t, ab), ab.mul_by_nonresidue()),
            Fq6::double(ab),
        )
    }

    /// 1 / (c0 + c1 w) = (c0 - c1 w) / (c0^2 - v c1^2)
    fn inv(a: Fq12) -> Option<Fq12> {
        let norm = Fq6::sub(Fq6::square(a.c0), Fq6::square(a.c1).mul_by_nonresidue());
        let t = Fq6::inv(norm)?;
        Some(Fq12::new(Fq6::mul(a.c0, t), Fq6::neg(Fq6::mul(a.c1, t))))
    }
}

impl core::fmt::Debug for Fq12 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fq12({:?}, {:?})", self.c0, self.c1)
    }
}
