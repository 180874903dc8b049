//! Montgomery-form BN128 base field arithmetic
//!
//! Provides `Fq` using Montgomery representation for efficient
//! modular multiplication without division.
//!
//! Montgomery form: a value `v` is stored as `v * R mod q` where R = 2^256.
//! Multiplication becomes `mont_mul(a_mont, b_mont) = a*b*R mod q` (one mul + shift).

use alloy_primitives::U256;

use super::FieldElement;

/// BN128 base field modulus (little-endian limbs)
/// q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
const MODULUS_LIMBS: [u64; 4] = [
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// Base field modulus as U256 (used at the byte boundary)
pub const MODULUS: U256 = U256::from_limbs(MODULUS_LIMBS);

/// q - 2, the Fermat inversion exponent
const MODULUS_MINUS_TWO: U256 = U256::from_limbs([
    0x3c208c16d87cfd45,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// -q^{-1} mod 2^64  (for Montgomery reduction)
const INV: u64 = 0x87d20782e4866389;

/// R^2 mod q  (for converting standard -> Montgomery form)
const R2: [u64; 4] = [
    0xf32cfc5b538afa89,
    0xb5e71911d44501fb,
    0x47ab1eff0a417ff6,
    0x06d89f71cab8351f,
];

/// Montgomery-form element of the BN128 base field.
/// Internally stores `a * R mod q` where R = 2^256.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Fq(pub(crate) [u64; 4]);

impl Fq {
    /// Create Fq from pre-computed Montgomery-form limbs (no conversion).
    #[inline(always)]
    pub const fn from_raw(limbs: [u64; 4]) -> Self {
        Fq(limbs)
    }

    /// Convert a standard U256 value into Montgomery form.
    ///
    /// Values at or above the modulus are reduced; use [`Fq::from_canonical`]
    /// where such values must be rejected instead.
    #[inline]
    pub fn from_u256(val: U256) -> Fq {
        let limbs = val.as_limbs();
        let v = [limbs[0], limbs[1], limbs[2], limbs[3]];
        mont_mul(&v, &R2)
    }

    /// Convert a value that must already be below the modulus.
    #[inline]
    pub fn from_canonical(val: U256) -> Option<Fq> {
        if val >= MODULUS {
            return None;
        }
        Some(Fq::from_u256(val))
    }

    /// Parse a 32-byte big-endian encoding, rejecting values >= q.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Option<Fq> {
        Fq::from_canonical(U256::from_be_bytes(bytes))
    }

    /// Convert from Montgomery form back to a standard U256.
    #[inline]
    pub fn to_u256(self) -> U256 {
        let one = [1u64, 0, 0, 0];
        let r = mont_mul(&self.0, &one);
        U256::from_limbs(r.0)
    }

    /// 32-byte big-endian encoding of the canonical value.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.to_u256().to_be_bytes::<32>()
    }

    /// Small constant, used for curve coefficients and tests.
    #[inline]
    pub fn from_u64(val: u64) -> Fq {
        Fq::from_u256(U256::from(val))
    }

    /// Modular exponentiation: base^exp mod q  (left-to-right square-and-multiply)
    #[inline]
    pub fn pow(base: Fq, exp: U256) -> Fq {
        let mut result = Fq::ONE;
        for i in (0..exp.bit_len()).rev() {
            result = Fq::square(result);
            if exp.bit(i) {
                result = Fq::mul(result, base);
            }
        }
        result
    }
}

impl FieldElement for Fq {
    /// 0 in Montgomery form = 0
    const ZERO: Fq = Fq([0, 0, 0, 0]);

    /// 1 in Montgomery form = R mod q
    const ONE: Fq = Fq([
        0xd35d438dc58f0d9d,
        0x0a78eb28f5c70b3d,
        0x666ea36f7879462c,
        0x0e0a77c19a07df2f,
    ]);

    /// Modular addition: (a + b) mod q
    #[inline(always)]
    fn add(a: Fq, b: Fq) -> Fq {
        let (d0, carry) = adc(a.0[0], b.0[0], 0);
        let (d1, carry) = adc(a.0[1], b.0[1], carry);
        let (d2, carry) = adc(a.0[2], b.0[2], carry);
        let (d3, _) = adc(a.0[3], b.0[3], carry);

        // Conditionally subtract MODULUS
        let (sub0, borrow) = sbb(d0, MODULUS_LIMBS[0], 0);
        let (sub1, borrow) = sbb(d1, MODULUS_LIMBS[1], borrow);
        let (sub2, borrow) = sbb(d2, MODULUS_LIMBS[2], borrow);
        let (sub3, borrow) = sbb(d3, MODULUS_LIMBS[3], borrow);

        // borrow=0: sum >= q, use subtracted; borrow=1: sum < q, use original
        let mask = 0u64.wrapping_sub(borrow);
        Fq([
            (d0 & mask) | (sub0 & !mask),
            (d1 & mask) | (sub1 & !mask),
            (d2 & mask) | (sub2 & !mask),
            (d3 & mask) | (sub3 & !mask),
        ])
    }

    /// Modular subtraction: (a - b) mod q
    #[inline(always)]
    fn sub(a: Fq, b: Fq) -> Fq {
        let (d0, borrow) = sbb(a.0[0], b.0[0], 0);
        let (d1, borrow) = sbb(a.0[1], b.0[1], borrow);
        let (d2, borrow) = sbb(a.0[2], b.0[2], borrow);
        let (d3, borrow) = sbb(a.0[3], b.0[3], borrow);

        // If borrow, add MODULUS back
        let mask = 0u64.wrapping_sub(borrow);
        let (d0, carry) = adc(d0, MODULUS_LIMBS[0] & mask, 0);
        let (d1, carry) = adc(d1, MODULUS_LIMBS[1] & mask, carry);
        let (d2, carry) = adc(d2, MODULUS_LIMBS[2] & mask, carry);
        let (d3, _) = adc(d3, MODULUS_LIMBS[3] & mask, carry);

        Fq([d0, d1, d2, d3])
    }

    /// Modular multiplication: (a * b) mod q  via Montgomery
    #[inline(always)]
    fn mul(a: Fq, b: Fq) -> Fq {
        mont_mul(&a.0, &b.0)
    }

    /// Modular negation: -a mod q
    #[inline(always)]
    fn neg(a: Fq) -> Fq {
        if a.is_zero() {
            return Fq::ZERO;
        }
        let (d0, borrow) = sbb(MODULUS_LIMBS[0], a.0[0], 0);
        let (d1, borrow) = sbb(MODULUS_LIMBS[1], a.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS_LIMBS[2], a.0[2], borrow);
        let (d3, _) = sbb(MODULUS_LIMBS[3], a.0[3], borrow);
        Fq([d0, d1, d2, d3])
    }

    /// Modular inverse: a^(q-2) mod q  (Fermat's little theorem)
    #[inline]
    fn inv(a: Fq) -> Option<Fq> {
        if a.is_zero() {
            return None;
        }
        Some(Fq::pow(a, MODULUS_MINUS_TWO))
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        self.0[0] | self.0[1] | self.0[2] | self.0[3] == 0
    }
}

impl core::fmt::Debug for Fq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fq({:#x})", self.to_u256())
    }
}

// ============================================================
// Limb arithmetic helpers
// ============================================================

/// Multiply-accumulate: (a + b*c + d) returning (lo, hi)
#[inline(always)]
fn mac(a: u64, b: u64, c: u64, d: u64) -> (u64, u64) {
    let res = (a as u128) + (b as u128) * (c as u128) + (d as u128);
    (res as u64, (res >> 64) as u64)
}

/// Add with carry: (a + b + carry) returning (sum, carry_out)
#[inline(always)]
fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let res = (a as u128) + (b as u128) + (carry as u128);
    (res as u64, (res >> 64) as u64)
}

/// Subtract with borrow: (a - b - borrow) returning (diff, borrow_out)
#[inline(always)]
fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let res = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (res as u64, (res >> 127) as u64)
}

// ============================================================
// Montgomery multiplication (SOS method)
// ============================================================

/// Montgomery multiplication: compute a*b*R^{-1} mod q
///
/// Uses Separated Operand Scanning: full 512-bit product then reduction.
#[inline]
fn mont_mul(a: &[u64; 4], b: &[u64; 4]) -> Fq {
    // Step 1: 512-bit product  t = a * b
    let (t0, carry) = mac(0, a[0], b[0], 0);
    let (t1, carry) = mac(0, a[1], b[0], carry);
    let (t2, carry) = mac(0, a[2], b[0], carry);
    let (t3, t4) = mac(0, a[3], b[0], carry);

    let (t1, carry) = mac(t1, a[0], b[1], 0);
    let (t2, carry) = mac(t2, a[1], b[1], carry);
    let (t3, carry) = mac(t3, a[2], b[1], carry);
    let (t4, t5) = mac(t4, a[3], b[1], carry);

    let (t2, carry) = mac(t2, a[0], b[2], 0);
    let (t3, carry) = mac(t3, a[1], b[2], carry);
    let (t4, carry) = mac(t4, a[2], b[2], carry);
    let (t5, t6) = mac(t5, a[3], b[2], carry);

    let (t3, carry) = mac(t3, a[0], b[3], 0);
    let (t4, carry) = mac(t4, a[1], b[3], carry);
    let (t5, carry) = mac(t5, a[2], b[3], carry);
    let (t6, t7) = mac(t6, a[3], b[3], carry);

    // Step 2: Montgomery reduction
    montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
}

/// Montgomery reduction of a 512-bit value [t0..t7].
/// Returns (t * R^{-1}) mod q.
#[allow(clippy::too_many_arguments)]
#[inline]
fn montgomery_reduce(
    t0: u64, t1: u64, t2: u64, t3: u64,
    t4: u64, t5: u64, t6: u64, t7: u64,
) -> Fq {
    // Round 0
    let k = t0.wrapping_mul(INV);
    let (_, carry) = mac(t0, k, MODULUS_LIMBS[0], 0);
    let (r1, carry) = mac(t1, k, MODULUS_LIMBS[1], carry);
    let (r2, carry) = mac(t2, k, MODULUS_LIMBS[2], carry);
    let (r3, carry) = mac(t3, k, MODULUS_LIMBS[3], carry);
    let (r4, carry2) = adc(t4, carry, 0);

    // Round 1
    let k = r1.wrapping_mul(INV);
    let (_, carry) = mac(r1, k, MODULUS_LIMBS[0], 0);
    let (r2, carry) = mac(r2, k, MODULUS_LIMBS[1], carry);
    let (r3, carry) = mac(r3, k, MODULUS_LIMBS[2], carry);
    let (r4, carry) = mac(r4, k, MODULUS_LIMBS[3], carry);
    let (r5, carry2) = adc(t5, carry2, carry);

    // Round 2
    let k = r2.wrapping_mul(INV);
    let (_, carry) = mac(r2, k, MODULUS_LIMBS[0], 0);
    let (r3, carry) = mac(r3, k, MODULUS_LIMBS[1], carry);
    let (r4, carry) = mac(r4, k, MODULUS_LIMBS[2], carry);
    let (r5, carry) = mac(r5, k, MODULUS_LIMBS[3], carry);
    let (r6, carry2) = adc(t6, carry2, carry);

    // Round 3
    let k = r3.wrapping_mul(INV);
    let (_, carry) = mac(r3, k, MODULUS_LIMBS[0], 0);
    let (r4, carry) = mac(r4, k, MODULUS_LIMBS[1], carry);
    let (r5, carry) = mac(r5, k, MODULUS_LIMBS[2], carry);
    let (r6, carry) = mac(r6, k, MODULUS_LIMBS[3], carry);
    let (r7, _) = adc(t7, carry2, carry);

    // Final conditional subtraction
    let (d0, borrow) = sbb(r4, MODULUS_LIMBS[0], 0);
    let (d1, borrow) = sbb(r5, MODULUS_LIMBS[1], borrow);
    let (d2, borrow) = sbb(r6, MODULUS_LIMBS[2], borrow);
    let (d3, borrow) = sbb(r7, MODULUS_LIMBS[3], borrow);

    let mask = 0u64.wrapping_sub(borrow);
    Fq([
        (r4 & mask) | (d0 & !mask),
        (r5 & mask) | (d1 & !mask),
        (r6 & mask) | (d2 & !mask),
        (r7 & mask) | (d3 & !mask),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_u256() {
        let val = U256::from(42u64);
        let fq = Fq::from_u256(val);
        assert_eq!(fq.to_u256(), val);
    }

    #[test]
    fn test_roundtrip_large() {
        let val = MODULUS - U256::from(123456789u64);
        let fq = Fq::from_u256(val);
        assert_eq!(fq.to_u256(), val);
    }

    #[test]
    fn test_one() {
        let one = Fq::from_u256(U256::from(1u64));
        assert_eq!(one, Fq::ONE);
        assert_eq!(one.to_u256(), U256::from(1u64));
    }

    #[test]
    fn test_zero() {
        let zero = Fq::from_u256(U256::ZERO);
        assert_eq!(zero, Fq::ZERO);
        assert_eq!(zero.to_u256(), U256::ZERO);
    }

    #[test]
    fn test_from_u256_reduces_modulus() {
        assert_eq!(Fq::from_u256(MODULUS), Fq::ZERO);
        assert_eq!(Fq::from_u256(MODULUS + U256::from(5u64)), Fq::from_u64(5));
    }

    #[test]
    fn test_from_canonical_rejects_modulus() {
        assert!(Fq::from_canonical(MODULUS).is_none());
        assert!(Fq::from_canonical(U256::MAX).is_none());
        assert!(Fq::from_canonical(MODULUS - U256::from(1u64)).is_some());
    }

    #[test]
    fn test_be_bytes() {
        let mut bytes = [0u8; 32];
        bytes[31] = 2;
        bytes[0] = 0x01;
        let fq = Fq::from_be_bytes(bytes).unwrap();
        assert_eq!(fq.to_be_bytes(), bytes);

        let modulus_bytes = MODULUS.to_be_bytes::<32>();
        assert!(Fq::from_be_bytes(modulus_bytes).is_none());
    }

    #[test]
    fn test_add_with_reduction() {
        let p_minus_1 = MODULUS - U256::from(1u64);
        let a = Fq::from_u256(p_minus_1);
        let b = Fq::from_u64(2);
        let c = Fq::add(a, b);
        assert_eq!(c.to_u256(), U256::from(1u64));
    }

    #[test]
    fn test_sub_underflow() {
        let a = Fq::from_u64(100);
        let b = Fq::from_u64(200);
        let c = Fq::sub(a, b);
        let expected = MODULUS - U256::from(100u64);
        assert_eq!(c.to_u256(), expected);
    }

    #[test]
    fn test_mul_small() {
        let c = Fq::mul(Fq::from_u64(7), Fq::from_u64(8));
        assert_eq!(c.to_u256(), U256::from(56u64));
    }

    #[test]
    fn test_mul_large() {
        let p_minus_1 = MODULUS - U256::from(1u64);
        let a = Fq::from_u256(p_minus_1);
        let c = Fq::mul(a, Fq::from_u64(2));
        let expected = MODULUS - U256::from(2u64);
        assert_eq!(c.to_u256(), expected);
    }

    #[test]
    fn test_mul_identities() {
        let a = Fq::from_u64(42);
        assert_eq!(Fq::mul(a, Fq::ONE), a);
        assert_eq!(Fq::mul(a, Fq::ZERO), Fq::ZERO);
    }

    #[test]
    fn test_pow_fermat() {
        let a = Fq::from_u64(7);
        let result = Fq::pow(a, MODULUS - U256::from(1u64));
        assert_eq!(result, Fq::ONE);
    }

    #[test]
    fn test_pow_small_exponents() {
        let a = Fq::from_u64(3);
        assert_eq!(Fq::pow(a, U256::ZERO), Fq::ONE);
        assert_eq!(Fq::pow(a, U256::from(1u64)), a);
        assert_eq!(Fq::pow(a, U256::from(5u64)), Fq::from_u64(243));
        assert_eq!(Fq::pow(a, U256::from(40u64)), Fq::from_u256(U256::from(3u128.pow(40))));
        assert_eq!(Fq::pow(Fq::ZERO, U256::from(9u64)), Fq::ZERO);
    }

    #[test]
    fn test_inv() {
        for v in [1u64, 2, 7, 123456789] {
            let a = Fq::from_u64(v);
            let a_inv = Fq::inv(a).unwrap();
            assert_eq!(Fq::mul(a, a_inv), Fq::ONE);
        }
        let big = Fq::from_u256(MODULUS - U256::from(3u64));
        assert_eq!(Fq::mul(big, Fq::inv(big).unwrap()), Fq::ONE);
    }

    #[test]
    fn test_inv_zero_fails() {
        assert!(Fq::inv(Fq::ZERO).is_none());
    }

    #[test]
    fn test_neg() {
        let a = Fq::from_u64(5);
        assert_eq!(Fq::add(a, Fq::neg(a)), Fq::ZERO);
        assert_eq!(Fq::neg(Fq::ZERO), Fq::ZERO);
    }

    #[test]
    fn test_distributivity() {
        let a = Fq::from_u64(5);
        let b = Fq::from_u64(7);
        let c = Fq::from_u256(MODULUS - U256::from(11u64));
        // a * (b + c) = a*b + a*c
        let lhs = Fq::mul(a, Fq::add(b, c));
        let rhs = Fq::add(Fq::mul(a, b), Fq::mul(a, c));
        assert_eq!(lhs, rhs);
    }
}
