//! Optimal ate pairing on BN128
//!
//! `e(P, Q) = f_{6x+2, Q}(P) * l_{T, pi(Q)}(P) * l_{T', -pi^2(Q)}(P)`, raised to
//! `(q^12 - 1) / R`. A batch shares one Miller loop accumulator and a single
//! final exponentiation, which is all a product-equals-one check needs.

use ruint::Uint;

use crate::curve::g2::{frobenius, frobenius_squared};
use crate::curve::{G1Affine, G2Affine};
use crate::error::{Bn128Error, Result};
use crate::field::{FieldElement, Fq, Fq12, Fq2, Fq6};

/// 6x + 2 for the BN parameter x = 4965661367192848881
const ATE_LOOP_COUNT: u128 = 29793968203157093288;
const ATE_LOOP_BITS: u32 = u128::BITS - ATE_LOOP_COUNT.leading_zeros();

/// (q^4 - q^2 + 1) / R, the hard part of the final exponentiation
const HARD_PART: Uint<768, 12> = Uint::from_limbs([
    0xe81bb482ccdf42b1,
    0x5abf5cc4f49c36d4,
    0xf1154e7e1da014fd,
    0xdcc7b44c87cdbacf,
    0xaaa441e3954bcf8a,
    0x6b887d56d5095f23,
    0x79581e16f3fd90c6,
    0x3b1b1355d189227d,
    0x4e529a5861876f6b,
    0x6c0eb522d5b12278,
    0x331ec15183177faf,
    0x01baaa710b0759ad,
]);

/// Evaluate at `p` the line through `t` and `q` (the tangent when they are
/// equal) and return it together with `t + q`.
///
/// Lines live on the twist: with slope `lambda` the value is
/// `y_P - lambda x_P w + (lambda x_T - y_T) v w`.
fn line_step(t: &G2Affine, q: &G2Affine, p: &G1Affine) -> (Fq12, G2Affine) {
    if t.infinity {
        return (Fq12::ONE, *q);
    }
    if q.infinity {
        return (Fq12::ONE, *t);
    }

    let lambda = if t.x != q.x {
        Fq2::inv(Fq2::sub(q.x, t.x)).map(|d| Fq2::mul(Fq2::sub(q.y, t.y), d))
    } else if t.y == q.y {
        Fq2::inv(Fq2::double(t.y)).map(|d| {
            let x2 = Fq2::square(t.x);
            Fq2::mul(Fq2::add(Fq2::double(x2), x2), d)
        })
    } else {
        None
    };

    let lambda = match lambda {
        Some(l) => l,
        // vertical line x_P - x_T v, and t + q is the identity
        None => {
            let c0 = Fq6::new(Fq2::new(p.x, Fq::ZERO), Fq2::neg(t.x), Fq2::ZERO);
            return (Fq12::new(c0, Fq6::ZERO), G2Affine::identity());
        }
    };

    let c0 = Fq6::new(Fq2::new(p.y, Fq::ZERO), Fq2::ZERO, Fq2::ZERO);
    let c1 = Fq6::new(
        Fq2::neg(lambda.mul_by_fq(p.x)),
        Fq2::sub(Fq2::mul(lambda, t.x), t.y),
        Fq2::ZERO,
    );

    let x3 = Fq2::sub(Fq2::sub(Fq2::square(lambda), t.x), q.x);
    let y3 = Fq2::sub(Fq2::mul(lambda, Fq2::sub(t.x, x3)), t.y);

    (Fq12::new(c0, c1), G2Affine::new_unchecked(x3, y3))
}

/// Product of the Miller loop values of all pairs. Every pair must have both
/// points different from the identity.
fn multi_miller_loop(pairs: &[(G1Affine, G2Affine)]) -> Fq12 {
    let mut f = Fq12::ONE;
    let mut ts: Vec<G2Affine> = pairs.iter().map(|(_, q)| *q).collect();

    for i in (0..ATE_LOOP_BITS - 1).rev() {
        f = Fq12::square(f);
        let bit = (ATE_LOOP_COUNT >> i) & 1 == 1;
        for ((p, q), t) in pairs.iter().zip(ts.iter_mut()) {
            let current = *t;
            let (line, next) = line_step(&current, &current, p);
            f = Fq12::mul(f, line);
            *t = next;
            if bit {
                let (line, next) = line_step(t, q, p);
                f = Fq12::mul(f, line);
                *t = next;
            }
        }
    }

    for ((p, q), t) in pairs.iter().zip(ts.iter()) {
        let q1 = frobenius(q);
        let minus_q2 = -frobenius_squared(q);
        let (line, t) = line_step(t, &q1, p);
        f = Fq12::mul(f, line);
        let (line, _) = line_step(&t, &minus_q2, p);
        f = Fq12::mul(f, line);
    }

    f
}

/// `f^((q^12 - 1) / R)`; `None` only for `f = 0`.
fn final_exponentiation(f: Fq12) -> Option<Fq12> {
    // easy part: f^((q^6 - 1)(q^2 + 1))
    let f1 = Fq12::mul(f.conjugate(), Fq12::inv(f)?);
    let f2 = Fq12::mul(f1.frobenius_map(2), f1);
    Some(f2.pow(&HARD_PART))
}

/// Reduced pairing of a single pair.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Result<Fq12> {
    if p.is_identity() || q.is_identity() {
        return Ok(Fq12::ONE);
    }
    final_exponentiation(multi_miller_loop(&[(*p, *q)]))
        .ok_or(Bn128Error::Arithmetic("Miller loop produced zero"))
}

/// Collects validated pairs, then checks `prod e(P_i, Q_i) == 1` once.
#[derive(Clone, Debug, Default)]
pub struct PairingCheck {
    pairs: Vec<(G1Affine, G2Affine)>,
}

impl PairingCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PairingCheck { pairs: Vec::with_capacity(capacity) }
    }

    #[must_use]
    pub fn with_pair(mut self, p: G1Affine, q: G2Affine) -> Self {
        self.pairs.push((p, q));
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Run the Miller loop over every pair and compare the reduced product
    /// with one. Pairs containing an identity point contribute 1 and are
    /// skipped.
    pub fn evaluate(self) -> Result<bool> {
        if self.pairs.is_empty() {
            return Err(Bn128Error::EmptyPairingBatch);
        }
        let active: Vec<_> = self
            .pairs
            .into_iter()
            .filter(|(p, q)| !p.is_identity() && !q.is_identity())
            .collect();
        if active.is_empty() {
            return Ok(true);
        }
        let f = multi_miller_loop(&active);
        let reduced =
            final_exponentiation(f).ok_or(Bn128Error::Arithmetic("Miller loop produced zero"))?;
        Ok(reduced == Fq12::ONE)
    }
}
