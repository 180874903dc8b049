//! Precompile operations over raw bytes
//!
//! Every operation checks the `compressed` flag and the input layout first,
//! then decodes and validates all points, and only then runs arithmetic.
//! Outputs use the fixed affine encodings of [`crate::codec`].

use core::str::FromStr;

use tracing::{debug, instrument};

use crate::codec::{self, G1_LEN, G2_LEN, PAIR_LEN};
use crate::curve::{G1, G2};
use crate::error::{Bn128Error, Result};
use crate::pairing::PairingCheck;
use crate::scalar::Scalar;

pub const DEFAULT_MAX_ADD_POINTS: usize = 1024;
pub const DEFAULT_MAX_PAIRS: usize = 256;

/// Upper bounds on the number of records accepted by one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpLimits {
    pub max_add_points: usize,
    pub max_pairs: usize,
}

impl Default for OpLimits {
    fn default() -> Self {
        OpLimits { max_add_points: DEFAULT_MAX_ADD_POINTS, max_pairs: DEFAULT_MAX_PAIRS }
    }
}

/// Curve names understood by the host dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// `"bn128-g1"`
    G1,
    /// `"bn128-g2"`
    G2,
    /// `"bn128"`, pairing only
    Pairing,
}

impl Curve {
    pub fn name(self) -> &'static str {
        match self {
            Curve::G1 => "bn128-g1",
            Curve::G2 => "bn128-g2",
            Curve::Pairing => "bn128",
        }
    }
}

impl FromStr for Curve {
    type Err = Bn128Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bn128-g1" => Ok(Curve::G1),
            "bn128-g2" => Ok(Curve::G2),
            "bn128" => Ok(Curve::Pairing),
            _ => Err(Bn128Error::UnknownCurve { op: "parse", name: s.to_string() }),
        }
    }
}

impl core::fmt::Display for Curve {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

fn reject_compressed(op: &'static str, compressed: bool) -> Result<()> {
    if compressed {
        return Err(Bn128Error::CompressedUnsupported { op });
    }
    Ok(())
}

fn curve_for(op: &'static str, name: &str, allowed: &[Curve]) -> Result<Curve> {
    match Curve::from_str(name) {
        Ok(curve) if allowed.contains(&curve) => Ok(curve),
        _ => {
            debug!(op, name, "curve not supported");
            Err(Bn128Error::UnknownCurve { op, name: name.to_string() })
        }
    }
}

/// Operation set bound to a pair of batch limits.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurveOps {
    limits: OpLimits,
}

impl CurveOps {
    pub fn new(limits: OpLimits) -> Self {
        CurveOps { limits }
    }

    pub fn limits(&self) -> OpLimits {
        self.limits
    }

    /// Sum of `N >= 1` concatenated 64-byte G1 points.
    #[instrument(
        name = "g1_add",
        skip_all,
        level = "debug",
        fields(len = data.len()),
        err(level = "debug")
    )]
    pub fn g1_add(&self, data: &[u8], compressed: bool) -> Result<[u8; G1_LEN]> {
        const OP: &str = "g1_add";
        reject_compressed(OP, compressed)?;
        let records = codec::split_records::<G1_LEN>(data, OP, self.limits.max_add_points)?;
        let points = records.iter().map(codec::decode_g1).collect::<Result<Vec<_>>>()?;
        debug!(points = points.len(), "decoded");

        let mut acc = G1::identity();
        for p in points {
            acc += G1::from(p);
        }
        Ok(codec::encode_g1(&acc.to_affine()))
    }

    /// Sum of `N >= 1` concatenated 128-byte G2 points.
    #[instrument(
        name = "g2_add",
        skip_all,
        level = "debug",
        fields(len = data.len()),
        err(level = "debug")
    )]
    pub fn g2_add(&self, data: &[u8], compressed: bool) -> Result<[u8; G2_LEN]> {
        const OP: &str = "g2_add";
        reject_compressed(OP, compressed)?;
        let records = codec::split_records::<G2_LEN>(data, OP, self.limits.max_add_points)?;
        let points = records.iter().map(codec::decode_g2).collect::<Result<Vec<_>>>()?;
        debug!(points = points.len(), "decoded");

        let mut acc = G2::identity();
        for p in points {
            acc += G2::from(p);
        }
        Ok(codec::encode_g2(&acc.to_affine()))
    }

    /// `scalar * P` for a single 64-byte G1 point.
    #[instrument(
        name = "g1_scalar_mul",
        skip_all,
        level = "debug",
        fields(len = data.len()),
        err(level = "debug")
    )]
    pub fn g1_scalar_mul(&self, scalar: &[u8], data: &[u8], compressed: bool) -> Result<[u8; G1_LEN]> {
        const OP: &str = "g1_scalar_mul";
        reject_compressed(OP, compressed)?;
        let record = codec::single_record::<G1_LEN>(data, OP)?;
        let k = Scalar::from_be_bytes(scalar)?;
        let p = codec::decode_g1(&record)?;
        Ok(codec::encode_g1(&G1::from(p).mul(&k).to_affine()))
    }

    /// `scalar * Q` for a single 128-byte G2 point.
    #[instrument(
        name = "g2_scalar_mul",
        skip_all,
        level = "debug",
        fields(len = data.len()),
        err(level = "debug")
    )]
    pub fn g2_scalar_mul(&self, scalar: &[u8], data: &[u8], compressed: bool) -> Result<[u8; G2_LEN]> {
        const OP: &str = "g2_scalar_mul";
        reject_compressed(OP, compressed)?;
        let record = codec::single_record::<G2_LEN>(data, OP)?;
        let k = Scalar::from_be_bytes(scalar)?;
        let q = codec::decode_g2(&record)?;
        Ok(codec::encode_g2(&G2::from(q).mul(&k).to_affine()))
    }

    /// `true` iff the product of the pairings of all `G1 || G2` records is one.
    #[instrument(
        name = "pairing_check",
        skip_all,
        level = "debug",
        fields(len = data.len()),
        err(level = "debug")
    )]
    pub fn pairing_check(&self, data: &[u8], compressed: bool) -> Result<bool> {
        const OP: &str = "pairing_check";
        reject_compressed(OP, compressed)?;
        let records = codec::split_records::<PAIR_LEN>(data, OP, self.limits.max_pairs)?;

        let mut check = PairingCheck::with_capacity(records.len());
        for record in &records {
            let (g1, g2) = codec::split_pair(record);
            check = check.with_pair(codec::decode_g1(&g1)?, codec::decode_g2(&g2)?);
        }
        debug!(pairs = check.len(), "decoded");

        let ok = check.evaluate()?;
        debug!(ok, "evaluated");
        Ok(ok)
    }

    /// Batched addition dispatched by curve name (`bn128-g1` or `bn128-g2`).
    pub fn ec_add(&self, curve: &str, data: &[u8], compressed: bool) -> Result<Vec<u8>> {
        const OP: &str = "ec_add";
        match curve_for(OP, curve, &[Curve::G1, Curve::G2])? {
            Curve::G1 => self.g1_add(data, compressed).map(|out| out.to_vec()),
            Curve::G2 => self.g2_add(data, compressed).map(|out| out.to_vec()),
            Curve::Pairing => Err(Bn128Error::UnknownCurve { op: OP, name: curve.to_string() }),
        }
    }

    /// Scalar multiplication dispatched by curve name.
    pub fn ec_scalar_mul(
        &self,
        curve: &str,
        scalar: &[u8],
        data: &[u8],
        compressed: bool,
    ) -> Result<Vec<u8>> {
        const OP: &str = "ec_scalar_mul";
        match curve_for(OP, curve, &[Curve::G1, Curve::G2])? {
            Curve::G1 => self.g1_scalar_mul(scalar, data, compressed).map(|out| out.to_vec()),
            Curve::G2 => self.g2_scalar_mul(scalar, data, compressed).map(|out| out.to_vec()),
            Curve::Pairing => Err(Bn128Error::UnknownCurve { op: OP, name: curve.to_string() }),
        }
    }

    /// Pairing check dispatched by curve name (`bn128` only).
    pub fn ec_pairing_check(&self, curve: &str, data: &[u8], compressed: bool) -> Result<bool> {
        const OP: &str = "ec_pairing_check";
        match curve_for(OP, curve, &[Curve::Pairing])? {
            Curve::Pairing => self.pairing_check(data, compressed),
            Curve::G1 | Curve::G2 => Err(Bn128Error::UnknownCurve { op: OP, name: curve.to_string() }),
        }
    }
}

pub fn g1_add(data: &[u8], compressed: bool) -> Result<[u8; G1_LEN]> {
    CurveOps::default().g1_add(data, compressed)
}

pub fn g2_add(data: &[u8], compressed: bool) -> Result<[u8; G2_LEN]> {
    CurveOps::default().g2_add(data, compressed)
}

pub fn g1_scalar_mul(scalar: &[u8], data: &[u8], compressed: bool) -> Result<[u8; G1_LEN]> {
    CurveOps::default().g1_scalar_mul(scalar, data, compressed)
}

pub fn g2_scalar_mul(scalar: &[u8], data: &[u8], compressed: bool) -> Result<[u8; G2_LEN]> {
    CurveOps::default().g2_scalar_mul(scalar, data, compressed)
}

pub fn pairing_check(data: &[u8], compressed: bool) -> Result<bool> {
    CurveOps::default().pairing_check(data, compressed)
}

pub fn ec_add(curve: &str, data: &[u8], compressed: bool) -> Result<Vec<u8>> {
    CurveOps::default().ec_add(curve, data, compressed)
}

pub fn ec_scalar_mul(curve: &str, scalar: &[u8], data: &[u8], compressed: bool) -> Result<Vec<u8>> {
    CurveOps::default().ec_scalar_mul(curve, scalar, data, compressed)
}

pub fn ec_pairing_check(curve: &str, data: &[u8], compressed: bool) -> Result<bool> {
    CurveOps::default().ec_pairing_check(curve, data, compressed)
}
