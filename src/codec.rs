//! Byte layouts of the precompile interface
//!
//! Field elements are 32-byte big-endian. G1 points are `x || y` (64 bytes),
//! G2 points are `x_im || x_re || y_im || y_re` (128 bytes). The identity is
//! encoded as all zeros in both groups.

use crate::curve::{G1Affine, G2Affine};
use crate::error::{Bn128Error, Result};
use crate::field::{Fq, Fq2};

pub const FQ_LEN: usize = 32;
pub const G1_LEN: usize = 2 * FQ_LEN;
pub const G2_LEN: usize = 4 * FQ_LEN;
pub const PAIR_LEN: usize = G1_LEN + G2_LEN;

/// Split a flat batch into fixed-size records.
///
/// Fails when the batch is empty, is not a whole number of records, or holds
/// more than `max_records` records. Nothing is decoded here, so a bad layout
/// is reported before any point is looked at.
pub fn split_records<const N: usize>(
    data: &[u8],
    op: &'static str,
    max_records: usize,
) -> Result<Vec<[u8; N]>> {
    if data.is_empty() || data.len() % N != 0 {
        return Err(Bn128Error::InvalidBatchLayout { op, record: N, len: data.len() });
    }
    let count = data.len() / N;
    if count > max_records {
        return Err(Bn128Error::BatchTooLarge { op, count, max: max_records });
    }
    let mut records = Vec::with_capacity(count);
    for chunk in data.chunks_exact(N) {
        let mut record = [0u8; N];
        record.copy_from_slice(chunk);
        records.push(record);
    }
    Ok(records)
}

/// Exactly one record of `N` bytes.
pub fn single_record<const N: usize>(data: &[u8], op: &'static str) -> Result<[u8; N]> {
    <[u8; N]>::try_from(data).map_err(|_| Bn128Error::InvalidRecordLength {
        op,
        expected: N,
        len: data.len(),
    })
}

fn read_fq(bytes: &[u8]) -> Result<Fq> {
    let mut buf = [0u8; FQ_LEN];
    buf.copy_from_slice(&bytes[..FQ_LEN]);
    Fq::from_be_bytes(buf).ok_or(Bn128Error::NonCanonicalFieldElement)
}

pub fn decode_g1(bytes: &[u8; G1_LEN]) -> Result<G1Affine> {
    let x = read_fq(&bytes[..FQ_LEN])?;
    let y = read_fq(&bytes[FQ_LEN..])?;
    G1Affine::new(x, y)
}

pub fn decode_g2(bytes: &[u8; G2_LEN]) -> Result<G2Affine> {
    let x_im = read_fq(&bytes[..FQ_LEN])?;
    let x_re = read_fq(&bytes[FQ_LEN..2 * FQ_LEN])?;
    let y_im = read_fq(&bytes[2 * FQ_LEN..3 * FQ_LEN])?;
    let y_re = read_fq(&bytes[3 * FQ_LEN..])?;
    G2Affine::new(Fq2::new(x_re, x_im), Fq2::new(y_re, y_im))
}

/// Split a pairing record into its G1 and G2 halves.
pub fn split_pair(record: &[u8; PAIR_LEN]) -> ([u8; G1_LEN], [u8; G2_LEN]) {
    let mut g1 = [0u8; G1_LEN];
    let mut g2 = [0u8; G2_LEN];
    g1.copy_from_slice(&record[..G1_LEN]);
    g2.copy_from_slice(&record[G1_LEN..]);
    (g1, g2)
}

pub fn encode_g1(p: &G1Affine) -> [u8; G1_LEN] {
    let mut out = [0u8; G1_LEN];
    if !p.infinity {
        out[..FQ_LEN].copy_from_slice(&p.x.to_be_bytes());
        out[FQ_LEN..].copy_from_slice(&p.y.to_be_bytes());
    }
    out
}

pub fn encode_g2(p: &G2Affine) -> [u8; G2_LEN] {
    let mut out = [0u8; G2_LEN];
    if !p.infinity {
        out[..FQ_LEN].copy_from_slice(&p.x.c1.to_be_bytes());
        out[FQ_LEN..2 * FQ_LEN].copy_from_slice(&p.x.c0.to_be_bytes());
        out[2 * FQ_LEN..3 * FQ_LEN].copy_from_slice(&p.y.c1.to_be_bytes());
        out[3 * FQ_LEN..].copy_from_slice(&p.y.c0.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CurveParams, G1Params, G2Params};
    use crate::field::MODULUS;

    #[test]
    fn test_split_records_layout() {
        let ok = split_records::<64>(&[0u8; 192], "g1_add", 16).unwrap();
        assert_eq!(ok.len(), 3);

        assert_eq!(
            split_records::<64>(&[], "g1_add", 16),
            Err(Bn128Error::InvalidBatchLayout { op: "g1_add", record: 64, len: 0 })
        );
        assert_eq!(
            split_records::<128>(&[0u8; 192], "g2_add", 16),
            Err(Bn128Error::InvalidBatchLayout { op: "g2_add", record: 128, len: 192 })
        );
        assert_eq!(
            split_records::<64>(&[0u8; 192], "g1_add", 2),
            Err(Bn128Error::BatchTooLarge { op: "g1_add", count: 3, max: 2 })
        );
    }

    #[test]
    fn test_single_record() {
        assert!(single_record::<64>(&[0u8; 64], "g1_mul").is_ok());
        assert_eq!(
            single_record::<64>(&[0u8; 65], "g1_mul"),
            Err(Bn128Error::InvalidRecordLength { op: "g1_mul", expected: 64, len: 65 })
        );
    }

    #[test]
    fn test_generator_encodings() {
        let g1 = encode_g1(&G1Params::generator());
        assert_eq!(g1[31], 1);
        assert_eq!(g1[63], 2);
        assert_eq!(decode_g1(&g1).unwrap(), G1Params::generator());

        let g2 = encode_g2(&G2Params::generator());
        assert_eq!(
            hex::encode(&g2[..32]),
            "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2"
        );
        assert_eq!(decode_g2(&g2).unwrap(), G2Params::generator());
    }

    #[test]
    fn test_identity_is_all_zeros() {
        assert!(decode_g1(&[0u8; G1_LEN]).unwrap().is_identity());
        assert!(decode_g2(&[0u8; G2_LEN]).unwrap().is_identity());
        assert_eq!(encode_g1(&G1Affine::identity()), [0u8; G1_LEN]);
        assert_eq!(encode_g2(&G2Affine::identity()), [0u8; G2_LEN]);
    }

    #[test]
    fn test_rejects_non_canonical_coordinate() {
        // x = q + 1 would reduce to the generator's x
        let mut bytes = encode_g1(&G1Params::generator());
        let x = MODULUS + alloy_primitives::U256::from(1u64);
        bytes[..32].copy_from_slice(&x.to_be_bytes::<32>());
        assert_eq!(decode_g1(&bytes), Err(Bn128Error::NonCanonicalFieldElement));
    }

    #[test]
    fn test_split_pair() {
        let mut record = [0u8; PAIR_LEN];
        record[63] = 1;
        record[64] = 2;
        let (a, b) = split_pair(&record);
        assert_eq!(a[63], 1);
        assert_eq!(b[0], 2);
    }
}
