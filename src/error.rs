use thiserror::Error;

/// Every way a precompile call can fail.
///
/// All variants except [`Bn128Error::Arithmetic`] reject caller input and are
/// raised before any curve arithmetic runs on that input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bn128Error {
    #[error("{op}: compressed points are not supported yet")]
    CompressedUnsupported { op: &'static str },

    #[error("{op}: invalid data layout: expected a multiple of {record} bytes, got {len}")]
    InvalidBatchLayout { op: &'static str, record: usize, len: usize },

    #[error("{op}: invalid data length: expected={expected} bytes, got {len}")]
    InvalidRecordLength { op: &'static str, expected: usize, len: usize },

    #[error("{op}: batch of {count} records exceeds the limit of {max}")]
    BatchTooLarge { op: &'static str, count: usize, max: usize },

    #[error("coordinate is not a canonical field element (>= field modulus)")]
    NonCanonicalFieldElement,

    #[error("point is not on the {curve} curve")]
    NotOnCurve { curve: &'static str },

    #[error("point is not in the prime-order subgroup of {curve}")]
    NotInSubgroup { curve: &'static str },

    #[error("scalar is out of range: must be below the group order")]
    ScalarOutOfRange,

    #[error("unknown curve `{name}` for {op}")]
    UnknownCurve { op: &'static str, name: String },

    #[error("pairing check needs at least one pair")]
    EmptyPairingBatch,

    #[error("arithmetic failure: {0}")]
    Arithmetic(&'static str),
}

impl Bn128Error {
    /// `true` when the caller's input was rejected, `false` for an internal
    /// arithmetic defect.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Bn128Error::Arithmetic(_))
    }
}

pub type Result<T, E = Bn128Error> = core::result::Result<T, E>;
