use thiserror::Error;

/// Errors reported for malformed caller input.
///
/// Only size and format problems surface here. Encodings that decode to an
/// invalid point are reported as `None`, and failed verifications as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid {what} length: expected {expected} got {got}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {what} length: expected {min} to {max} got {got}")]
    InvalidLengthRange {
        what: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("scalar multiplication by the cofactor would overflow")]
    ScalarOverflow,

    #[error("invalid hexadecimal encoding")]
    InvalidHex,
}

/// Borrows `bytes` as a fixed-size array, reporting a size error otherwise.
pub(crate) fn fixed<'a, const N: usize>(
    bytes: &'a [u8],
    what: &'static str,
) -> Result<&'a [u8; N], Error> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        what,
        expected: N,
        got: bytes.len(),
    })
}
