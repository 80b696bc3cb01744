use std::fmt;

use crate::SIGN_BYTES;
use crate::error::{Error, fixed};
use crate::utils::bin2hex;

/// A 64-byte signature `R || s`.
///
/// No validation is performed at construction time. Structural and
/// cryptographic validity is checked during verification.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGN_BYTES]);

impl Signature {
    pub(crate) fn from_parts(r: &[u8; 32], s: &[u8; 32]) -> Self {
        let mut bytes = [0u8; SIGN_BYTES];
        bytes[..32].copy_from_slice(r);
        bytes[32..].copy_from_slice(s);
        Signature(bytes)
    }

    /// Wraps a raw 64-byte signature.
    #[inline]
    pub fn from_bytes(bytes: [u8; SIGN_BYTES]) -> Self {
        Signature(bytes)
    }

    /// Returns the raw byte encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGN_BYTES] {
        self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        fixed::<SIGN_BYTES>(bytes, "signature").map(|b| Signature(*b))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", bin2hex(&self.0))
    }
}
