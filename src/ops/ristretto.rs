//! Operations on Ristretto255 encodings.
//!
//! Every element of the prime-order group has exactly one 32-byte encoding,
//! and the identity encodes as all zeros. Non-canonical or undecodable
//! inputs are rejected with `None`.

use crate::curve::group::GroupElement;
use crate::curve::ristretto::{decode, decode_negate, encode, from_uniform_bytes, is_identity};
use crate::curve::scalar::Scalar;
use crate::{HASH_BYTES, POINT_BYTES, SCALAR_BYTES};

fn non_identity(p: &GroupElement) -> Option<[u8; POINT_BYTES]> {
    let encoded = encode(p);
    if is_identity(&encoded) {
        return None;
    }
    Some(encoded)
}

/// Returns true iff `p` is a canonical encoding of a non-identity element.
pub fn validate(p: &[u8; POINT_BYTES]) -> bool {
    !is_identity(p) && decode(p).is_some()
}

/// Computes `n·p`.
///
/// `n` is used as a plain 256-bit integer. Returns `None` if `p` does not
/// decode or the product is the identity.
pub fn mul(n: &[u8; SCALAR_BYTES], p: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    non_identity(&decode(p)?.scalar_mul(&Scalar(*n)))
}

/// Computes `n·B`.
///
/// Returns `None` if `n` is zero or the product is the identity.
pub fn base_mul(n: &[u8; SCALAR_BYTES]) -> Option<[u8; POINT_BYTES]> {
    let n = Scalar(*n);
    if n.is_zero() {
        return None;
    }
    non_identity(&GroupElement::base_mul(&n))
}

/// Computes `p + q`.
pub fn add(p: &[u8; POINT_BYTES], q: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    Some(encode(&(decode(p)? + decode(q)?)))
}

/// Computes `p - q`.
pub fn sub(p: &[u8; POINT_BYTES], q: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    Some(encode(&(decode(p)? + decode_negate(q)?)))
}

/// Computes `-p`.
pub fn neg(p: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    decode_negate(p).map(|point| encode(&point))
}

/// Maps 64 uniformly random bytes (typically a hash output) to a group
/// element with the Ristretto255 Elligator construction.
pub fn from_hash(h: &[u8; HASH_BYTES]) -> [u8; POINT_BYTES] {
    encode(&from_uniform_bytes(h))
}
