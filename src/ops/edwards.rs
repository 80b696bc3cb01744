//! Operations on Edwards25519 point encodings.
//!
//! Encodings are the 32-byte form used by Ed25519 public keys: the affine
//! `y` coordinate with the sign of `x` in bit 255. Inputs whose `y` is not
//! below `p`, that are off the curve, or that encode a negative zero `x`
//! are rejected with `None`.
//!
//! Unlike Ristretto, the Edwards group has a cofactor of 8, so a valid
//! encoding may carry a small-order component. [`validate`] checks for that,
//! and the variable-base multiplications refuse points that fail it.

use crate::curve::group::{GroupElement, is_canonical_encoding, is_identity_encoding};
use crate::curve::ristretto::from_uniform_bytes;
use crate::curve::scalar::Scalar;
use crate::{HASH_BYTES, POINT_BYTES, SCALAR_BYTES};

fn decode(p: &[u8; POINT_BYTES]) -> Option<GroupElement> {
    if !is_canonical_encoding(p) {
        return None;
    }
    GroupElement::from_bytes(p)
}

fn decode_negate(p: &[u8; POINT_BYTES]) -> Option<GroupElement> {
    if !is_canonical_encoding(p) {
        return None;
    }
    GroupElement::from_bytes_negate(p)
}

fn non_identity(p: GroupElement) -> Option<[u8; POINT_BYTES]> {
    if bool::from(p.is_identity()) {
        return None;
    }
    Some(p.to_bytes())
}

/// Returns true iff `p` is a usable public point.
///
/// That is: `p` decodes, is not the identity, has no small-order component,
/// and lies in the prime-order subgroup (`ℓ·p` is the identity).
pub fn validate(p: &[u8; POINT_BYTES]) -> bool {
    if is_identity_encoding(p) {
        return false;
    }

    match decode(p) {
        Some(point) => !point.has_low_order() && point.is_torsion_free(),
        None => false,
    }
}

/// Computes `8·p`, stripping any small-order component.
pub fn clear_cofactor(p: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    decode(p).map(|point| point.clear_cofactor().to_bytes())
}

/// Computes `n·p`.
///
/// `n` is used as a plain 256-bit integer. Returns `None` if `p` fails
/// [`validate`] or the product is the identity.
pub fn mul(n: &[u8; SCALAR_BYTES], p: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    if !validate(p) {
        return None;
    }
    non_identity(decode(p)?.scalar_mul(&Scalar(*n)))
}

/// Computes `n·B`.
///
/// Returns `None` if `n` is zero or the product is the identity.
pub fn base_mul(n: &[u8; SCALAR_BYTES]) -> Option<[u8; POINT_BYTES]> {
    let n = Scalar(*n);
    if n.is_zero() {
        return None;
    }
    non_identity(GroupElement::base_mul(&n))
}

/// Clamps `n` as for an Ed25519 secret, then computes `n·p` as [`mul`].
pub fn mul_clamp(n: &[u8; SCALAR_BYTES], p: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    mul(&Scalar(*n).clamp().to_bytes(), p)
}

/// Clamps `n` as for an Ed25519 secret, then computes `n·B` as
/// [`base_mul`].
pub fn base_mul_clamp(n: &[u8; SCALAR_BYTES]) -> Option<[u8; POINT_BYTES]> {
    base_mul(&Scalar(*n).clamp().to_bytes())
}

/// Computes `p + q`.
pub fn add(p: &[u8; POINT_BYTES], q: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    Some((decode(p)? + decode(q)?).to_bytes())
}

/// Computes `p - q`.
pub fn sub(p: &[u8; POINT_BYTES], q: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    Some((decode(p)? + decode_negate(q)?).to_bytes())
}

/// Computes `-p`.
pub fn neg(p: &[u8; POINT_BYTES]) -> Option<[u8; POINT_BYTES]> {
    decode_negate(p).map(|point| point.to_bytes())
}

/// Maps 64 uniformly random bytes (typically a hash output) to a point in
/// the prime-order subgroup.
///
/// Each half goes through Elligator 2, the images are added and the
/// cofactor is cleared.
pub fn from_hash(h: &[u8; HASH_BYTES]) -> [u8; POINT_BYTES] {
    from_uniform_bytes(h).clear_cofactor().to_bytes()
}
