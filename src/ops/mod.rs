//! Byte-level scalar and point operations.
//!
//! These are the building blocks for protocols that need more than
//! signatures: blinding, key tweaking, hash-to-group and the like. Every
//! function takes and returns fixed-size little-endian encodings, so the
//! curve internals never leak into caller code.
//!
//! - [`scalar`]: arithmetic modulo the group order ℓ.
//! - [`edwards`]: operations on Edwards25519 point encodings, as used by
//!   Ed25519 public keys.
//! - [`ristretto`]: operations on Ristretto255 encodings, a prime-order
//!   group with one encoding per element.
//!
//! Point operations return `None` when an input does not decode or when the
//! result would be a point the caller almost certainly did not intend (for
//! example the identity out of a multiplication).

pub mod edwards;
pub mod ristretto;
pub mod scalar;
