//! Arithmetic modulo the group order
//! `ℓ = 2^252 + 27742317777372353535851937790883648493`.
//!
//! Inputs are 32-byte little-endian integers and need not be reduced; every
//! result except [`cofactor_mul`] is the canonical representative in
//! `[0, ℓ)`.

use crate::curve::scalar::Scalar;
use crate::error::Error;
use crate::{HASH_BYTES, SCALAR_BYTES};

/// Reduces a little-endian integer of 32 to 64 bytes modulo ℓ.
///
/// Typically fed a 64-byte hash output to obtain a uniformly distributed
/// scalar.
///
/// # Errors
/// Returns [`Error::InvalidLengthRange`] for inputs outside 32..=64 bytes.
pub fn reduce(bytes: &[u8]) -> Result<[u8; SCALAR_BYTES], Error> {
    if !(SCALAR_BYTES..=HASH_BYTES).contains(&bytes.len()) {
        return Err(Error::InvalidLengthRange {
            what: "scalar input",
            min: SCALAR_BYTES,
            max: HASH_BYTES,
            got: bytes.len(),
        });
    }
    Ok(Scalar::reduce(bytes).to_bytes())
}

/// Computes `s^-1 (mod ℓ)`. Zero maps to zero.
pub fn invert(s: &[u8; SCALAR_BYTES]) -> [u8; SCALAR_BYTES] {
    Scalar(*s).invert().to_bytes()
}

/// Computes `-s (mod ℓ)`.
pub fn negate(s: &[u8; SCALAR_BYTES]) -> [u8; SCALAR_BYTES] {
    (-Scalar(*s)).to_bytes()
}

/// Computes `1 - s (mod ℓ)`.
pub fn complement(s: &[u8; SCALAR_BYTES]) -> [u8; SCALAR_BYTES] {
    Scalar(*s).complement().to_bytes()
}

/// Computes `x + y (mod ℓ)`.
pub fn add(x: &[u8; SCALAR_BYTES], y: &[u8; SCALAR_BYTES]) -> [u8; SCALAR_BYTES] {
    (Scalar(*x) + Scalar(*y)).to_bytes()
}

/// Computes `x - y (mod ℓ)`.
pub fn sub(x: &[u8; SCALAR_BYTES], y: &[u8; SCALAR_BYTES]) -> [u8; SCALAR_BYTES] {
    (Scalar(*x) - Scalar(*y)).to_bytes()
}

/// Computes `x · y (mod ℓ)`.
pub fn mul(x: &[u8; SCALAR_BYTES], y: &[u8; SCALAR_BYTES]) -> [u8; SCALAR_BYTES] {
    (Scalar(*x) * Scalar(*y)).to_bytes()
}

/// Returns true iff `s < ℓ`, in constant time.
pub fn is_canonical(s: &[u8; SCALAR_BYTES]) -> bool {
    bool::from(Scalar(*s).is_canonical())
}

/// Multiplies `s` by the cofactor 8 as a plain integer, without reduction.
///
/// # Errors
/// Returns [`Error::ScalarOverflow`] if any of the top three bits of `s` is
/// set.
pub fn cofactor_mul(s: &[u8; SCALAR_BYTES]) -> Result<[u8; SCALAR_BYTES], Error> {
    Scalar(*s)
        .mul_by_cofactor()
        .map(Scalar::to_bytes)
        .ok_or(Error::ScalarOverflow)
}
