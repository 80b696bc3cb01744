//! Ed25519 signatures (RFC 8032), with optional synthetic nonces.
//!
//! Keys are derived from a 32-byte seed:
//!
//! ```text
//! az = SHA-512(seed)
//! a  = clamp(az[..32])
//! A  = encode(a·B)
//! ```
//!
//! Signing without random input reproduces RFC 8032 signatures bit for bit.
//!
//! Verification is cofactored: it accepts when `8·(R - s·B + h·A)` is the
//! identity. In addition it rejects
//! - public keys and `R` values whose `y` is not below `p`,
//! - low-order public keys,
//! - `s` values that are not below ℓ.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::nonce::{challenge, derive_nonce, expand_seed, secret_half};
use crate::curve::group::{GroupElement, is_canonical_encoding};
use crate::curve::scalar::Scalar;
use crate::error::{Error, fixed};
use crate::keys::{KeyPair, Signature};
use crate::{SIGN_BYTES, SIGN_PUBLICKEYBYTES, SIGN_SEEDBYTES};

/// Derives the key pair for `seed`.
///
/// # Errors
/// Returns [`Error::InvalidLength`] unless `seed` is exactly 32 bytes.
pub fn keypair_from_seed(seed: &[u8]) -> Result<KeyPair, Error> {
    fixed::<SIGN_SEEDBYTES>(seed, "seed").map(derive_keypair)
}

/// Draws a fresh seed from `rng` and derives its key pair.
pub fn generate_keypair<R: RngCore + CryptoRng>(rng: &mut R) -> KeyPair {
    let mut seed = [0u8; SIGN_SEEDBYTES];
    rng.fill_bytes(&mut seed);

    let keypair = derive_keypair(&seed);
    seed.zeroize();
    keypair
}

fn derive_keypair(seed: &[u8; SIGN_SEEDBYTES]) -> KeyPair {
    let mut az = expand_seed(seed);
    let a = secret_half(&az).clamp();
    let public_key = GroupElement::base_mul(&a).to_bytes();
    az.zeroize();

    KeyPair::from_parts(seed, &public_key)
}

/// Signs `message`.
///
/// `random` is optional extra entropy. `None` or an empty slice gives the
/// deterministic RFC 8032 signature; anything else is mixed into the nonce
/// and yields a different, equally valid signature on every distinct input.
pub fn sign(message: &[u8], keypair: &KeyPair, random: Option<&[u8]>) -> Signature {
    let mut az = expand_seed(keypair.seed());

    let nonce = derive_nonce(&az, message, random);
    let r = GroupElement::base_mul(&nonce).to_bytes();

    let hram = challenge(&r, &keypair.public_key(), message);
    let a = secret_half(&az).clamp();
    let s = Scalar::from_mul_sum(&hram, &a, &nonce);
    az.zeroize();

    Signature::from_parts(&r, &s.to_bytes())
}

/// Verifies `signature` over `message` under `public_key`.
///
/// Returns `false` for any size mismatch, non-canonical encoding, low-order
/// public key or failed equation check; it never returns an error.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    let (Ok(signature), Ok(public_key)) = (
        fixed::<SIGN_BYTES>(signature, "signature"),
        fixed::<SIGN_PUBLICKEYBYTES>(public_key, "public key"),
    ) else {
        return false;
    };

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..]);
    let s = Scalar(s);

    if !is_canonical_encoding(public_key) || !bool::from(s.is_canonical()) {
        return false;
    }

    let Some(neg_a) = GroupElement::from_bytes_negate(public_key) else {
        return false;
    };
    if neg_a.has_low_order() {
        return false;
    }

    if !is_canonical_encoding(&r) {
        return false;
    }
    let Some(r_point) = GroupElement::from_bytes(&r) else {
        return false;
    };

    let hram = challenge(&r, public_key, message);

    // R' = s·B - h·A
    let expected = GroupElement::base_mul(&s) + neg_a.scalar_mul(&hram);

    (r_point - expected).has_low_order()
}
