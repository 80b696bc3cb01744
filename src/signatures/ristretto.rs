//! Schnorr signatures over the Ristretto255 group.
//!
//! The signing flow matches [`super::ed25519`], with two differences:
//! - the secret scalar is the low half of `SHA-512(seed)` reduced mod ℓ,
//!   without clamping;
//! - public keys and commitments use the Ristretto255 encoding.
//!
//! Since Ristretto encodings name prime-order group elements, verification
//! is a plain equality check on encodings and needs no cofactor handling.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::nonce::{challenge, derive_nonce, expand_seed};
use crate::curve::group::GroupElement;
use crate::curve::ristretto::{ct_eq_encoding, decode_negate, encode, is_identity};
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

fn secret_scalar(az: &[u8; 64]) -> Scalar {
    Scalar::reduce(&az[..32])
}

fn derive_keypair(seed: &[u8; SIGN_SEEDBYTES]) -> KeyPair {
    let mut az = expand_seed(seed);
    let public_key = encode(&GroupElement::base_mul(&secret_scalar(&az)));
    az.zeroize();

    KeyPair::from_parts(seed, &public_key)
}

/// Signs `message`.
///
/// `random` is optional extra entropy, handled exactly as in
/// [`super::ed25519::sign`].
pub fn sign(message: &[u8], keypair: &KeyPair, random: Option<&[u8]>) -> Signature {
    let mut az = expand_seed(keypair.seed());

    let nonce = derive_nonce(&az, message, random);
    let r = encode(&GroupElement::base_mul(&nonce));

    let hram = challenge(&r, &keypair.public_key(), message);
    let s = Scalar::from_mul_sum(&hram, &secret_scalar(&az), &nonce);
    az.zeroize();

    Signature::from_parts(&r, &s.to_bytes())
}

/// Verifies `signature` over `message` under `public_key`.
///
/// Returns `false` for any size mismatch, the identity public key, a
/// non-canonical `s` or public key, or a failed check.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    let (Ok(signature), Ok(public_key)) = (
        fixed::<SIGN_BYTES>(signature, "signature"),
        fixed::<SIGN_PUBLICKEYBYTES>(public_key, "public key"),
    ) else {
        return false;
    };

    if is_identity(public_key) {
        return false;
    }

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..]);
    let s = Scalar(s);

    if !bool::from(s.is_canonical()) {
        return false;
    }

    let Some(neg_a) = decode_negate(public_key) else {
        return false;
    };

    let hram = challenge(&r, public_key, message);
    let expected = encode(&(neg_a.scalar_mul(&hram) + GroupElement::base_mul(&s)));

    bool::from(ct_eq_encoding(&expected, &r))
}
