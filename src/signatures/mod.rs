//! Digital signature schemes.
//!
//! Two Schnorr-style schemes over Edwards25519 share one signing flow:
//!
//! ```text
//! az    = SHA-512(seed)
//! r     = H(nonce material || message) mod ℓ
//! R     = r·B
//! h     = H(R || A || message) mod ℓ
//! s     = r + h·a mod ℓ
//! sig   = R || s
//! ```
//!
//! - [`ed25519`] clamps the secret half of `az` and uses the Edwards point
//!   encoding, producing signatures compatible with RFC 8032.
//! - [`ristretto`] uses the secret half unclamped and the Ristretto255
//!   encoding, so keys and commitments carry no cofactor ambiguity.
//!
//! Both accept an optional caller-supplied random buffer `Z`. Without it
//! signing is fully deterministic; with it the nonce is synthetic, mixing
//! `Z` with the secret so that a broken RNG can never leak the key while a
//! working one protects against fault attacks.
//!
//! Verification never fails with an error: any malformed, non-canonical or
//! low-order input simply yields `false`.

pub mod ed25519;
pub mod ristretto;

mod nonce;
