//! Key and signature containers.
//!
//! This module defines the byte-level representations shared by both
//! signature schemes:
//! - [`KeyPair`]: a 32-byte secret seed followed by the 32-byte public key,
//! - [`Signature`]: a 32-byte commitment `R` followed by the 32-byte
//!   response scalar `s`.
//!
//! The layouts are identical for Ed25519 and Ristretto-Schnorr; only the
//! way the public half is derived from the seed differs, so a key pair must
//! be used with the scheme that produced it.
//!
//! No signing, verification, or derivation logic lives here, only key
//! structure and access.

mod keypair;
mod signature;

pub use keypair::KeyPair;
pub use signature::Signature;
