//! Ed25519 and Ristretto255 signatures with the primitives underneath.
//!
//! This crate implements, from the hash function up, everything needed to
//! sign and verify with Ed25519 or with Schnorr signatures over
//! Ristretto255, and exposes the intermediate layers for protocols that
//! need direct access to scalars and points.
//!
//! The focus is on **clarity, predictability, and constant-time
//! behavior**. Every operation is a pure function over fixed-size byte
//! arrays: no global mutable state, no I/O, no heap allocation outside of
//! hex encoding.
//!
//! # Module overview
//!
//! - `hash`  
//!   SHA-256 and SHA-512, as streaming contexts and one-shot functions, and
//!   HMAC over either.
//!
//! - `signatures`  
//!   The two signature schemes, [`signatures::ed25519`] and
//!   [`signatures::ristretto`]. Both derive key pairs from a 32-byte seed
//!   and accept optional extra randomness for synthetic nonces.
//!
//! - `keys`  
//!   The [`keys::KeyPair`] and [`keys::Signature`] containers shared by
//!   both schemes.
//!
//! - `ops`  
//!   Byte-level scalar arithmetic modulo ℓ and point arithmetic on Edwards
//!   and Ristretto encodings, including hash-to-group.
//!
//! - `utils`  
//!   Constant-time comparison, hex conversion and memory wiping.
//!
//! # Errors
//!
//! Wrong-sized input is reported through [`Error`]. Inputs of the right
//! size that do not decode, or that would produce a degenerate result, give
//! `None`. Signature verification only ever returns `true` or `false`.
//!
//! # Secret material
//!
//! Nothing is wiped automatically. [`keys::KeyPair`] implements
//! `Zeroize`, and [`utils::memzero`] clears exported buffers.

mod curve;
mod error;

pub mod hash;
pub mod keys;
pub mod ops;
pub mod signatures;
pub mod utils;

pub use error::Error;

/// Signature size.
pub const SIGN_BYTES: usize = 64;
/// Public key size.
pub const SIGN_PUBLICKEYBYTES: usize = 32;
/// Secret key (seed) size.
pub const SIGN_SECRETKEYBYTES: usize = 32;
/// Serialized key pair size.
pub const SIGN_KEYPAIRBYTES: usize = SIGN_SECRETKEYBYTES + SIGN_PUBLICKEYBYTES;
/// Seed size.
pub const SIGN_SEEDBYTES: usize = 32;
/// Recommended size of the optional signing randomness.
pub const SIGN_RANDBYTES: usize = 32;
/// SHA-512 digest size.
pub const HASH_BYTES: usize = 64;
/// HMAC-SHA-512 tag size.
pub const HMAC_BYTES: usize = 64;
/// SHA-256 digest size.
pub const SHA256_HASH_BYTES: usize = 32;
/// HMAC-SHA-256 tag size.
pub const SHA256_HMAC_BYTES: usize = 32;
/// Scalar encoding size.
pub const SCALAR_BYTES: usize = 32;
/// Point encoding size, for both Edwards and Ristretto.
pub const POINT_BYTES: usize = 32;
