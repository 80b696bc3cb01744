//! Hash algorithms exposed by the crate.
//!
//! Includes SHA-256 and SHA-512 with pure-Rust implementations, both as
//! streaming contexts and one-shot functions, and HMAC over either of them.

pub mod hmac;
pub mod sha256;
pub mod sha512;

pub use hmac::{hmac, hmac_sha256, hmac_sha512};
pub use sha256::{Sha256, sha256};
pub use sha512::{Sha512, sha512};

/// Common interface of the streaming hash contexts.
///
/// HMAC is written once against this trait and instantiated for both
/// SHA-256 and SHA-512.
pub trait Hasher: Default {
    /// Compression block size in bytes.
    const BLOCK_LEN: usize;

    /// Digest size in bytes.
    const OUTPUT_LEN: usize;

    /// Fixed-size digest type.
    type Output: AsRef<[u8]> + AsMut<[u8]>;

    /// Absorbs more input.
    fn update(&mut self, input: &[u8]);

    /// Pads, compresses the final block(s) and returns the digest.
    fn finalize(self) -> Self::Output;

    /// Hashes `input` in one call.
    fn digest(input: &[u8]) -> Self::Output {
        let mut h = Self::default();
        h.update(input);
        h.finalize()
    }
}

impl Hasher for Sha256 {
    const BLOCK_LEN: usize = sha256::BLOCK_LEN;
    const OUTPUT_LEN: usize = sha256::OUTPUT_LEN;
    type Output = [u8; sha256::OUTPUT_LEN];

    fn update(&mut self, input: &[u8]) {
        Sha256::update(self, input);
    }

    fn finalize(self) -> Self::Output {
        Sha256::finalize(self)
    }
}

impl Hasher for Sha512 {
    const BLOCK_LEN: usize = sha512::BLOCK_LEN;
    const OUTPUT_LEN: usize = sha512::OUTPUT_LEN;
    type Output = [u8; sha512::OUTPUT_LEN];

    fn update(&mut self, input: &[u8]) {
        Sha512::update(self, input);
    }

    fn finalize(self) -> Self::Output {
        Sha512::finalize(self)
    }
}
