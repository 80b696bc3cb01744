//! HMAC (RFC 2104) over the SHA-2 contexts.
//!
//! Keys longer than the hash block are first replaced by their digest under
//! the same hash function; shorter keys are zero-padded to the block size.

use zeroize::Zeroize;

use super::{Hasher, Sha256, Sha512, sha256, sha512};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Largest block size among the supported hashes.
const MAX_BLOCK_LEN: usize = sha512::BLOCK_LEN;

/// Computes `HMAC-H(key, message)`.
pub fn hmac<H: Hasher>(message: &[u8], key: &[u8]) -> H::Output {
    let mut block = [0u8; MAX_BLOCK_LEN];
    let pad = &mut block[..H::BLOCK_LEN];

    if key.len() > H::BLOCK_LEN {
        let mut hashed = H::digest(key);
        let hashed_key = hashed.as_ref();
        pad[..hashed_key.len()].copy_from_slice(hashed_key);
        hashed.as_mut().zeroize();
    } else {
        pad[..key.len()].copy_from_slice(key);
    }

    pad.iter_mut().for_each(|b| *b ^= IPAD);
    let mut inner = H::default();
    inner.update(pad);
    inner.update(message);
    let inner_digest = inner.finalize();

    pad.iter_mut().for_each(|b| *b ^= IPAD ^ OPAD);
    let mut outer = H::default();
    outer.update(pad);
    outer.update(inner_digest.as_ref());

    block.zeroize();
    outer.finalize()
}

/// HMAC-SHA-256, producing a 32-byte tag.
pub fn hmac_sha256(message: &[u8], key: &[u8]) -> [u8; sha256::OUTPUT_LEN] {
    hmac::<Sha256>(message, key)
}

/// HMAC-SHA-512, producing a 64-byte tag.
pub fn hmac_sha512(message: &[u8], key: &[u8]) -> [u8; sha512::OUTPUT_LEN] {
    hmac::<Sha512>(message, key)
}
