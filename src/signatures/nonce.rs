//! Nonce and challenge derivation shared by both signature schemes.

use zeroize::Zeroize;

use crate::curve::scalar::Scalar;
use crate::hash::{Sha512, sha512};
use crate::{HASH_BYTES, SIGN_SEEDBYTES};

/// Domain separator opening the synthetic nonce block.
const SYNTHETIC_PREFIX: [u8; 32] = [0x66; 32];

/// Label preceding each secret-dependent segment of the synthetic block.
const SEGMENT_LABEL: [u8; 3] = [0x02, 0x00, 0x00];

/// Random input longer than this would spill the first hash block and is
/// compressed with SHA-512 first.
const MAX_INLINE_RANDOM: usize = 128 - SYNTHETIC_PREFIX.len() - SEGMENT_LABEL.len();

const ZEROS: [u8; 128] = [0u8; 128];

/// Expands a seed into the 64-byte secret `az`.
///
/// The low half is the signing scalar (clamped for Ed25519), the high half
/// is the deterministic nonce key.
pub(crate) fn expand_seed(seed: &[u8; SIGN_SEEDBYTES]) -> [u8; HASH_BYTES] {
    sha512(seed)
}

/// Returns the low half of `az` as a raw scalar.
pub(crate) fn secret_half(az: &[u8; HASH_BYTES]) -> Scalar {
    let mut a = [0u8; 32];
    a.copy_from_slice(&az[..32]);
    Scalar(a)
}

/// Derives the per-signature nonce.
///
/// Without random input the nonce is `SHA-512(az[32..] || message)`. With
/// random input `Z` the hash instead starts with a block-aligned header:
///
/// ```text
/// 0x66 * 32 || 02 00 00 || Z || zero padding to 128 bytes
/// az[..32] || zeros(96)
/// 02 00 00 || az[32..]
/// ```
///
/// so that `Z` and the two halves of the secret land in separate
/// compression blocks.
pub(crate) fn derive_nonce(
    az: &[u8; HASH_BYTES],
    message: &[u8],
    random: Option<&[u8]>,
) -> Scalar {
    let mut h = Sha512::new();

    match random.filter(|z| !z.is_empty()) {
        Some(z) => {
            let compressed;
            let z = if z.len() > MAX_INLINE_RANDOM {
                compressed = sha512(z);
                &compressed[..]
            } else {
                z
            };

            let pad = 128 - ((SYNTHETIC_PREFIX.len() + SEGMENT_LABEL.len() + z.len()) & 127);

            h.update(&SYNTHETIC_PREFIX);
            h.update(&SEGMENT_LABEL);
            h.update(z);
            h.update(&ZEROS[..pad]);
            h.update(&az[..32]);
            h.update(&ZEROS[..96]);
            h.update(&SEGMENT_LABEL);
            h.update(&az[32..]);
        }
        None => h.update(&az[32..]),
    }

    h.update(message);

    let mut digest = h.finalize();
    let nonce = Scalar::reduce(&digest);
    digest.zeroize();
    nonce
}

/// Computes the challenge `H(R || A || message) mod ℓ`.
pub(crate) fn challenge(r: &[u8; 32], public_key: &[u8], message: &[u8]) -> Scalar {
    let mut h = Sha512::new();
    h.update(r);
    h.update(public_key);
    h.update(message);
    Scalar::reduce(&h.finalize())
}
