//! SHA-256 compression and the streaming hash context.

use super::computations::all_rounds;
use super::{BLOCK_LEN, H256_INIT, OUTPUT_LEN};

/// Compresses a single 512-bit message block into `state`.
///
/// Input words are read big-endian; the remaining 48 schedule words are
/// expanded on the fly by `all_rounds`.
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, w);
}

/// Streaming SHA-256 context.
///
/// Bytes are absorbed with [`Sha256::update`] and the digest is produced by
/// [`Sha256::finalize`], which consumes the context.
///
/// ```
/// use fa25519::hash::Sha256;
///
/// let mut h = Sha256::new();
/// h.update(b"ab");
/// h.update(b"c");
/// assert_eq!(h.finalize(), fa25519::hash::sha256(b"abc"));
/// ```
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    block: [u8; BLOCK_LEN],
    filled: usize,
    length: u64,
}

impl Sha256 {
    /// Creates a context loaded with the SHA-256 initial hash value.
    pub fn new() -> Self {
        Self {
            state: H256_INIT,
            block: [0u8; BLOCK_LEN],
            filled: 0,
            length: 0,
        }
    }

    /// Absorbs `input`, compressing every block that becomes full.
    pub fn update(&mut self, mut input: &[u8]) {
        self.length = self.length.wrapping_add(input.len() as u64);

        if self.filled > 0 {
            let take = (BLOCK_LEN - self.filled).min(input.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&input[..take]);
            self.filled += take;
            input = &input[take..];

            if self.filled < BLOCK_LEN {
                return;
            }
            compress(&self.block, &mut self.state);
            self.filled = 0;
        }

        while let Some((block, rest)) = input.split_first_chunk::<BLOCK_LEN>() {
            compress(block, &mut self.state);
            input = rest;
        }

        self.block[..input.len()].copy_from_slice(input);
        self.filled = input.len();
    }

    /// Applies the final padding and returns the 32-byte digest.
    ///
    /// The message length is appended as a 64-bit big-endian bit count.
    pub fn finalize(mut self) -> [u8; OUTPUT_LEN] {
        let bit_len = self.length.wrapping_mul(8);
        let rem = self.filled;

        self.block[rem] = 0x80;
        self.block[rem + 1..].fill(0);

        // No room left for the length field
        if rem > 55 {
            compress(&self.block, &mut self.state);
            self.block = [0u8; BLOCK_LEN];
        }

        self.block[56..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&self.block, &mut self.state);

        let mut out = [0u8; OUTPUT_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SHA-256 digest of `input` in one call.
pub fn sha256(input: &[u8]) -> [u8; OUTPUT_LEN] {
    let mut h = Sha256::new();
    h.update(input);
    h.finalize()
}
