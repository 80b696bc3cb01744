//! SHA-512 compression and the streaming hash context.

use super::computations::all_rounds;
use super::{BLOCK_LEN, H512_INIT, OUTPUT_LEN};

/// Compresses a single 1024-bit message block into `state`.
///
/// Input words are read big-endian; the remaining 64 schedule words are
/// expanded on the fly by `all_rounds`.
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    all_rounds(state, w);
}

/// Streaming SHA-512 context.
///
/// The context keeps the eight chaining words, the pending partial block and
/// the total number of bytes absorbed so far. It is single use: once
/// [`Sha512::finalize`] is called the context is consumed.
#[derive(Clone)]
pub struct Sha512 {
    state: [u64; 8],
    block: [u8; BLOCK_LEN],
    filled: usize,
    length: u128,
}

impl Sha512 {
    /// Creates a context loaded with the SHA-512 initial hash value.
    pub fn new() -> Self {
        Self {
            state: H512_INIT,
            block: [0u8; BLOCK_LEN],
            filled: 0,
            length: 0,
        }
    }

    /// Absorbs `input`.
    ///
    /// Full blocks are compressed immediately; a trailing partial block is
    /// buffered until more input arrives or the context is finalized.
    pub fn update(&mut self, mut input: &[u8]) {
        self.length = self.length.wrapping_add(input.len() as u128);

        // Top up a pending partial block first
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

        // Process full 1024-bit blocks straight from the input
        while let Some((block, rest)) = input.split_first_chunk::<BLOCK_LEN>() {
            compress(block, &mut self.state);
            input = rest;
        }

        self.block[..input.len()].copy_from_slice(input);
        self.filled = input.len();
    }

    /// Pads the message, appending its bit length as a 128-bit big-endian
    /// integer, and returns the digest.
    pub fn finalize(mut self) -> [u8; OUTPUT_LEN] {
        let bit_len = self.length.wrapping_mul(8);
        let rem = self.filled;

        // Append the padding bit (0x80) and clear the rest of the block
        self.block[rem] = 0x80;
        self.block[rem + 1..].fill(0);

        // If there is not enough space for the 128-bit length field,
        // process this block and use an additional zeroed block.
        if rem > 111 {
            compress(&self.block, &mut self.state);
            self.block = [0u8; BLOCK_LEN];
        }

        self.block[112..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&self.block, &mut self.state);

        let mut out = [0u8; OUTPUT_LEN];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot SHA-512 of `input`.
pub fn sha512(input: &[u8]) -> [u8; OUTPUT_LEN] {
    let mut h = Sha512::new();
    h.update(input);
    h.finalize()
}
