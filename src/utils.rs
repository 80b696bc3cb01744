//! Byte-level helpers for callers handling secret material.
//!
//! None of these functions branch on the byte values they process, so they
//! are safe to use on keys, seeds and signatures.

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::Error;

/// Overwrites `buf` with zeros in a way the optimizer will not elide.
///
/// Nothing in this crate wipes secrets automatically; callers decide when
/// key material is no longer needed.
pub fn memzero(buf: &mut [u8]) {
    buf.zeroize();
}

/// Compares two byte strings in time independent of their contents.
///
/// Returns `false` when the lengths differ or when both are empty.
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || a.len() != b.len() {
        return false;
    }
    bool::from(a.ct_eq(b))
}

/// Lowercase hexadecimal encoding.
pub fn bin2hex(bin: &[u8]) -> String {
    let mut hex = String::with_capacity(bin.len() * 2);

    for &b in bin {
        hex.push(char::from(hex_digit(b >> 4)));
        hex.push(char::from(hex_digit(b & 0x0f)));
    }

    hex
}

/// Decodes a hexadecimal string (either case).
///
/// The whole input is scanned before an error is reported, so the time
/// taken does not reveal the position of an invalid character.
pub fn hex2bin(hex: &str) -> Result<Vec<u8>, Error> {
    let hex = hex.as_bytes();
    if hex.len() % 2 != 0 {
        return Err(Error::InvalidHex);
    }

    let mut bin = Vec::with_capacity(hex.len() / 2);
    let mut ok = Choice::from(1);

    for pair in hex.chunks_exact(2) {
        let (hi, hi_valid) = hex_value(pair[0]);
        let (lo, lo_valid) = hex_value(pair[1]);

        ok &= !hi_valid.ct_eq(&0) & !lo_valid.ct_eq(&0);
        bin.push((hi << 4) | lo);
    }

    if bool::from(ok) {
        Ok(bin)
    } else {
        Err(Error::InvalidHex)
    }
}

/// Maps a nibble to `0-9a-f`.
#[inline]
fn hex_digit(n: u8) -> u8 {
    let n = i32::from(n);
    // 'a' - 10 == 87, and '0' - 87 == -39
    (87 + n + (((n - 10) >> 8) & -39)) as u8
}

/// Returns the nibble value of `c` and a mask that is nonzero iff `c` is a
/// hexadecimal digit.
#[inline]
fn hex_value(c: u8) -> (u8, u32) {
    let c = u32::from(c);

    let num = c ^ 48;
    let num_mask = num.wrapping_sub(10) >> 8;

    let alpha = (c & !32).wrapping_sub(55);
    let alpha_mask = (alpha.wrapping_sub(10) ^ alpha.wrapping_sub(16)) >> 8;

    let value = ((num_mask & num) | (alpha_mask & alpha)) as u8;

    (value, num_mask | alpha_mask)
}
