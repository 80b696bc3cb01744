//! Scalar arithmetic modulo the group order ℓ.
//!
//! Scalars are integers modulo the prime order of the Edwards25519 base
//! point:
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! ## Representation
//!
//! A [`Scalar`] is a fixed-size `[u8; 32]` little-endian byte array. It does
//! **not** enforce reduction by itself: clamped Ed25519 secrets and raw
//! digest halves are valid inputs to multiplication. Every arithmetic
//! operation returns a canonical value in `[0, ℓ)`.
//!
//! Wide intermediates live in [`ScalarWide`]: 64 signed limbs of radix 2⁸,
//! large enough for a full 512-bit product before reduction.
//!
//! ## Reduction
//!
//! Limbs 63 down to 32 are eliminated one at a time by subtracting
//! `16 · x[i] · ℓ` at the matching offset, using `2^256 ≡ -16·(ℓ - 2^252)`.
//! A final pass removes what remains above bit 252 and a conditional
//! correction brings the result into `[0, ℓ)`.

use std::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConstantTimeEq};

/// The group order ℓ, little-endian.
pub(crate) const L: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// A 256-bit scalar, little-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Scalar(pub(crate) [u8; 32]);

/// A 512-bit intermediate in 64 signed radix-2⁸ limbs.
///
/// Only exists between a widening operation and [`ScalarWide::reduce`].
pub(crate) struct ScalarWide([i64; 64]);

impl ScalarWide {
    /// Loads up to 64 little-endian bytes; missing high bytes are zero.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        let mut x = [0i64; 64];
        for (limb, &b) in x.iter_mut().zip(bytes) {
            *limb = i64::from(b);
        }
        ScalarWide(x)
    }

    /// Schoolbook product of two 32-byte scalars, carried back to bytes.
    fn product(a: &Scalar, b: &Scalar) -> Self {
        let mut t = [0i64; 64];

        for (i, &ai) in a.0.iter().enumerate() {
            for (j, &bj) in b.0.iter().enumerate() {
                t[i + j] += i64::from(ai) * i64::from(bj);
            }
        }

        let mut wide = ScalarWide(t);
        wide.carry();
        wide
    }

    /// Normalizes every limb to `[0, 256)`. The value must fit in 512 bits.
    fn carry(&mut self) {
        let mut carry = 0i64;
        for limb in self.0.iter_mut() {
            let c = *limb + carry;
            *limb = c & 0xff;
            carry = c >> 8;
        }
    }

    /// Reduces modulo ℓ, producing a canonical scalar.
    pub(crate) fn reduce(self) -> Scalar {
        let mut x = self.0;
        let l = L.map(i64::from);

        for i in (32..64).rev() {
            let mut carry = 0i64;
            let xi = x[i];

            for j in i - 32..i - 12 {
                let xj = x[j] + carry - 16 * xi * l[j - (i - 32)];
                carry = (xj + 128) >> 8;
                x[j] = xj - carry * 256;
            }

            x[i - 12] += carry;
            x[i] = 0;
        }

        let mut carry = 0i64;
        for j in 0..32 {
            let xj = x[j] + carry - (x[31] >> 4) * l[j];
            carry = xj >> 8;
            x[j] = xj & 0xff;
        }

        for j in 0..32 {
            x[j] -= carry * l[j];
        }

        let mut out = [0u8; 32];
        for i in 0..32 {
            x[i + 1] += x[i] >> 8;
            out[i] = x[i] as u8;
        }

        Scalar(out)
    }
}

impl Scalar {
    pub(crate) const ZERO: Self = Scalar([0u8; 32]);

    pub(crate) const ONE: Self = Scalar([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0,
    ]);

    /// Reduces a little-endian integer of at most 64 bytes modulo ℓ.
    pub(crate) fn reduce(bytes: &[u8]) -> Self {
        ScalarWide::from_bytes(bytes).reduce()
    }

    /// Returns the raw 32-byte encoding.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Returns `1` iff the encoded integer is strictly less than ℓ.
    ///
    /// The comparison walks every byte from the most significant down,
    /// recording the first difference without branching on it.
    pub(crate) fn is_canonical(&self) -> Choice {
        let mut c = 0i32;
        let mut n = 1i32;

        for i in (0..32).rev() {
            let s = i32::from(self.0[i]);
            let l = i32::from(L[i]);
            c |= ((s - l) >> 8) & n;
            n &= ((s ^ l) - 1) >> 8;
        }

        Choice::from(c as u8)
    }

    /// Returns true iff every byte is zero.
    pub(crate) fn is_zero(&self) -> bool {
        bool::from(self.0[..].ct_eq(&Scalar::ZERO.0[..]))
    }

    /// Clears the low three bits and bit 255, and sets bit 254.
    pub(crate) fn clamp(self) -> Self {
        let mut s = self.0;
        s[0] &= 248;
        s[31] = (s[31] & 127) | 64;
        Scalar(s)
    }

    /// Multiplies by the cofactor 8 as a plain 256-bit shift, without
    /// reduction.
    ///
    /// Returns `None` when any of the top three bits is set, since the
    /// product would not fit in 32 bytes.
    pub(crate) fn mul_by_cofactor(&self) -> Option<Self> {
        if self.0[31] & 0xe0 != 0 {
            return None;
        }

        let mut out = [0u8; 32];
        let mut top = 0u8;
        for (o, &s) in out.iter_mut().zip(&self.0) {
            *o = (s << 3) | top;
            top = s >> 5;
        }

        Some(Scalar(out))
    }

    /// Computes `1 - self (mod ℓ)`.
    pub(crate) fn complement(&self) -> Self {
        Scalar::ONE - *self
    }

    #[inline]
    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Squares `self` `squarings` times, then multiplies by `x`.
    fn square_multiply(self, squarings: usize, x: Self) -> Self {
        let mut y = self;
        for _ in 0..squarings {
            y = y.square();
        }
        y * x
    }

    /// Computes `self^(ℓ - 2)`, the multiplicative inverse of a nonzero
    /// scalar. Zero maps to zero.
    ///
    /// The addition chain is fixed, so the sequence of squarings and
    /// multiplications does not depend on the scalar.
    pub(crate) fn invert(&self) -> Self {
        let _1 = *self;
        let _10 = _1.square();
        let _11 = _1 * _10;
        let _100 = _1 * _11;
        let _1000 = _100.square();
        let _1010 = _10 * _1000;
        let _1011 = _1 * _1010;
        let _10000 = _1000.square();
        let _10110 = _1011.square();
        let _100000 = _1010 * _10110;
        let _100110 = _10000 * _10110;
        let _1000000 = _100000.square();
        let _1010000 = _10000 * _1000000;
        let _1010011 = _11 * _1010000;
        let _1100011 = _10000 * _1010011;
        let _1100111 = _100 * _1100011;
        let _1101011 = _100 * _1100111;
        let _10010011 = _1000000 * _1010011;
        let _10010111 = _100 * _10010011;
        let _10111101 = _100110 * _10010111;
        let _11010011 = _10110 * _10111101;
        let _11100111 = _1010000 * _10010111;
        let _11101011 = _100 * _11100111;
        let _11110101 = _1010 * _11101011;

        (_1011 * _11110101)
            .square_multiply(126, _1010011)
            .square_multiply(9, _10)
            .square_multiply(0, _11110101)
            .square_multiply(7, _1100111)
            .square_multiply(9, _11110101)
            .square_multiply(11, _10111101)
            .square_multiply(8, _11100111)
            .square_multiply(9, _1101011)
            .square_multiply(6, _1011)
            .square_multiply(14, _10010011)
            .square_multiply(10, _1100011)
            .square_multiply(9, _10010111)
            .square_multiply(10, _11110101)
            .square_multiply(8, _11010011)
            .square_multiply(8, _11101011)
    }

    /// Computes `a * b + c (mod ℓ)`.
    ///
    /// The inputs need not be reduced, which lets signing combine a clamped
    /// secret directly with the challenge and nonce.
    pub(crate) fn from_mul_sum(a: &Scalar, b: &Scalar, c: &Scalar) -> Self {
        let mut wide = ScalarWide::product(a, b);
        for (limb, &ci) in wide.0.iter_mut().zip(&c.0) {
            *limb += i64::from(ci);
        }
        wide.carry();
        wide.reduce()
    }
}

/// `a -= b` over little-endian bytes, with the borrow propagated through the
/// whole of `a`. `b` is implicitly zero-extended.
fn subtract_in_place(a: &mut [u8; 64], b: &[u8; 32]) {
    let mut borrow = 0i32;
    for (i, ai) in a.iter_mut().enumerate() {
        let bi = b.get(i).copied().map_or(0, i32::from);
        let d = i32::from(*ai) - bi - borrow;
        *ai = d as u8;
        borrow = (d >> 8) & 1;
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        let mut wide = [0u8; 64];
        let mut carry = 0u16;
        for i in 0..32 {
            let sum = u16::from(self.0[i]) + u16::from(rhs.0[i]) + carry;
            wide[i] = sum as u8;
            carry = sum >> 8;
        }
        wide[32] = carry as u8;
        Scalar::reduce(&wide)
    }
}

/// `-s (mod ℓ)`, computed as `ℓ·2^256 - s` and reduced.
impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        let mut wide = [0u8; 64];
        wide[32..].copy_from_slice(&L);
        subtract_in_place(&mut wide, &self.0);
        Scalar::reduce(&wide)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        self + (-rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        ScalarWide::product(&self, &rhs).reduce()
    }
}
