//! Finite field arithmetic for Edwards25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! used by the Edwards25519 group and the Ristretto255 encoding.
//!
//! ## Representation
//!
//! Field elements are represented as 16 signed 64-bit limbs in radix 2¹⁶:
//!
//! ```text
//! x = Σ limb[i] · 2^(16·i),  i = 0..15
//! ```
//!
//! The generous headroom of an `i64` per 16-bit limb means additions and
//! subtractions never need an immediate carry, and a full schoolbook product
//! of two carried elements fits without overflow.
//!
//! ## Reduction
//!
//! A product spans 31 limbs. Since `2²⁵⁶ ≡ 38 (mod p)`, limb `16 + i` folds
//! into limb `i` with weight 38; two carry passes then bring every limb back
//! into 16 bits, with the carry out of limb 15 wrapping into limb 0 with the
//! same weight.
//!
//! ## Notes
//!
//! Every operation here runs in constant time. Selection and negation are
//! expressed through `subtle`, so callers never branch on a limb value.

use std::array;
use std::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

/// Field element modulo `2^255 - 19`, in 16 signed limbs of radix `2^16`.
///
/// Values produced by `+` and `-` are left unreduced. Multiplication and
/// squaring return carried limbs. The canonical form only exists in the
/// 32-byte encoding produced by [`FieldElement::to_bytes`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldElement(pub(crate) [i64; 16]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0; 16]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Propagates carries so that every limb fits in 16 bits again.
    ///
    /// The carry out of limb 15 represents a multiple of `2^256`, which is
    /// folded back into limb 0 multiplied by 38.
    fn carry(&mut self) {
        let o = &mut self.0;

        for i in 0..15 {
            o[i] += 1 << 16;
            let c = o[i] >> 16;
            o[i + 1] += c - 1;
            o[i] -= c << 16;
        }

        o[15] += 1 << 16;
        let c = o[15] >> 16;
        o[0] += 38 * (c - 1);
        o[15] -= c << 16;
    }

    /// Folds a 31-limb product into 16 limbs and carries twice.
    fn reduce(product: [i64; 32]) -> Self {
        let mut o = FieldElement(array::from_fn(|i| {
            if i < 15 {
                product[i] + 38 * product[i + 16]
            } else {
                product[i]
            }
        }));

        o.carry();
        o.carry();
        o
    }

    /// Decodes a 32-byte little-endian encoding.
    ///
    /// The top bit is ignored, and values in `[p, 2^255)` are accepted and
    /// treated modulo `p`. Callers that need canonical input check it on the
    /// encoding first.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut o = FieldElement(array::from_fn(|i| {
            i64::from(bytes[2 * i]) | (i64::from(bytes[2 * i + 1]) << 8)
        }));
        o.0[15] &= 0x7fff;
        o
    }

    /// Encodes this element into its canonical 32-byte little-endian form.
    ///
    /// After three carry passes the value lies in `[0, 2p)`. Two rounds of
    /// trial subtraction of `p`, each kept or discarded with a constant-time
    /// select on the final borrow, leave the unique representative in
    /// `[0, p)`.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut t = self;
        t.carry();
        t.carry();
        t.carry();

        for _ in 0..2 {
            let mut m = [0i64; 16];

            m[0] = t.0[0] - 0xffed;
            for i in 1..15 {
                m[i] = t.0[i] - 0xffff - ((m[i - 1] >> 16) & 1);
                m[i - 1] &= 0xffff;
            }
            m[15] = t.0[15] - 0x7fff - ((m[14] >> 16) & 1);
            m[14] &= 0xffff;

            // A borrow out of the top limb means t < p: keep t
            let borrow = ((m[15] >> 16) & 1) as u8;
            t.conditional_assign(&FieldElement(m), Choice::from(1 - borrow));
        }

        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(2).zip(t.0) {
            chunk[0] = limb as u8;
            chunk[1] = (limb >> 8) as u8;
        }
        out
    }

    /// Returns `1` if this element is zero.
    ///
    /// All 32 bytes of the canonical encoding are compared, without early
    /// exit.
    pub(crate) fn is_zero(&self) -> Choice {
        self.to_bytes()[..].ct_eq(&[0u8; 32][..])
    }

    /// Returns `1` if this element is negative.
    ///
    /// An element is negative when the least significant bit of its canonical
    /// encoding is set.
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Returns `|self|`: the element or its negation, whichever is
    /// non-negative.
    pub(crate) fn abs(self) -> Self {
        let mut r = self;
        r.conditional_negate(self.is_negative());
        r
    }

    /// Computes `self²`.
    #[inline]
    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Computes `2·self²`.
    pub(crate) fn double_square(self) -> Self {
        let a = self.0;
        let mut t = [0i64; 32];

        for i in 0..16 {
            for j in 0..16 {
                t[i + j] += 2 * a[i] * a[j];
            }
        }

        Self::reduce(t)
    }

    /// Computes the multiplicative inverse `self^(p-2)`.
    ///
    /// The exponent `p - 2 = 2^255 - 21` has every bit set except bits 2 and
    /// 4, so the square-and-multiply walk over its bits follows a fixed
    /// pattern. Zero maps to zero.
    pub(crate) fn invert(self) -> Self {
        let mut c = self;

        for a in (0..=253).rev() {
            c = c.square();
            if a != 2 && a != 4 {
                c = c * self;
            }
        }

        c
    }

    /// Computes `self^((p-5)/8) = self^(2^252 - 3)`.
    ///
    /// Used for square roots: every bit of the exponent is set except bit 1.
    pub(crate) fn pow22523(self) -> Self {
        let mut c = self;

        for a in (0..=250).rev() {
            c = c.square();
            if a != 1 {
                c = c * self;
            }
        }

        c
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(array::from_fn(|i| {
            i64::conditional_select(&a.0[i], &b.0[i], choice)
        }))
    }
}

impl ConstantTimeEq for FieldElement {
    /// Two elements are equal when their canonical encodings are.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

/// Limb-wise addition, without carrying.
impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

/// Limb-wise subtraction, without carrying. Limbs may go negative.
impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

/// Schoolbook multiplication followed by reduction.
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut t = [0i64; 32];

        for i in 0..16 {
            for j in 0..16 {
                t[i + j] += self.0[i] * rhs.0[j];
            }
        }

        Self::reduce(t)
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement(self.0.map(|x| -x))
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        -*self
    }
}
