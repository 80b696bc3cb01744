//! Edwards25519 group arithmetic.
//!
//! Points live on the twisted Edwards curve
//!
//! ```text
//! -x² + y² = 1 + d·x²·y²
//! ```
//!
//! and are kept in extended coordinates `(X : Y : Z : T)` with `x = X/Z`,
//! `y = Y/Z` and `x·y = T/Z`. Addition and doubling use the complete
//! formulas for `a = -1`, so neither has exceptional cases and neither
//! branches.
//!
//! Two scalar multiplications are provided:
//!
//! - [`GroupElement::scalar_mul`] for arbitrary points, with a 4-bit fixed
//!   window over a 16-entry table built per call;
//! - [`GroupElement::base_mul`] for the base point, with one conditional
//!   addition per scalar bit from the static [`BASE_MULTIPLES`] table.
//!
//! Both select table entries with constant-time masking.

use std::ops::{Add, Neg, Sub};

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use super::constants::{D, D2, SQRTM1};
use super::field::FieldElement;
use super::scalar::{L, Scalar};
use super::table::BASE_MULTIPLES;

/// A point in extended twisted Edwards coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GroupElement {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GroupElement {
    /// The neutral element `(0, 1)`.
    pub(crate) const IDENTITY: Self = GroupElement {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Computes `2·self`.
    pub(crate) fn double(&self) -> Self {
        let xx = self.x.square();
        let yy = self.y.square();
        let e = (self.x + self.y).square();

        let sum = yy + xx;
        let diff = yy - xx;
        let cross = e - sum;
        let zz2 = self.z.double_square() - diff;

        // Every coordinate comes out negated, which is the same projective point
        GroupElement {
            x: cross * zz2,
            y: sum * diff,
            z: diff * zz2,
            t: cross * sum,
        }
    }

    /// Computes `8·self`, mapping any point into the prime-order subgroup.
    pub(crate) fn clear_cofactor(&self) -> Self {
        self.double().double().double()
    }

    /// Returns `1` if this is the neutral element.
    pub(crate) fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&self.z)
    }

    /// Returns true if the point lies in the torsion subgroup, i.e.
    /// `8·self` is the neutral element.
    pub(crate) fn has_low_order(&self) -> bool {
        bool::from(self.clear_cofactor().is_identity())
    }

    /// Returns true if `ℓ·self` is the neutral element.
    pub(crate) fn is_torsion_free(&self) -> bool {
        bool::from(self.scalar_mul(&Scalar(L)).is_identity())
    }

    /// Encodes the point as its affine `y` with the sign of `x` in bit 255.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let z_inv = self.z.invert();
        let x = self.x * z_inv;
        let y = self.y * z_inv;

        let mut out = y.to_bytes();
        out[31] ^= x.is_negative().unwrap_u8() << 7;
        out
    }

    /// Decodes a compressed point.
    ///
    /// Returns `None` if `y` has no matching `x` on the curve, or if the
    /// encoding asks for a negative zero `x`. The `y` coordinate is taken
    /// modulo `p`; use [`is_canonical_encoding`] to reject aliases.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::decompress(bytes, false)
    }

    /// Decodes a compressed point and negates it.
    pub(crate) fn from_bytes_negate(bytes: &[u8; 32]) -> Option<Self> {
        Self::decompress(bytes, true)
    }

    // Point decompression operates only on public data, so bailing out early
    // on failure leaks nothing.
    fn decompress(bytes: &[u8; 32], negate: bool) -> Option<Self> {
        let y = FieldElement::from_bytes(bytes);
        let z = FieldElement::ONE;

        // u = y² - 1, v = d·y² + 1
        let yy = y.square();
        let u = yy - z;
        let v = yy * D + z;

        // x = u·v³·(u·v⁷)^((p-5)/8)
        let v2 = v.square();
        let v4 = v2.square();
        let v7 = v4 * v2 * v;
        let mut x = (v7 * u).pow22523() * u * v2 * v;

        let check = x.square() * v;
        let sqrt_m1 = x * SQRTM1;
        x.conditional_assign(&sqrt_m1, !check.ct_eq(&u));

        if !bool::from((x.square() * v).ct_eq(&u)) {
            return None;
        }

        let sign = Choice::from(bytes[31] >> 7);
        if bool::from(x.is_zero() & sign) {
            return None;
        }

        // Pick the root whose sign matches the encoding, or the opposite one
        // when the negated point is requested
        let flip = x.is_negative() ^ sign ^ Choice::from(u8::from(negate));
        x.conditional_negate(flip);

        Some(GroupElement { x, y, z, t: x * y })
    }

    /// Computes `s·self` with a constant-time 4-bit fixed window.
    ///
    /// All 256 bits of `s` are processed, so non-reduced scalars are
    /// multiplied as plain integers.
    pub(crate) fn scalar_mul(&self, s: &Scalar) -> Self {
        let mut table = [GroupElement::IDENTITY; 16];
        table[1] = *self;
        for i in 2..16 {
            table[i] = table[i - 1] + *self;
        }

        let mut p = GroupElement::IDENTITY;

        for i in (0..=252).rev().step_by(4) {
            let nibble = (s.0[i >> 3] >> (i & 7)) & 0x0f;

            p = p.double().double().double().double();

            let mut t = table[0];
            for (j, entry) in table.iter().enumerate().skip(1) {
                t.conditional_assign(entry, nibble.ct_eq(&(j as u8)));
            }

            p = p + t;
        }

        p
    }

    /// Computes `s·B` for the standard base point `B`.
    ///
    /// Entry `i` of the base table is added under bit `i` of `s`; the sum is
    /// always computed and kept or discarded with a constant-time select.
    pub(crate) fn base_mul(s: &Scalar) -> Self {
        let mut p = GroupElement::IDENTITY;

        for (i, multiple) in BASE_MULTIPLES.iter().enumerate() {
            let bit = (s.0[i >> 3] >> (i & 7)) & 1;
            let q = GroupElement {
                x: multiple.x,
                y: multiple.y,
                z: FieldElement::ONE,
                t: multiple.t,
            };

            let sum = p + q;
            p.conditional_assign(&sum, Choice::from(bit));
        }

        p
    }
}

impl ConditionallySelectable for GroupElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        GroupElement {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl Add for GroupElement {
    type Output = GroupElement;

    fn add(self, q: GroupElement) -> GroupElement {
        let a = (self.y - self.x) * (q.y - q.x);
        let b = (self.y + self.x) * (q.y + q.x);
        let c = self.t * q.t * D2;
        let d = self.z * q.z;
        let d = d + d;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        GroupElement {
            x: e * f,
            y: h * g,
            z: g * f,
            t: e * h,
        }
    }
}

impl Neg for GroupElement {
    type Output = GroupElement;

    fn neg(self) -> GroupElement {
        GroupElement {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }
}

impl Sub for GroupElement {
    type Output = GroupElement;

    fn sub(self, q: GroupElement) -> GroupElement {
        self + (-q)
    }
}

/// Returns true if the encoding is the neutral element `(0, 1)`, with the
/// sign bit ignored.
pub(crate) fn is_identity_encoding(s: &[u8; 32]) -> bool {
    let mut c = s[0] ^ 0x01;
    for &b in &s[1..31] {
        c |= b;
    }
    c |= s[31] & 0x7f;
    c == 0
}

/// Returns true if the `y` coordinate of the encoding, ignoring the sign
/// bit, is below `p`.
pub(crate) fn is_canonical_encoding(s: &[u8; 32]) -> bool {
    // c == 0 iff bytes 1..=31 are all at their maximum under p
    let mut c = u32::from((s[31] & 0x7f) ^ 0x7f);
    for &b in &s[1..31] {
        c |= u32::from(b ^ 0xff);
    }
    let top_saturated = c.wrapping_sub(1) >> 8;
    let low_too_big = 0xecu32.wrapping_sub(u32::from(s[0])) >> 8;

    top_saturated & low_too_big & 1 == 0
}
