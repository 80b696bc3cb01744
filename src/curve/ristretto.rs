//! Ristretto255 encoding over Edwards25519.
//!
//! Ristretto builds a prime-order group out of the cofactor-8 curve by
//! identifying points that differ by a 4-torsion element and giving every
//! class exactly one 32-byte encoding. Points are still computed on as
//! [`GroupElement`]s; only the encoding, decoding and hash-to-group map
//! differ from plain Edwards compression.
//!
//! The identity encodes as 32 zero bytes.

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use super::constants::{
    D, D_MINUS_ONE_SQ, INVSQRT_A_MINUS_D, ONE_MINUS_D_SQ, SQRT_AD_MINUS_ONE, SQRTM1,
};
use super::field::FieldElement;
use super::group::GroupElement;

/// Computes a non-negative square root of `u/v`, or of `i·u/v` when `u/v`
/// is not a square.
///
/// The returned flag is `1` when `u/v` was a square (which includes `u = 0`).
pub(crate) fn sqrt_ratio_m1(u: FieldElement, v: FieldElement) -> (Choice, FieldElement) {
    let v3 = v.square() * v;
    let v7 = v3.square() * v;
    let mut x = (v7 * u).pow22523() * v3 * u;

    let vxx = x.square() * v;
    let has_m_root = (vxx - u).is_zero();
    let has_p_root = (vxx + u).is_zero();
    let has_f_root = (vxx + u * SQRTM1).is_zero();

    let x_sqrtm1 = x * SQRTM1;
    x.conditional_assign(&x_sqrtm1, has_p_root | has_f_root);

    (has_m_root | has_p_root, x.abs())
}

/// Returns true if `s` is a canonical encoding: a field element below `p`,
/// with bit 255 clear and non-negative (even).
pub(crate) fn is_canonical(s: &[u8; 32]) -> bool {
    let mut c = u32::from((s[31] & 0x7f) ^ 0x7f);
    for &b in &s[1..31] {
        c |= u32::from(b ^ 0xff);
    }
    let c = c.wrapping_sub(1) >> 8;
    let d = 0xecu32.wrapping_sub(u32::from(s[0])) >> 8;
    let e = u32::from(s[31] >> 7);

    ((c & d) | e | u32::from(s[0])) & 1 == 0
}

/// Returns true if `s` encodes the identity.
pub(crate) fn is_identity(s: &[u8; 32]) -> bool {
    s.iter().fold(0u8, |acc, &b| acc | b) == 0
}

/// Decodes a Ristretto encoding and negates the resulting point.
pub(crate) fn decode_negate(s: &[u8; 32]) -> Option<GroupElement> {
    decode(s).map(|p| -p)
}

/// Decodes a Ristretto encoding into a representative point.
pub(crate) fn decode(s: &[u8; 32]) -> Option<GroupElement> {
    if !is_canonical(s) {
        return None;
    }

    let s = FieldElement::from_bytes(s);
    let ss = s.square();
    let one = FieldElement::ONE;

    let u1 = one - ss;
    let u2 = one + ss;
    let u2u2 = u2.square();

    // v = -d·u1² - u2²
    let v = -(D * u1.square()) - u2u2;

    let (was_square, inv_sqrt) = sqrt_ratio_m1(one, v * u2u2);

    let den_x = inv_sqrt * u2;
    let den_y = inv_sqrt * den_x * v;

    let x = den_x * s;
    let x = (x + x).abs();
    let y = u1 * den_y;
    let t = x * y;

    let ok = was_square & !t.is_negative() & !y.is_zero();
    if !bool::from(ok) {
        return None;
    }

    Some(GroupElement {
        x,
        y,
        z: one,
        t,
    })
}

/// Encodes the class of `p`.
///
/// Of the representatives of the class, the one that yields a non-negative
/// `s` after an optional rotation by `sqrt(-1)` is chosen, so equal group
/// elements always encode to the same bytes.
pub(crate) fn encode(p: &GroupElement) -> [u8; 32] {
    let GroupElement { x, y, z, t } = *p;

    let u1 = (z + y) * (z - y);
    let u2 = x * y;

    let (_, inv_sqrt) = sqrt_ratio_m1(FieldElement::ONE, u1 * u2.square());
    let den1 = inv_sqrt * u1;
    let den2 = inv_sqrt * u2;
    let z_inv = den1 * den2 * t;

    let ix = x * SQRTM1;
    let iy = y * SQRTM1;
    let enchanted_denominator = den1 * INVSQRT_A_MINUS_D;

    let rotate = (t * z_inv).is_negative();

    let mut x = x;
    let mut y = y;
    let mut den_inv = den2;
    x.conditional_assign(&iy, rotate);
    y.conditional_assign(&ix, rotate);
    den_inv.conditional_assign(&enchanted_denominator, rotate);

    y.conditional_negate((x * z_inv).is_negative());

    (den_inv * (z - y)).abs().to_bytes()
}

/// The Elligator 2 map from a field element onto the curve, in the
/// Ristretto flavor.
pub(crate) fn elligator(t: FieldElement) -> GroupElement {
    let one = FieldElement::ONE;

    let r = SQRTM1 * t.square();
    let u = (r + one) * ONE_MINUS_D_SQ;
    let mut c = FieldElement::ZERO - one;
    let v = (c - r * D) * (r + D);

    let (was_square, mut s) = sqrt_ratio_m1(u, v);
    let not_square = !was_square;

    let s_prime = -(s * t).abs();
    s.conditional_assign(&s_prime, not_square);
    c.conditional_assign(&r, not_square);

    let n = (r - one) * c * D_MINUS_ONE_SQ - v;

    let w0 = (s + s) * v;
    let w1 = n * SQRT_AD_MINUS_ONE;
    let ss = s.square();
    let w2 = one - ss;
    let w3 = one + ss;

    GroupElement {
        x: w0 * w3,
        y: w2 * w1,
        z: w1 * w3,
        t: w0 * w2,
    }
}

/// Maps 64 uniformly random bytes to a point.
///
/// Each half is read as a field element (top bit ignored), sent through
/// [`elligator`], and the two images are added.
pub(crate) fn from_uniform_bytes(h: &[u8; 64]) -> GroupElement {
    let mut r0 = [0u8; 32];
    let mut r1 = [0u8; 32];
    r0.copy_from_slice(&h[..32]);
    r1.copy_from_slice(&h[32..]);

    elligator(FieldElement::from_bytes(&r0)) + elligator(FieldElement::from_bytes(&r1))
}

/// Returns `1` if `a` and `b` encode to the same bytes.
pub(crate) fn ct_eq_encoding(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    a[..].ct_eq(&b[..])
}
