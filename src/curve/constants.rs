//! Curve and field constants in 16-bit limb form.

use super::field::FieldElement;

/// Edwards curve constant `d = -121665/121666`.
pub(crate) const D: FieldElement = FieldElement([
    0x78a3, 0x1359, 0x4dca, 0x75eb, 0xd8ab, 0x4141, 0x0a4d, 0x0070,
    0xe898, 0x7779, 0x4079, 0x8cc7, 0xfe73, 0x2b6f, 0x6cee, 0x5203,
]);

/// `2d`, used by point addition.
pub(crate) const D2: FieldElement = FieldElement([
    0xf159, 0x26b2, 0x9b94, 0xebd6, 0xb156, 0x8283, 0x149a, 0x00e0,
    0xd130, 0xeef3, 0x80f2, 0x198e, 0xfce7, 0x56df, 0xd9dc, 0x2406,
]);

/// A square root of -1.
pub(crate) const SQRTM1: FieldElement = FieldElement([
    0xa0b0, 0x4a0e, 0x1b27, 0xc4ee, 0xe478, 0xad2f, 0x1806, 0x2f43,
    0xd7a7, 0x3dfb, 0x0099, 0x2b4d, 0xdf0b, 0x4fc1, 0x2480, 0x2b83,
]);

/// `sqrt(a*d - 1)` with `a = -1`.
pub(crate) const SQRT_AD_MINUS_ONE: FieldElement = FieldElement([
    0x2e1b, 0x497b, 0xf6a0, 0x7e97, 0x54bd, 0x1b78, 0x8e0c, 0xaf9d,
    0xd1fd, 0x31f5, 0xfcc9, 0x0f3c, 0x48ac, 0x2b83, 0x31bf, 0x3769,
]);

/// `1/sqrt(a - d)`.
pub(crate) const INVSQRT_A_MINUS_D: FieldElement = FieldElement([
    0x40ea, 0x805d, 0xfdaa, 0x99c8, 0x72be, 0x5a41, 0x1617, 0x9d2f,
    0xd840, 0xfe01, 0x7b91, 0x16c2, 0xfca2, 0xcfaf, 0x8905, 0x786c,
]);

/// `1 - d^2`.
pub(crate) const ONE_MINUS_D_SQ: FieldElement = FieldElement([
    0xc176, 0x945f, 0x09c1, 0xe27c, 0x350f, 0xcd5e, 0xa138, 0x2c81,
    0xdfe4, 0xbe70, 0xabdd, 0x9994, 0xe0d7, 0xb2b3, 0x72a8, 0x0290,
]);

/// `(d - 1)^2`.
pub(crate) const D_MINUS_ONE_SQ: FieldElement = FieldElement([
    0x4d20, 0x44ed, 0x5aaa, 0x31ad, 0x1999, 0xb01e, 0x4a2c, 0xd29e,
    0x4eeb, 0x529b, 0xd32f, 0x4cdc, 0x2241, 0xf66c, 0xb37a, 0x5968,
]);
