//! Arithmetic over Curve25519 in its twisted Edwards form.
//!
//! Layers, leaf first:
//!
//! - `field`: integers modulo `2^255 - 19`
//! - `scalar`: integers modulo the group order ℓ
//! - `group`: Edwards point arithmetic and compression
//! - `ristretto`: the Ristretto255 encoding of the prime-order group
//!
//! Everything here is crate-internal. Byte-level entry points live in
//! [`crate::ops`] and [`crate::signatures`].

pub(crate) mod constants;
pub(crate) mod field;
pub(crate) mod group;
pub(crate) mod ristretto;
pub(crate) mod scalar;
pub(crate) mod table;
