//! # bifact-poly
//!
//! Bit-packed polynomial arithmetic over GF(2).
//!
//! This crate provides:
//! - [`Gf2Poly`]: an arbitrary-degree element of GF(2)[x] stored as
//!   little-endian machine-word limbs
//! - Ring operations: XOR addition, carry-less multiplication, long
//!   division with remainder, gcd
//! - Characteristic-2 helpers: formal derivative, square root (inverse
//!   Frobenius), modular squaring
//! - Byte and word marshalling with a fixed least-significant-byte-first
//!   bit order
//!
//! Coefficient `i` of a polynomial is bit `i % 64` of limb `i / 64`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arith;
mod bytes;
mod poly;

#[cfg(test)]
mod proptests;

pub use poly::{Gf2Poly, ParsePolyError};

/// Error returned when an exact division is requested but the divisor
/// leaves a nonzero remainder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("exact division left a nonzero remainder")]
pub struct ExactDivisionError;
