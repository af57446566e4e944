//! ALU arithmetic operations.
//!
//! Registers are unsigned bytes; results wrap modulo 256.

/// `(a + b) mod 256`.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// `(a * b) mod 256`.
#[inline]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}
