//! ALU comparison.

use crate::core::arch::flags::Flags;

/// Compares two register values as unsigned bytes.
///
/// # Returns
///
/// A flag set with exactly one of Equal, Greater, Less raised.
#[inline]
pub fn compare(a: u8, b: u8) -> Flags {
    Flags::compare(a, b)
}
