//! Condition Flags.
//!
//! This module implements the `FL` register. It performs the following:
//! 1. **Storage:** Equal, Greater, and Less condition bits.
//! 2. **Comparison:** Building a flag set from two unsigned register values.
//! 3. **Packing:** Rendering the flags in the `00000LGE` register layout for traces.

use std::cmp::Ordering;
use std::fmt;

/// Mask of the Equal flag in the packed layout.
pub const FLAG_EQUAL: u8 = 0b0000_0001;
/// Mask of the Greater flag in the packed layout.
pub const FLAG_GREATER: u8 = 0b0000_0010;
/// Mask of the Less flag in the packed layout.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Condition bits set by `CMP` and read by the conditional jumps.
///
/// All three start clear. After any comparison exactly one is set; they then
/// persist until the next comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// `regA == regB`.
    pub equal: bool,
    /// `regA > regB`.
    pub greater: bool,
    /// `regA < regB`.
    pub less: bool,
}

impl Flags {
    /// Builds the flag set for comparing `a` against `b` as unsigned bytes.
    pub fn compare(a: u8, b: u8) -> Self {
        let ord = a.cmp(&b);
        Self {
            equal: ord == Ordering::Equal,
            greater: ord == Ordering::Greater,
            less: ord == Ordering::Less,
        }
    }

    /// Packs the flags as `00000LGE`.
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.equal {
            bits |= FLAG_EQUAL;
        }
        if self.greater {
            bits |= FLAG_GREATER;
        }
        if self.less {
            bits |= FLAG_LESS;
        }
        bits
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            mark(self.less, 'L'),
            mark(self.greater, 'G'),
            mark(self.equal, 'E')
        )
    }
}
