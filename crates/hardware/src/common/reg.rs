//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 8-bit general-purpose
//! registers. It provides:
//! 1. **Storage:** `R0`-`R7`, each an unsigned byte.
//! 2. **Checked Access:** Reads and writes reject indices outside the file with a [`Fault`].
//! 3. **Observability:** A `Display` implementation used by state dumps and traces.

use std::fmt;

use super::constants::{NUM_REGISTERS, SP_REGISTER, STACK_TOP};
use super::error::Fault;

/// The eight general-purpose registers.
///
/// `R7` starts at [`STACK_TOP`] and seeds the stack pointer; nothing stops a
/// program from overwriting it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register zero except `R7`.
    pub const fn new() -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP_REGISTER] = STACK_TOP;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfBounds`] if `idx >= NUM_REGISTERS`.
    pub fn read(&self, idx: usize) -> Result<u8, Fault> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Fault::RegisterOutOfBounds { index: idx })
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfBounds`] if `idx >= NUM_REGISTERS`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Fault> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(Fault::RegisterOutOfBounds { index: idx })?;
        *slot = val;
        Ok(())
    }

    /// Returns all register values in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "R{i}={val:02X}")?;
        }
        Ok(())
    }
}
