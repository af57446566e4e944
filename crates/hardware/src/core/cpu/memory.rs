//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and RAM. It performs the following:
//! 1. **Raw Access:** `ram_read`/`ram_write` used by fetch and by the loader.
//! 2. **Stack Discipline:** Pre-decrement push and post-increment pop through `SP`.
//! 3. **Bookkeeping:** Peak stack depth for the statistics report.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::STACK_TOP;

impl Cpu {
    /// Reads a byte of RAM.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] for addresses past the end of memory.
    #[inline]
    pub fn ram_read(&self, address: usize) -> Result<u8, Fault> {
        self.ram.read(address)
    }

    /// Writes a byte of RAM.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] for addresses past the end of memory.
    #[inline]
    pub fn ram_write(&mut self, address: usize, val: u8) -> Result<(), Fault> {
        self.ram.write(address, val)
    }

    /// Pushes a byte: decrements `SP`, then stores at the new `SP`.
    ///
    /// The stack has no lower bound besides address 0; a program whose
    /// stack grows into its own code will overwrite it.
    ///
    /// # Errors
    ///
    /// [`Fault::StackOverflow`] when `SP` is already 0, and
    /// [`Fault::MemoryOutOfBounds`] when `SP` had been popped past the end of memory.
    /// `SP` is left unchanged on error.
    pub fn push(&mut self, val: u8) -> Result<(), Fault> {
        let sp = self
            .sp
            .checked_sub(1)
            .ok_or(Fault::StackOverflow { sp: self.sp })?;
        self.ram.write(sp, val)?;
        self.sp = sp;
        self.stats
            .record_stack_depth((STACK_TOP as usize).saturating_sub(sp));
        Ok(())
    }

    /// Pops a byte: reads at `SP`, then increments `SP`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] when `SP` is past the end of memory.
    pub fn pop(&mut self) -> Result<u8, Fault> {
        let val = self.ram.read(self.sp)?;
        self.sp += 1;
        Ok(val)
    }

    /// Reads the byte at the top of the stack without moving `SP`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] when `SP` is past the end of memory.
    pub fn peek(&self) -> Result<u8, Fault> {
        self.ram.read(self.sp)
    }
}
