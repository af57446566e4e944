//! Main Memory.
//!
//! This module provides the 256-byte RAM shared by program code, data, and the
//! stack. It provides:
//! 1. **Storage:** A zero-initialized byte array allocated once per machine.
//! 2. **Checked Access:** Reads and writes reject addresses outside the array with a [`Fault`].
//! 3. **Bulk Loading:** Copying a program image in at a base address.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::Fault;

/// Byte-addressable RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    bytes: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates a zero-filled RAM.
    pub const fn new() -> Self {
        Self {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] if `address >= MEMORY_SIZE`.
    #[inline]
    pub fn read(&self, address: usize) -> Result<u8, Fault> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Fault::MemoryOutOfBounds { address })
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] if `address >= MEMORY_SIZE`.
    #[inline]
    pub fn write(&mut self, address: usize, val: u8) -> Result<(), Fault> {
        let cell = self
            .bytes
            .get_mut(address)
            .ok_or(Fault::MemoryOutOfBounds { address })?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into RAM starting at `base`.
    ///
    /// Bytes are written in order; the first one that lands past the end of
    /// memory stops the copy with a fault, leaving the earlier bytes in place.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] for the first address that does not fit.
    pub fn load_at(&mut self, base: usize, data: &[u8]) -> Result<(), Fault> {
        for (offset, byte) in data.iter().enumerate() {
            self.write(base + offset, *byte)?;
        }
        Ok(())
    }

    /// Returns the whole memory as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}
