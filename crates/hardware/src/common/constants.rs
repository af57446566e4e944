//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the byte-addressable RAM.
//! 2. **Register Constants:** Size of the register file and the reserved stack register.
//! 3. **Stack Constants:** Initial stack pointer value.

/// Number of addressable bytes of RAM.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register reserved by convention as the initial stack-pointer source.
pub const SP_REGISTER: usize = 7;

/// Initial value of `R7`, and therefore of the stack pointer.
///
/// Addresses `0xF4..=0xFF` sit above the stack and are left to the program.
pub const STACK_TOP: u8 = 0xF4;

/// Address at which program images are loaded.
pub const LOAD_ADDRESS: usize = 0;

/// Upper bound on operand bytes fetched per instruction.
pub const MAX_OPERANDS: usize = 2;
