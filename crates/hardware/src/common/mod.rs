//! Common utilities and types used throughout the interpreter.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Machine dimensions (memory size, register count, stack top).
//! 2. **Error Handling:** Engine faults and program load errors.
//! 3. **Register Management:** The 8-bit general-purpose register file.

/// Machine-wide constants.
pub mod constants;

/// Fault and load error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP_REGISTER, STACK_TOP};
pub use error::{Fault, FaultKind, LoadError};
pub use reg::RegisterFile;
