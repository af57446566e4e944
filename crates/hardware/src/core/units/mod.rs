//! Execution units.
//!
//! The LS-8 has a single functional unit besides the control logic in
//! [`crate::core::cpu`]: the ALU.

/// Arithmetic Logic Unit (ADD, MUL, CMP).
pub mod alu;
