//! Core processor implementation.
//!
//! This module contains the CPU and everything it executes with: the
//! architectural state that is not plain storage, the ALU, and the
//! fetch-decode-execute loop that coordinates them.

/// Architectural state (condition flags, run state).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
