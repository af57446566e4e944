//! LS-8 interpreter library.
//!
//! This crate implements a fetch-decode-execute interpreter for the LS-8, an 8-bit
//! teaching computer, with the following:
//! 1. **Core:** 8 registers, condition flags, stack pointer, ALU, and the execution loop.
//! 2. **Memory:** 256 bytes of RAM shared by code, data, and a downward-growing stack.
//! 3. **ISA:** Opcode table, decoding, and disassembly for the LS-8 instruction subset.
//! 4. **Simulation:** Program-image loader, configuration, and statistics collection.
//!
//! ```
//! use ls8_core::Simulator;
//! use ls8_core::config::Config;
//! use ls8_core::soc::CaptureConsole;
//!
//! let out = CaptureConsole::new();
//! let mut sim = Simulator::new(Config::default(), Box::new(out.clone()));
//! sim.load_bytes(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
//! sim.run().unwrap();
//! assert_eq!(out.values(), vec![8]);
//! ```

/// Common types and constants (registers, errors, machine dimensions).
pub mod common;
/// Interpreter configuration (loader policy, tracing, semantics switches).
pub mod config;
/// CPU core (flags, run state, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator wrapper.
pub mod sim;
/// Memory and output channel.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, flags, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
