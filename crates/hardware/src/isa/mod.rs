//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, decoding into the [`instruction::Opcode`]
//! enumeration, and the disassembler used by tracing.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode enumeration and raw-byte field extraction.
pub mod instruction;

/// Opcode byte constants.
pub mod opcodes;

pub use instruction::Opcode;
