//! Fault and Load Error definitions.
//!
//! This module defines the error handling for the interpreter. It provides:
//! 1. **Faults:** Conditions that halt the execution engine (bad opcodes, out-of-range accesses,
//!    engine defects).
//! 2. **Classification:** A coarse [`FaultKind`] so callers can tell a bad program from an engine bug.
//! 3. **Load Errors:** Failures raised while turning a program image into bytes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::instruction::Opcode;

/// Conditions that stop the execution engine.
///
/// Every fault is terminal: the CPU transitions to the halted state before the
/// fault is returned, and execution cannot be resumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The byte at the program counter has no dispatch entry.
    #[error("unrecognized opcode {opcode:#010b} ({opcode:#04x}) at address {pc:#04x}")]
    UnrecognizedOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// A RAM access (fetch, load, store, stack) outside `0..MEMORY_SIZE`.
    #[error("memory access out of bounds at address {address:#x}")]
    MemoryOutOfBounds {
        /// The faulting address.
        address: usize,
    },

    /// A register operand outside `0..NUM_REGISTERS`.
    #[error("register index {index} out of bounds")]
    RegisterOutOfBounds {
        /// The faulting register index.
        index: usize,
    },

    /// A push or call with the stack pointer already at address 0.
    #[error("stack overflow: cannot push below address 0 (sp = {sp:#04x})")]
    StackOverflow {
        /// Stack pointer at the time of the push.
        sp: usize,
    },

    /// The ALU was handed an instruction it does not implement.
    ///
    /// This is a defect in the engine's dispatch, never in a loaded program.
    #[error("internal error: unsupported ALU operation {0:?}")]
    UnsupportedAluOp(Opcode),
}

/// Coarse classification of a [`Fault`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Fetched opcode has no dispatch entry.
    UnrecognizedOpcode,
    /// Memory, register, or stack access outside its valid range.
    OutOfBounds,
    /// ALU invoked with an operation it does not implement.
    AluOperationUnsupported,
}

impl Fault {
    /// Returns the category this fault belongs to.
    pub const fn kind(&self) -> FaultKind {
        match self {
            Self::UnrecognizedOpcode { .. } => FaultKind::UnrecognizedOpcode,
            Self::MemoryOutOfBounds { .. }
            | Self::RegisterOutOfBounds { .. }
            | Self::StackOverflow { .. } => FaultKind::OutOfBounds,
            Self::UnsupportedAluOp(_) => FaultKind::AluOperationUnsupported,
        }
    }

    /// Returns `true` if the fault points at a bug in the engine rather than in the program.
    pub const fn is_engine_defect(&self) -> bool {
        matches!(self.kind(), FaultKind::AluOperationUnsupported)
    }
}

/// Errors raised while reading or parsing a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line did not hold a valid 8-bit binary literal (strict loading only).
    #[error("line {line}: malformed program line '{text}'")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The line content after comment stripping.
        text: String,
    },
}
