//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, stack pointer, flags, and run state.
//! 2. **Memory:** The 256-byte RAM holding code, data, and the stack.
//! 3. **Output:** The console that receives `PRN` values.
//! 4. **Observability:** Statistics, instruction tracing, and state dumps.

/// Fetch-decode-execute loop and instruction handlers.
pub mod execution;

/// RAM access and stack discipline.
pub mod memory;

use crate::common::constants::{LOAD_ADDRESS, SP_REGISTER};
use crate::common::{Fault, RegisterFile};
use crate::config::Config;
use crate::core::arch::{Flags, RunState};
use crate::isa::disasm::disassemble;
use crate::soc::{Console, Ram};
use crate::stats::SimStats;

pub use execution::Control;

/// Main CPU structure containing all machine state.
///
/// Each `Cpu` is a self-contained machine; any number can exist side by side.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers `R0`-`R7`.
    pub regs: RegisterFile,
    /// Main memory.
    pub ram: Ram,
    /// Program Counter.
    pub pc: usize,
    /// Stack Pointer; addresses the most recently pushed byte.
    pub sp: usize,
    /// Condition flags set by `CMP`.
    pub flags: Flags,
    /// Running or halted.
    pub state: RunState,
    /// Destination of `PRN` output.
    pub console: Box<dyn Console>,
    /// Execution statistics.
    pub stats: SimStats,
    /// Log a trace row before every instruction.
    pub trace: bool,
    /// `RET` post-increments SP after reading the return address.
    pub ret_pops_stack: bool,
}

impl Cpu {
    /// Creates a new CPU with zeroed memory and the given output channel.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration (tracing and semantics switches).
    /// * `console` - Receives every value printed by `PRN`.
    pub fn new(config: &Config, console: Box<dyn Console>) -> Self {
        let regs = RegisterFile::new();
        let sp = regs.as_array()[SP_REGISTER] as usize;

        Self {
            regs,
            ram: Ram::new(),
            pc: 0,
            sp,
            flags: Flags::default(),
            state: RunState::Running,
            console,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            ret_pops_stack: config.machine.ret_pops_stack,
        }
    }

    /// Writes a program image into memory starting at address 0.
    ///
    /// Must be called before execution starts.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] if the image runs past the end of memory.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Fault> {
        tracing::debug!(bytes = program.len(), "loading program image");
        self.ram.load_at(LOAD_ADDRESS, program)
    }

    /// Returns `true` once the machine has stopped.
    pub const fn is_halted(&self) -> bool {
        !self.state.is_running()
    }

    /// Renders the classic one-line trace row for the instruction at PC.
    ///
    /// Layout: `TRACE: PC | OP A B | R0 .. R7 | FL | disassembly`. Bytes past
    /// the end of memory render as `--`.
    pub fn trace_line(&self) -> String {
        let byte = |addr: usize| self.ram.read(addr).ok();
        let hex = |b: Option<u8>| b.map_or_else(|| "--".to_string(), |v| format!("{v:02X}"));

        let (op, a, b) = (byte(self.pc), byte(self.pc + 1), byte(self.pc + 2));
        let regs: Vec<String> = self
            .regs
            .as_array()
            .iter()
            .map(|val| format!("{val:02X}"))
            .collect();
        let mut line = format!(
            "TRACE: {:02X} | {} {} {} | {} | {:03b}",
            self.pc,
            hex(op),
            hex(a),
            hex(b),
            regs.join(" "),
            self.flags.bits()
        );
        if let Some(op) = op {
            line.push_str(" | ");
            line.push_str(&disassemble(op, a.unwrap_or(0), b.unwrap_or(0)));
        }
        line
    }

    /// Returns a multi-line description of the machine state for diagnostics.
    pub fn dump_state(&self) -> String {
        format!(
            "PC = {:#04x}  SP = {:#04x}  FL = {} ({:#010b})  STATE = {}\n{}",
            self.pc,
            self.sp,
            self.flags,
            self.flags.bits(),
            self.state,
            self.regs
        )
    }
}
