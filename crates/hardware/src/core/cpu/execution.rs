//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and the two bytes after it as candidate operands.
//! 2. **Decode:** Maps the opcode onto [`Opcode`]; bytes with no entry halt the machine.
//! 3. **Execute:** Runs the handler, which reports how far to advance PC and whether to continue.
//! 4. **Observability:** Emits trace rows and keeps the statistics current.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::MAX_OPERANDS;
use crate::core::arch::RunState;
use crate::core::units::alu::Alu;
use crate::isa::Opcode;

/// What a handler tells the loop to do next.
///
/// A handler that wrote PC itself reports an advance of 0; every other
/// handler reports `1 + operand_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
    /// Bytes to add to PC after the instruction.
    pub advance: usize,
    /// `false` stops the machine.
    pub keep_running: bool,
}

impl Control {
    /// Falls through to the next instruction in memory.
    pub const fn sequential(op: Opcode) -> Self {
        Self {
            advance: 1 + op.operand_count(),
            keep_running: true,
        }
    }

    /// PC was already redirected by the handler.
    pub const fn jumped() -> Self {
        Self {
            advance: 0,
            keep_running: true,
        }
    }

    /// Stops the machine.
    pub const fn halt() -> Self {
        Self {
            advance: 0,
            keep_running: false,
        }
    }
}

impl Cpu {
    /// Runs until `HLT` or a fault.
    ///
    /// The statistics timer restarts here, so the reported rate covers execution only.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] that stopped the machine. The CPU is halted either way.
    pub fn run(&mut self) -> Result<(), Fault> {
        if !self.is_halted() {
            self.stats.start_clock();
        }
        while self.step()?.is_running() {}
        tracing::debug!(
            pc = self.pc,
            retired = self.stats.instructions_retired,
            "machine halted"
        );
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// Does nothing once the machine is halted.
    ///
    /// # Returns
    ///
    /// The run state after the instruction.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised by fetch, decode, or the handler. The CPU
    /// moves to [`RunState::Halted`] before the fault is returned.
    pub fn step(&mut self) -> Result<RunState, Fault> {
        if self.is_halted() {
            return Ok(RunState::Halted);
        }

        match self.fetch_and_execute() {
            Ok(control) if control.keep_running => {
                self.pc += control.advance;
            }
            Ok(_) => self.state = RunState::Halted,
            Err(fault) => {
                self.state = RunState::Halted;
                tracing::error!(pc = self.pc, %fault, "machine halted on fault");
                return Err(fault);
            }
        }
        Ok(self.state)
    }

    /// Fetches, decodes, and executes the instruction at PC.
    fn fetch_and_execute(&mut self) -> Result<Control, Fault> {
        let pc = self.pc;
        let opcode = self.ram_read(pc)?;
        let mut operands = [0; MAX_OPERANDS];
        for (i, slot) in operands.iter_mut().enumerate() {
            *slot = self.ram_read(pc + 1 + i)?;
        }
        let [a, b] = operands;

        if self.trace {
            tracing::info!(target: "ls8::trace", "{}", self.trace_line());
        }

        let op = Opcode::decode(opcode).ok_or(Fault::UnrecognizedOpcode { opcode, pc })?;
        let control = self.execute(op, a, b)?;
        debug_assert!(
            control.advance == 0 || control.advance == 1 + op.operand_count(),
            "{op} reported advance {}",
            control.advance
        );
        self.stats.record(op);
        Ok(control)
    }

    /// Executes one decoded instruction against the machine state.
    ///
    /// Both operand bytes are always supplied; instructions with fewer
    /// operands ignore the rest.
    ///
    /// # Arguments
    ///
    /// * `op` - The decoded instruction.
    /// * `a` - First operand byte (register index for every instruction that takes one).
    /// * `b` - Second operand byte (immediate for `LDI`, register index for ALU ops).
    ///
    /// # Returns
    ///
    /// How far to advance PC and whether to keep running.
    ///
    /// # Errors
    ///
    /// Any out-of-bounds register, memory, or stack access.
    pub fn execute(&mut self, op: Opcode, a: u8, b: u8) -> Result<Control, Fault> {
        let (reg_a, reg_b) = (a as usize, b as usize);

        match op {
            Opcode::Ldi => self.regs.write(reg_a, b)?,
            Opcode::Prn => {
                let val = self.regs.read(reg_a)?;
                self.console.emit(val);
                self.stats.values_emitted += 1;
            }
            Opcode::Hlt => return Ok(Control::halt()),
            Opcode::Add | Opcode::Mul | Opcode::Cmp => {
                Alu::execute(op, reg_a, reg_b, &mut self.regs, &mut self.flags)?;
            }
            Opcode::Push => {
                let val = self.regs.read(reg_a)?;
                self.push(val)?;
            }
            Opcode::Pop => {
                let val = self.pop()?;
                self.regs.write(reg_a, val)?;
            }
            Opcode::Call => {
                let target = self.regs.read(reg_a)?;
                let ret = self.pc + 1 + op.operand_count();
                let ret =
                    u8::try_from(ret).map_err(|_| Fault::MemoryOutOfBounds { address: ret })?;
                self.push(ret)?;
                self.pc = target as usize;
                return Ok(Control::jumped());
            }
            Opcode::Ret => {
                let target = if self.ret_pops_stack {
                    self.pop()?
                } else {
                    self.peek()?
                };
                self.pc = target as usize;
                return Ok(Control::jumped());
            }
            Opcode::Jmp => {
                self.pc = self.regs.read(reg_a)? as usize;
                return Ok(Control::jumped());
            }
            Opcode::Jeq | Opcode::Jne => {
                let taken = self.flags.equal == (op == Opcode::Jeq);
                self.stats.record_branch(taken);
                // The target register is only read when the jump is taken.
                if taken {
                    self.pc = self.regs.read(reg_a)? as usize;
                    return Ok(Control::jumped());
                }
            }
        }
        Ok(Control::sequential(op))
    }
}
