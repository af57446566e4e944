//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU used by `ADD`, `MUL`, and `CMP`. The ALU
//! borrows only the register file and the flags, so it cannot reach memory
//! or the program counter.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul
//! - [`compare`]:    Cmp

/// Wrapping 8-bit arithmetic (add, multiply).
pub mod arithmetic;

/// Unsigned comparison producing condition flags.
pub mod compare;

use crate::common::{Fault, RegisterFile};
use crate::core::arch::flags::Flags;
use crate::isa::Opcode;

/// Arithmetic Logic Unit for register-register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two registers.
    ///
    /// `ADD` and `MUL` write their result to `reg_a`. `CMP` replaces the flags
    /// and leaves the registers untouched.
    ///
    /// # Arguments
    ///
    /// * `op`    - The instruction being executed.
    /// * `reg_a` - Index of the first (and destination) register.
    /// * `reg_b` - Index of the second register.
    /// * `regs`  - The register file.
    /// * `flags` - The condition flags.
    ///
    /// # Errors
    ///
    /// [`Fault::UnsupportedAluOp`] when `op` is not an ALU instruction, checked
    /// before any register is touched, then [`Fault::RegisterOutOfBounds`] for
    /// a bad register index.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::RegisterFile;
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::Alu;
    /// use ls8_core::isa::Opcode;
    ///
    /// let mut regs = RegisterFile::new();
    /// let mut flags = Flags::default();
    /// regs.write(0, 200).unwrap();
    /// regs.write(1, 100).unwrap();
    ///
    /// Alu::execute(Opcode::Add, 0, 1, &mut regs, &mut flags).unwrap();
    /// assert_eq!(regs.read(0).unwrap(), 44); // 300 mod 256
    ///
    /// Alu::execute(Opcode::Cmp, 0, 1, &mut regs, &mut flags).unwrap();
    /// assert!(flags.less);
    /// ```
    pub fn execute(
        op: Opcode,
        reg_a: usize,
        reg_b: usize,
        regs: &mut RegisterFile,
        flags: &mut Flags,
    ) -> Result<(), Fault> {
        if !op.is_alu() {
            return Err(Fault::UnsupportedAluOp(op));
        }
        let a = regs.read(reg_a)?;
        let b = regs.read(reg_b)?;
        match op {
            Opcode::Add => regs.write(reg_a, arithmetic::add(a, b)),
            Opcode::Mul => regs.write(reg_a, arithmetic::mul(a, b)),
            Opcode::Cmp => {
                *flags = compare::compare(a, b);
                Ok(())
            }
            _ => Err(Fault::UnsupportedAluOp(op)),
        }
    }
}
