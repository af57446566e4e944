//! Instruction decoding.
//!
//! Maps opcode bytes onto the finite [`Opcode`] enumeration the execution
//! engine dispatches on, and exposes the per-instruction properties the
//! engine and disassembler need.

use std::fmt;

use super::opcodes as op;

/// Every instruction the engine implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `LDI reg, value`
    Ldi,
    /// `PRN reg`
    Prn,
    /// `HLT`
    Hlt,
    /// `ADD regA, regB`
    Add,
    /// `MUL regA, regB`
    Mul,
    /// `CMP regA, regB`
    Cmp,
    /// `PUSH reg`
    Push,
    /// `POP reg`
    Pop,
    /// `CALL reg`
    Call,
    /// `RET`
    Ret,
    /// `JMP reg`
    Jmp,
    /// `JEQ reg`
    Jeq,
    /// `JNE reg`
    Jne,
}

impl Opcode {
    /// All implemented instructions, in opcode-table order.
    pub const ALL: [Self; 13] = [
        Self::Ldi,
        Self::Prn,
        Self::Hlt,
        Self::Add,
        Self::Mul,
        Self::Cmp,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
    ];

    /// Decodes an opcode byte, returning `None` when it has no dispatch entry.
    pub const fn decode(byte: u8) -> Option<Self> {
        Some(match byte {
            op::LDI => Self::Ldi,
            op::PRN => Self::Prn,
            op::HLT => Self::Hlt,
            op::ADD => Self::Add,
            op::MUL => Self::Mul,
            op::CMP => Self::Cmp,
            op::PUSH => Self::Push,
            op::POP => Self::Pop,
            op::CALL => Self::Call,
            op::RET => Self::Ret,
            op::JMP => Self::Jmp,
            op::JEQ => Self::Jeq,
            op::JNE => Self::Jne,
            _ => return None,
        })
    }

    /// Returns the encoded opcode byte.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Ldi => op::LDI,
            Self::Prn => op::PRN,
            Self::Hlt => op::HLT,
            Self::Add => op::ADD,
            Self::Mul => op::MUL,
            Self::Cmp => op::CMP,
            Self::Push => op::PUSH,
            Self::Pop => op::POP,
            Self::Call => op::CALL,
            Self::Ret => op::RET,
            Self::Jmp => op::JMP,
            Self::Jeq => op::JEQ,
            Self::Jne => op::JNE,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Hlt => "HLT",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }

    /// Number of operand bytes following the opcode.
    ///
    /// Stated per instruction rather than read from the `AA` bits of the
    /// encoding; the two agree for every implemented opcode.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Hlt | Self::Ret => 0,
            Self::Prn
            | Self::Push
            | Self::Pop
            | Self::Call
            | Self::Jmp
            | Self::Jeq
            | Self::Jne => 1,
            Self::Ldi | Self::Add | Self::Mul | Self::Cmp => 2,
        }
    }

    /// Returns `true` for instructions routed through the ALU.
    pub const fn is_alu(self) -> bool {
        matches!(self, Self::Add | Self::Mul | Self::Cmp)
    }

    /// Returns `true` for instructions that may write the program counter.
    pub const fn sets_pc(self) -> bool {
        matches!(
            self,
            Self::Call | Self::Ret | Self::Jmp | Self::Jeq | Self::Jne
        )
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::decode(byte).ok_or(byte)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Field extraction from a raw opcode byte.
///
/// These read the `AABCDDDD` layout and work for bytes with no dispatch entry,
/// which lets diagnostics describe unknown instructions.
pub trait OpcodeBits {
    /// Operand count encoded in bits 7-6.
    fn encoded_operand_count(&self) -> usize;

    /// ALU flag (bit 5).
    fn alu_bit(&self) -> bool;

    /// Sets-PC flag (bit 4).
    fn sets_pc_bit(&self) -> bool;
}

impl OpcodeBits for u8 {
    #[inline]
    fn encoded_operand_count(&self) -> usize {
        ((self & op::OPERAND_COUNT_MASK) >> op::OPERAND_COUNT_SHIFT) as usize
    }

    #[inline]
    fn alu_bit(&self) -> bool {
        self & op::ALU_BIT != 0
    }

    #[inline]
    fn sets_pc_bit(&self) -> bool {
        self & op::SETS_PC_BIT != 0
    }
}
