//! LS-8 Opcode Bytes.
//!
//! Every instruction is identified by the byte at the program counter. The
//! values follow the LS-8 layout `AABCDDDD`: `AA` operand count, `B` ALU flag,
//! `C` sets-PC flag, `DDDD` instruction identifier.

/// Load immediate into register (`LDI reg, value`).
pub const LDI: u8 = 0b1000_0010;

/// Print register as an unsigned decimal (`PRN reg`).
pub const PRN: u8 = 0b0100_0111;

/// Halt the machine (`HLT`).
pub const HLT: u8 = 0b0000_0001;

/// Add two registers, storing into the first (`ADD regA, regB`).
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers, storing into the first (`MUL regA, regB`).
pub const MUL: u8 = 0b1010_0010;

/// Compare two registers and set the flags (`CMP regA, regB`).
pub const CMP: u8 = 0b1010_0111;

/// Push a register onto the stack (`PUSH reg`).
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register (`POP reg`).
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register (`CALL reg`).
pub const CALL: u8 = 0b0101_0000;

/// Return from a subroutine (`RET`).
pub const RET: u8 = 0b0001_0001;

/// Jump to the address in a register (`JMP reg`).
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set (`JEQ reg`).
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear (`JNE reg`).
pub const JNE: u8 = 0b0101_0110;

/// Bit mask for the operand-count field (bits 7-6).
pub const OPERAND_COUNT_MASK: u8 = 0b1100_0000;

/// Bit position of the operand-count field.
pub const OPERAND_COUNT_SHIFT: u32 = 6;

/// Bit marking ALU instructions.
pub const ALU_BIT: u8 = 0b0010_0000;

/// Bit marking instructions that set the program counter.
pub const SETS_PC_BIT: u8 = 0b0001_0000;
