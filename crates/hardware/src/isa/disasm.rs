//! Instruction Disassembler for LS-8.
//!
//! Converts an opcode byte and its candidate operand bytes into a
//! human-readable line for debug tracing, diagnostics, and test output.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(0b0100_0111, 0, 0), "PRN R0");
//! assert_eq!(disassemble(0b0000_0001, 0, 0), "HLT");
//! ```

use super::instruction::{Opcode, OpcodeBits};

/// Disassembles one instruction.
///
/// Operand bytes beyond the instruction's operand count are ignored. Bytes
/// with no dispatch entry render as `???` followed by the raw opcode and as
/// many operand bytes as its `AA` field claims.
///
/// # Arguments
///
/// * `opcode` - The byte at the program counter.
/// * `a` - The byte at `pc + 1`.
/// * `b` - The byte at `pc + 2`.
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(op) = Opcode::decode(opcode) else {
        return match opcode.encoded_operand_count() {
            0 => format!("??? {opcode:#010b}"),
            1 => format!("??? {opcode:#010b} {a:#04x}"),
            _ => format!("??? {opcode:#010b} {a:#04x} {b:#04x}"),
        };
    };

    let m = op.mnemonic();
    match op {
        Opcode::Hlt | Opcode::Ret => m.to_string(),
        Opcode::Ldi => format!("{m} R{a}, {b}"),
        Opcode::Add | Opcode::Mul | Opcode::Cmp => format!("{m} R{a}, R{b}"),
        Opcode::Prn
        | Opcode::Push
        | Opcode::Pop
        | Opcode::Call
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne => format!("{m} R{a}"),
    }
}

/// Disassembles a whole program image, one line per instruction.
///
/// Walks the image from address 0, stepping by each instruction's length.
/// Unknown opcodes step by the length their `AA` field implies so the listing
/// stays aligned with what an assembler would have produced.
pub fn disassemble_program(image: &[u8]) -> Vec<(usize, String)> {
    let mut listing = Vec::new();
    let mut pc = 0;
    while let Some(&opcode) = image.get(pc) {
        let a = image.get(pc + 1).copied().unwrap_or(0);
        let b = image.get(pc + 2).copied().unwrap_or(0);
        listing.push((pc, disassemble(opcode, a, b)));
        let operands = Opcode::decode(opcode)
            .map_or_else(|| opcode.encoded_operand_count(), Opcode::operand_count);
        pc += 1 + operands;
    }
    listing
}
