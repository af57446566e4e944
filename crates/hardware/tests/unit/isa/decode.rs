//! # Opcode Decode Tests
//!
//! The opcode byte layout is `AABCDDDD`: `AA` operand count, `B` ALU,
//! `C` sets PC. The decoded properties must agree with those bits.

use ls8_core::isa::Opcode;
use ls8_core::isa::instruction::OpcodeBits;
use ls8_core::isa::opcodes;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0b1000_0010, Opcode::Ldi)]
#[case(0b0100_0111, Opcode::Prn)]
#[case(0b0000_0001, Opcode::Hlt)]
#[case(0b1010_0000, Opcode::Add)]
#[case(0b1010_0010, Opcode::Mul)]
#[case(0b1010_0111, Opcode::Cmp)]
#[case(0b0100_0101, Opcode::Push)]
#[case(0b0100_0110, Opcode::Pop)]
#[case(0b0101_0000, Opcode::Call)]
#[case(0b0001_0001, Opcode::Ret)]
#[case(0b0101_0100, Opcode::Jmp)]
#[case(0b0101_0101, Opcode::Jeq)]
#[case(0b0101_0110, Opcode::Jne)]
fn test_decode_table(#[case] byte: u8, #[case] op: Opcode) {
    assert_eq!(Opcode::decode(byte), Some(op));
    assert_eq!(op.byte(), byte);
    assert_eq!(Opcode::try_from(byte), Ok(op));
}

#[test]
fn test_operand_count_agrees_with_encoding() {
    for op in Opcode::ALL {
        assert_eq!(op.operand_count(), op.byte().encoded_operand_count(), "{op}");
    }
}

#[test]
fn test_alu_and_sets_pc_bits_agree_with_encoding() {
    for op in Opcode::ALL {
        assert_eq!(op.is_alu(), op.byte().alu_bit(), "{op}");
        assert_eq!(op.sets_pc(), op.byte().sets_pc_bit(), "{op}");
    }
}

#[test]
fn test_mnemonics() {
    assert_eq!(Opcode::Ldi.to_string(), "LDI");
    assert_eq!(Opcode::Jne.mnemonic(), "JNE");
    assert_eq!(opcodes::HLT, Opcode::Hlt.byte());
}

#[test]
fn test_exactly_thirteen_opcodes_decode() {
    let count = (0..=u8::MAX).filter(|b| Opcode::decode(*b).is_some()).count();
    assert_eq!(count, Opcode::ALL.len());
}

#[test]
fn test_unknown_byte_is_returned_as_error() {
    assert_eq!(Opcode::try_from(0xFF), Err(0xFF));
    assert_eq!(Opcode::decode(0), None);
}

proptest! {
    #[test]
    fn prop_decode_byte_round_trip(byte: u8) {
        if let Some(op) = Opcode::decode(byte) {
            prop_assert_eq!(op.byte(), byte);
        }
    }
}
