//! # Register File Tests
//!
//! Tests for the eight-entry 8-bit register file.

use ls8_core::common::{Fault, NUM_REGISTERS, RegisterFile, SP_REGISTER, STACK_TOP};

#[test]
fn test_register_file_new_seeds_stack_register() {
    let regs = RegisterFile::new();
    for i in 0..NUM_REGISTERS {
        let expected = if i == SP_REGISTER { STACK_TOP } else { 0 };
        assert_eq!(regs.read(i).unwrap(), expected, "R{i}");
    }
}

#[test]
fn test_register_file_default_matches_new() {
    assert_eq!(RegisterFile::default(), RegisterFile::new());
}

#[test]
fn test_register_file_write_read_every_register() {
    let mut regs = RegisterFile::new();
    for i in 0..NUM_REGISTERS {
        regs.write(i, 0x10 + i as u8).unwrap();
    }
    for i in 0..NUM_REGISTERS {
        assert_eq!(regs.read(i).unwrap(), 0x10 + i as u8);
    }
}

#[test]
fn test_register_file_write_does_not_disturb_neighbours() {
    let mut regs = RegisterFile::new();
    regs.write(3, 0xAB).unwrap();
    assert_eq!(regs.as_array(), &[0, 0, 0, 0xAB, 0, 0, 0, STACK_TOP]);
}

#[test]
fn test_register_file_read_out_of_bounds() {
    let regs = RegisterFile::new();
    assert_eq!(
        regs.read(NUM_REGISTERS),
        Err(Fault::RegisterOutOfBounds { index: 8 })
    );
    assert_eq!(
        regs.read(255),
        Err(Fault::RegisterOutOfBounds { index: 255 })
    );
}

#[test]
fn test_register_file_write_out_of_bounds_leaves_file_unchanged() {
    let mut regs = RegisterFile::new();
    assert_eq!(
        regs.write(9, 1),
        Err(Fault::RegisterOutOfBounds { index: 9 })
    );
    assert_eq!(regs, RegisterFile::new());
}

#[test]
fn test_register_file_display() {
    let mut regs = RegisterFile::new();
    regs.write(0, 8).unwrap();
    assert_eq!(
        regs.to_string(),
        "R0=08 R1=00 R2=00 R3=00 R4=00 R5=00 R6=00 R7=F4"
    );
}
