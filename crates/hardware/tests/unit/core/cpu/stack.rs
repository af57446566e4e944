//! # Stack Discipline Tests
//!
//! `PUSH` pre-decrements SP and stores; `POP` loads and post-increments.
//! The stack starts at `0xF4` and grows toward address 0.

use ls8_core::common::{Fault, STACK_TOP};
use ls8_core::isa::Opcode;

use crate::common::harness::TestContext;
use crate::common::program::{hlt, ldi, pop, prn, push};

#[test]
fn test_stack_pointer_starts_at_stack_top() {
    let ctx = TestContext::new();
    assert_eq!(ctx.cpu().sp, usize::from(STACK_TOP));
    assert_eq!(ctx.get_reg(7), STACK_TOP);
}

#[test]
fn test_push_predecrements() {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, 0x5A);
    let _ = ctx.cpu_mut().execute(Opcode::Push, 2, 0).unwrap();
    assert_eq!(ctx.cpu().sp, 0xF3);
    assert_eq!(ctx.cpu().ram.read(0xF3).unwrap(), 0x5A);
}

#[test]
fn test_pop_postincrements() {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, 0x5A);
    let _ = ctx.cpu_mut().execute(Opcode::Push, 2, 0).unwrap();
    let _ = ctx.cpu_mut().execute(Opcode::Pop, 4, 0).unwrap();
    assert_eq!(ctx.get_reg(4), 0x5A);
    assert_eq!(ctx.cpu().sp, usize::from(STACK_TOP));
}

#[test]
fn test_push_pop_restores_register_and_sp() {
    let program = [
        ldi(0, 11),
        push(0),
        ldi(0, 22),
        pop(0),
        prn(0),
        hlt(),
    ]
    .concat();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run();
    assert_eq!(ctx.output(), vec![11]);
    assert_eq!(ctx.cpu().sp, usize::from(STACK_TOP));
}

#[test]
fn test_stack_is_last_in_first_out() {
    let program = [
        ldi(0, 1),
        ldi(1, 2),
        ldi(2, 3),
        push(0),
        push(1),
        push(2),
        pop(3),
        prn(3),
        pop(3),
        prn(3),
        pop(3),
        prn(3),
        hlt(),
    ]
    .concat();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run();
    assert_eq!(ctx.output(), vec![3, 2, 1]);
    assert_eq!(ctx.cpu().stats.peak_stack_depth, 3);
}

#[test]
fn test_push_does_not_update_r7() {
    let mut ctx = TestContext::new();
    let _ = ctx.cpu_mut().execute(Opcode::Push, 0, 0).unwrap();
    assert_eq!(ctx.get_reg(7), STACK_TOP);
}

#[test]
fn test_push_at_address_zero_overflows() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().sp = 0;
    assert_eq!(
        ctx.cpu_mut().execute(Opcode::Push, 0, 0),
        Err(Fault::StackOverflow { sp: 0 })
    );
    assert_eq!(ctx.cpu().sp, 0);
}

#[test]
fn test_pop_past_end_of_memory_is_out_of_bounds() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().sp = 256;
    assert_eq!(
        ctx.cpu_mut().execute(Opcode::Pop, 0, 0),
        Err(Fault::MemoryOutOfBounds { address: 256 })
    );
}
