//! # Statistics Tests
//!
//! Verifies the instruction mix and control-flow counters after real runs,
//! and the section filtering of the report.

use std::thread;
use std::time::Duration;

use ls8_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::harness::TestContext;
use crate::common::program::{add, cmp, hlt, jeq, ldi, pop, prn, push};

#[test]
fn test_instruction_mix_after_run() {
    let program = [
        ldi(0, 2),
        ldi(1, 3),
        add(0, 1),
        push(0),
        pop(2),
        prn(2),
        cmp(0, 1),
        jeq(0),
        hlt(),
    ]
    .concat();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run();

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.instructions_retired, 9);
    assert_eq!(stats.inst_data, 2);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_stack, 2);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_control, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.branches_not_taken, 1);
    assert_eq!(stats.values_emitted, 1);
    assert_eq!(stats.peak_stack_depth, 1);
}

#[test]
fn test_report_contains_every_section_by_default() {
    let stats = SimStats::default();
    let report = stats.sections(&[]).to_string();
    assert!(report.contains("LS-8 EXECUTION STATISTICS"));
    assert!(report.contains("INSTRUCTION MIX"));
    assert!(report.contains("CONTROL FLOW"));
}

#[test]
fn test_report_section_filter() {
    let stats = SimStats::default();
    let wanted = vec!["control".to_string()];
    let report = stats.sections(&wanted).to_string();
    assert!(report.contains("CONTROL FLOW"));
    assert!(!report.contains("INSTRUCTION MIX"));
    assert!(!report.contains("sim_insts"));
}

#[test]
fn test_section_names() {
    assert_eq!(STATS_SECTIONS, &["summary", "instruction_mix", "control"]);
}

#[test]
fn test_clock_restarts_when_run_begins() {
    let mut ctx = TestContext::new().load_program(&[ldi(0, 1), prn(0), hlt()].concat());
    thread::sleep(Duration::from_millis(200));
    ctx.run();
    assert!(ctx.cpu().stats.host_seconds() < 0.2);
}

#[test]
fn test_start_clock_resets_elapsed_time() {
    let mut stats = SimStats::default();
    thread::sleep(Duration::from_millis(50));
    assert!(stats.host_seconds() >= 0.05);
    stats.start_clock();
    assert!(stats.host_seconds() < 0.05);
}
