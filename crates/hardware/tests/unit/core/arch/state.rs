//! # Run State Tests

use ls8_core::core::arch::RunState;

#[test]
fn test_default_is_running() {
    assert!(RunState::default().is_running());
}

#[test]
fn test_names() {
    assert_eq!(RunState::Running.to_string(), "RUNNING");
    assert_eq!(RunState::Halted.to_string(), "HALTED");
    assert!(!RunState::Halted.is_running());
}
