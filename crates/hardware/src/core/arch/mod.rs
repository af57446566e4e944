//! LS-8 architectural state.
//!
//! This module contains the architectural elements that are not plain storage.
//! It includes the following modules:
//! 1. **Flags:** The Equal/Greater/Less condition register.
//! 2. **State:** The running/halted state machine.

/// Condition flag register.
pub mod flags;

/// Run state of the execution engine.
pub mod state;

pub use flags::Flags;
pub use state::RunState;
