//! Machine Run State.
//!
//! The execution engine is a two-state machine: it starts `Running` and
//! moves to `Halted` on `HLT` or on any fault. `Halted` is terminal.

use std::fmt;

/// Run state of the execution engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// Stopped; no further instructions will execute.
    Halted,
}

impl RunState {
    /// Returns `true` while instructions are still being executed.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns the human-readable name of the state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Halted => "HALTED",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
