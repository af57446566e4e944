//! Architectural state tests.

/// Condition flag comparison and packing.
pub mod flags;

/// Run state transitions.
pub mod state;
