//! Simulation utilities and program loading.
//!
//! Provides the text program-image loader and the [`Simulator`] that ties a
//! configuration, a loaded image, and a CPU together.

/// Program image parsing and file loading.
pub mod loader;

/// Top-level simulator wrapper.
pub mod simulator;

pub use simulator::{SimError, Simulator};
