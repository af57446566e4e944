//! Output channel trait.
//!
//! `PRN` is the machine's only externally visible side effect. The CPU hands
//! each printed value to a [`Console`], which decides where it goes.

use std::fmt;

/// Sink for values printed by `PRN`.
///
/// Emission is append-only and assumed not to block.
pub trait Console: fmt::Debug + Send {
    /// Receives one printed register value.
    fn emit(&mut self, value: u8);
}
