//! Machine Components.
//!
//! This module holds the storage and I/O the execution engine is wired to:
//! main memory and the console that receives `PRN` output.

/// Console implementations (stdout, in-memory capture).
pub mod console;

/// Byte-addressable main memory.
pub mod memory;

/// Output channel trait.
pub mod traits;

pub use console::{CaptureConsole, StdoutConsole};
pub use memory::Ram;
pub use traits::Console;
