//! Simulator: owns a configured CPU and drives it from program image to halt.
//!
//! This is the entry point embedders and the CLI use; it applies the loader
//! policy from [`Config`] and folds load and execution failures into one error type.

use std::path::Path;

use thiserror::Error;

use crate::common::{Fault, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::soc::Console;

/// Anything that can stop a run before `HLT`.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be read or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The machine faulted while loading or executing.
    #[error(transparent)]
    Fault(#[from] Fault),
}

/// Top-level simulator: configuration plus CPU state.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, flags, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a new simulator with the given configuration and output channel.
    pub fn new(config: Config, console: Box<dyn Console>) -> Self {
        let cpu = Cpu::new(&config, console);
        Self { cpu, config }
    }

    /// Returns the configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Loads raw program bytes at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Fault`] if the image does not fit in memory.
    pub fn load_bytes(&mut self, program: &[u8]) -> Result<(), SimError> {
        self.cpu.load(program)?;
        Ok(())
    }

    /// Parses program text using the configured malformed-line policy and loads it.
    ///
    /// # Errors
    ///
    /// [`SimError::Load`] for parse failures, [`SimError::Fault`] if the image does not fit.
    pub fn load_source(&mut self, source: &str) -> Result<(), SimError> {
        let program = loader::parse_program(source, self.config.loader.malformed_lines)?;
        self.load_bytes(&program)
    }

    /// Reads, parses, and loads a program file.
    ///
    /// # Errors
    ///
    /// [`SimError::Load`] for I/O or parse failures, [`SimError::Fault`] if the image does not fit.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading program file");
        let program = loader::load_program_file(path, self.config.loader.malformed_lines)?;
        self.load_bytes(&program)
    }

    /// Runs the loaded program until it halts.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Fault`] if execution stopped on a fault rather than `HLT`.
    pub fn run(&mut self) -> Result<(), SimError> {
        self.cpu.run()?;
        Ok(())
    }
}
