//! Configuration system for the interpreter.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Structures:** Hierarchical config for general, loader, and machine behaviour.
//! 2. **Enums:** The policy applied to malformed program lines.
//! 3. **Parsing:** JSON deserialization with every field optional.
//!
//! Configuration is supplied as JSON (the CLI's `--config` file) or use `Config::default()`.

use serde::Deserialize;

/// How the loader treats a line that is not a valid binary literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MalformedLinePolicy {
    /// Skip the line and log a warning; the rest of the image still loads.
    #[default]
    Skip,
    /// Fail the load with the offending line number.
    #[serde(alias = "Strict")]
    Reject,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::{Config, MalformedLinePolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "loader": { "malformed_lines": "Reject" },
///     "machine": { "ret_pops_stack": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Reject);
/// assert!(config.machine.ret_pops_stack);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Program image parsing
    #[serde(default)]
    pub loader: LoaderConfig,
    /// Instruction semantics switches
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses a configuration from JSON. Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or unknown enum values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log a trace row (PC, instruction bytes, registers, disassembly) before every instruction
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Program image loading settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoaderConfig {
    /// Policy for lines that are not binary literals
    #[serde(default)]
    pub malformed_lines: MalformedLinePolicy,
}

/// Instruction semantics switches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineConfig {
    /// Make `RET` post-increment the stack pointer after reading the return address.
    ///
    /// Off by default: `RET` reads the return address and leaves SP alone,
    /// which is enough for one level of calls. Nested subroutines need this on.
    #[serde(default)]
    pub ret_pops_stack: bool,
}
