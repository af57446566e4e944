//! LS-8 interpreter CLI.
//!
//! This binary runs a program image from disk. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON file and flags.
//! 2. **Loading:** Parses the binary-literal text image and writes it to address 0.
//! 3. **Execution:** Runs to `HLT`, printing each `PRN` value on its own line to stdout.
//!
//! Exit status: 0 on `HLT`, 1 on a program fault, 2 on command-line usage
//! errors (reported by clap), 3 on an internal engine error, 4 on load or
//! configuration errors.

use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::config::{Config, MalformedLinePolicy};
use ls8_core::sim::SimError;
use ls8_core::soc::StdoutConsole;
use ls8_core::stats::STATS_SECTIONS;
use ls8_core::Simulator;

/// Exit code for a program that faulted (bad opcode, out-of-bounds access).
const EXIT_PROGRAM_FAULT: u8 = 1;
/// Exit code for program or config files that cannot be read or parsed.
const EXIT_LOAD_ERROR: u8 = 4;
/// Exit code for defects in the interpreter itself.
const EXIT_ENGINE_DEFECT: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit computer interpreter",
    long_about = "Run an LS-8 program image: one 8-bit binary literal per line, `#` starts a comment.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace programs/call.ls8\n  ls8 --strict --stats programs/mult.ls8"
)]
struct Cli {
    /// Program image to execute.
    program: PathBuf,

    /// JSON configuration file (see `ls8_core::config::Config`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log a trace row before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Reject malformed program lines instead of skipping them.
    #[arg(long)]
    strict: bool,

    /// Make RET pop the return address (needed for nested calls).
    #[arg(long)]
    ret_pops_stack: bool,

    /// Print execution statistics to stderr after the run.
    #[arg(long)]
    stats: bool,

    /// Restrict `--stats` output to these sections.
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = clap::builder::PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats_sections: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("[!] {msg}");
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };
    init_tracing(config.general.trace_instructions);
    tracing::debug!(?config, program = %cli.program.display(), "resolved configuration");

    let mut sim = Simulator::new(config, Box::new(StdoutConsole));
    if let Err(e) = sim.load_file(&cli.program) {
        eprintln!("[!] {e}");
        return ExitCode::from(EXIT_LOAD_ERROR);
    }

    let result = sim.run();
    if cli.stats {
        sim.cpu.stats.print_sections(&cli.stats_sections);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(SimError::Fault(fault)) => {
            eprintln!("\n[!] FATAL: {fault}");
            eprintln!("{}", sim.cpu.dump_state());
            if fault.is_engine_defect() {
                ExitCode::from(EXIT_ENGINE_DEFECT)
            } else {
                ExitCode::from(EXIT_PROGRAM_FAULT)
            }
        }
        Err(e @ SimError::Load(_)) => {
            eprintln!("[!] {e}");
            ExitCode::from(EXIT_LOAD_ERROR)
        }
    }
}

/// Installs a stderr `fmt` subscriber honouring `RUST_LOG`.
///
/// Instruction tracing turns on the `ls8::trace` target on top of whatever `RUST_LOG` asks for.
fn init_tracing(trace: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        if let Ok(directive) = "ls8::trace=info".parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Merges the optional JSON config file with command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
            Config::from_json(&json)
                .map_err(|e| format!("invalid config '{}': {e}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.strict {
        config.loader.malformed_lines = MalformedLinePolicy::Reject;
    }
    if cli.ret_pops_stack {
        config.machine.ret_pops_stack = true;
    }
    Ok(config)
}
