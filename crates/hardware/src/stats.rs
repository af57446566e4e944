//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the interpreter. It provides:
//! 1. **Throughput:** Retired instructions and host execution rate.
//! 2. **Instruction mix:** Counts by category (ALU, data movement, stack, control, I/O, system).
//! 3. **Control flow:** Conditional branches taken/not taken, calls and returns.
//! 4. **Stack:** Peak stack depth reached below the initial stack pointer.

use std::fmt;
use std::time::Instant;

use crate::isa::Opcode;

/// Execution statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// `ADD`, `MUL`, `CMP`.
    pub inst_alu: u64,
    /// `LDI`.
    pub inst_data: u64,
    /// `PUSH`, `POP`.
    pub inst_stack: u64,
    /// `CALL`, `RET`, `JMP`, `JEQ`, `JNE`.
    pub inst_control: u64,
    /// `PRN`.
    pub inst_io: u64,
    /// `HLT`.
    pub inst_system: u64,

    /// Conditional jumps that transferred control.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
    /// Subroutine calls.
    pub calls: u64,
    /// Subroutine returns.
    pub returns: u64,

    /// Values handed to the console.
    pub values_emitted: u64,
    /// Largest number of bytes the stack pointer moved below its initial value.
    pub peak_stack_depth: usize,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_data: 0,
            inst_stack: 0,
            inst_control: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            calls: 0,
            returns: 0,
            values_emitted: 0,
            peak_stack_depth: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"control"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

impl SimStats {
    /// Counts one retired instruction in its category.
    pub const fn record(&mut self, op: Opcode) {
        self.instructions_retired += 1;
        match op {
            Opcode::Add | Opcode::Mul | Opcode::Cmp => self.inst_alu += 1,
            Opcode::Ldi => self.inst_data += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Call => {
                self.inst_control += 1;
                self.calls += 1;
            }
            Opcode::Ret => {
                self.inst_control += 1;
                self.returns += 1;
            }
            Opcode::Jmp | Opcode::Jeq | Opcode::Jne => self.inst_control += 1,
            Opcode::Prn => self.inst_io += 1,
            Opcode::Hlt => self.inst_system += 1,
        }
    }

    /// Counts the outcome of a conditional jump.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Restarts the wall-clock timer so load and parse time are not counted.
    pub fn start_clock(&mut self) {
        self.start_time = Instant::now();
    }

    /// Wall-clock seconds since the timer was last started.
    pub fn host_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Updates the peak stack depth.
    pub fn record_stack_depth(&mut self, depth: usize) {
        self.peak_stack_depth = self.peak_stack_depth.max(depth);
    }

    /// Returns a printable view containing only the requested sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. An
    /// empty slice selects every section.
    pub fn sections<'a>(&'a self, sections: &'a [String]) -> StatsReport<'a> {
        StatsReport {
            stats: self,
            sections,
        }
    }

    /// Prints only the requested statistics sections to stderr.
    pub fn print_sections(&self, sections: &[String]) {
        eprint!("{}", self.sections(sections));
    }

    /// Prints all statistics sections to stderr.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

/// Formatter for a selection of statistics sections.
#[derive(Debug)]
pub struct StatsReport<'a> {
    stats: &'a SimStats,
    sections: &'a [String],
}

impl StatsReport<'_> {
    fn want(&self, section: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == section)
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        let seconds = s.host_seconds();
        // Guards the percentage divisions below.
        let total = s.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        if self.want("summary") {
            let rate = if seconds > 0.0 {
                s.instructions_retired as f64 / seconds
            } else {
                0.0
            };
            writeln!(f, "LS-8 EXECUTION STATISTICS")?;
            writeln!(f, "==========================================================")?;
            writeln!(f, "host_seconds             {seconds:.6} s")?;
            writeln!(f, "sim_insts                {}", s.instructions_retired)?;
            writeln!(f, "sim_insts_per_sec        {rate:.0}")?;
            writeln!(f, "sim_outputs              {}", s.values_emitted)?;
            writeln!(f, "stack_peak_depth         {}", s.peak_stack_depth)?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if self.want("instruction_mix") {
            writeln!(f, "INSTRUCTION MIX")?;
            let rows = [
                ("op.alu", s.inst_alu),
                ("op.data", s.inst_data),
                ("op.stack", s.inst_stack),
                ("op.control", s.inst_control),
                ("op.io", s.inst_io),
                ("op.system", s.inst_system),
            ];
            for (name, count) in rows {
                writeln!(f, "  {name:<22} {count} ({:.2}%)", pct(count))?;
            }
            writeln!(f, "----------------------------------------------------------")?;
        }
        if self.want("control") {
            let conditional = s.branches_taken + s.branches_not_taken;
            let taken_rate = if conditional > 0 {
                100.0 * (s.branches_taken as f64 / conditional as f64)
            } else {
                0.0
            };
            writeln!(f, "CONTROL FLOW")?;
            writeln!(f, "  branch.conditional     {conditional}")?;
            writeln!(f, "  branch.taken           {}", s.branches_taken)?;
            writeln!(f, "  branch.taken_rate      {taken_rate:.2}%")?;
            writeln!(f, "  call.count             {}", s.calls)?;
            writeln!(f, "  ret.count              {}", s.returns)?;
        }
        writeln!(f, "==========================================================")
    }
}
