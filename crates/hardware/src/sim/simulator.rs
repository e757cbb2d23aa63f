//! Simulator: owns the CPU and the program it executes side-by-side.
//!
//! Keeping the program outside the `Cpu` lets each step borrow it immutably while the
//! CPU state is mutated.

use crate::common::{ExecError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::sim::program::Program;
use crate::stats::{Report, SimStats};

/// Top-level simulator: CPU architectural state + decoded program.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU state (registers, flag, instruction pointer, local memory, stats).
    pub cpu: Cpu,
    /// Program being executed. Read-only once the simulator is built.
    program: Program,
    /// Instruction budget for the run.
    max_instructions: Option<u64>,
}

impl Simulator {
    /// Creates a simulator with the instruction pointer at the program entry.
    pub fn new(program: Program, config: &Config) -> Self {
        let entry = program.entry().unwrap_or_default();
        Self {
            cpu: Cpu::new(entry, config),
            program,
            max_instructions: config.general.max_instructions,
        }
    }

    /// Decodes `source` and builds a simulator for it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] if the source does not decode. Nothing executes.
    pub fn from_source(source: &str, config: &Config) -> Result<Self, SimError> {
        let program = loader::parse_program(source)?;
        Ok(Self::new(program, config))
    }

    /// The program being executed.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Returns true once the instruction pointer has moved past the program exit.
    pub fn is_finished(&self) -> bool {
        self.cpu.is_finished(&self.program)
    }

    /// Executes one instruction if the run has not finished.
    ///
    /// Returns `Ok(true)` while more instructions remain, `Ok(false)` once finished.
    ///
    /// # Errors
    ///
    /// Propagates the CPU's [`ExecError`]. Also fails with
    /// [`ExecError::InstructionLimit`] when the instruction budget is spent.
    pub fn step(&mut self) -> Result<bool, ExecError> {
        if self.is_finished() {
            return Ok(false);
        }
        if let Some(limit) = self.max_instructions {
            if self.cpu.stats.instructions_executed >= limit {
                return Err(ExecError::InstructionLimit(limit));
            }
        }
        self.cpu.step(&self.program)?;
        Ok(!self.is_finished())
    }

    /// Runs until the instruction pointer passes the program exit.
    ///
    /// # Errors
    ///
    /// Stops at the first [`ExecError`]; the run cannot be resumed.
    pub fn run(&mut self) -> Result<&SimStats, ExecError> {
        while self.step()? {}
        tracing::debug!(
            executed = self.cpu.stats.instructions_executed,
            cycles = self.cpu.stats.cycles,
            "run complete"
        );
        Ok(&self.cpu.stats)
    }

    /// Builds the end-of-run report from the current counters.
    pub fn report(&self) -> Report {
        self.cpu.stats.report(self.program.span())
    }
}
