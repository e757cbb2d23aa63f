//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters maintained by the execution engine. It provides:
//! 1. **Primary counters:** Cycles, executed instructions, local memory hits, and LD/ST count.
//! 2. **Breakdown counters:** Misses, loads, stores, and taken branches.
//! 3. **Report:** The five-line end-of-run summary, also serializable to JSON.

use std::fmt;

use serde::Serialize;

/// Counters accumulated during a run.
///
/// Owned and mutated only by the CPU; everything else reads them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total clock cycles.
    pub cycles: u64,
    /// Number of instructions executed.
    pub instructions_executed: u64,
    /// Loads and stores that found their slot already valid.
    pub cache_hits: u64,
    /// Loads and stores that touched their slot for the first time.
    pub cache_misses: u64,
    /// Number of `LD` and `ST` instructions executed.
    pub load_store: u64,
    /// Number of `LD` instructions executed.
    pub loads: u64,
    /// Number of `ST` instructions executed.
    pub stores: u64,
    /// Number of `JE`/`JMP` instructions that redirected the instruction pointer.
    pub branches_taken: u64,
}

impl SimStats {
    /// Records one load or store and its outcome.
    pub const fn record_memory(&mut self, is_store: bool, hit: bool) {
        self.load_store += 1;
        if is_store {
            self.stores += 1;
        } else {
            self.loads += 1;
        }
        if hit {
            self.cache_hits += 1;
        } else {
            self.cache_misses += 1;
        }
    }

    /// Builds the end-of-run report.
    ///
    /// # Arguments
    ///
    /// * `code_size` - Instructions in the code, `exit - entry + 1` (see [`Program::span`](crate::sim::program::Program::span)).
    pub const fn report(&self, code_size: u64) -> Report {
        Report {
            instructions_in_code: code_size,
            instructions_executed: self.instructions_executed,
            cycles: self.cycles,
            cache_hits: self.cache_hits,
            load_store: self.load_store,
        }
    }
}

/// End-of-run summary.
///
/// `Display` renders the five labeled lines printed by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// `exit - entry + 1`, or 0 for an empty program.
    pub instructions_in_code: u64,
    /// Number of instructions executed.
    pub instructions_executed: u64,
    /// Total clock cycles.
    pub cycles: u64,
    /// Hits to local memory.
    pub cache_hits: u64,
    /// Executed `LD`/`ST` instructions.
    pub load_store: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total number of instructions in the code: {}",
            self.instructions_in_code
        )?;
        writeln!(
            f,
            "Total number of executed instructions: {}",
            self.instructions_executed
        )?;
        writeln!(f, "Total number of clock cycles: {}", self.cycles)?;
        writeln!(f, "Number of hits to local memory: {}", self.cache_hits)?;
        write!(
            f,
            "Total number of executed LD/ST instructions: {}",
            self.load_store
        )
    }
}
