//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire processor
//! state for one run. It coordinates the following:
//! 1. **State Management:** Maintains the registers, the equality flag, and the instruction pointer.
//! 2. **Memory:** Owns the local memory and its validity bitmap.
//! 3. **Accounting:** Accumulates cycles, hits, and instruction counts in [`SimStats`].
//!
//! A `Cpu` is built fresh for each run; there is no process-wide state.

/// Single-instruction execution and state dumps.
pub mod execution;

use crate::common::InstAddr;
use crate::config::{Config, IndirectMode};
use crate::core::arch::gpr::Gpr;
use crate::core::units::cache::Cache;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers `R1`..`R6`.
    pub regs: Gpr,
    /// Equality flag written by `CMP`, read by `JE`.
    pub flag: bool,
    /// Instruction pointer: address of the next instruction to execute.
    pub ip: InstAddr,
    /// Local memory with validity bitmap.
    pub cache: Cache,
    /// Run counters.
    pub stats: SimStats,

    /// Resolution of `[Rm]` operands.
    pub indirect_mode: IndirectMode,
    /// Log each instruction at `info` instead of `trace`.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU in reset state: registers zero, flag clear, every cache slot invalid.
    ///
    /// # Arguments
    ///
    /// * `entry` - Address of the first instruction to execute.
    /// * `config` - Simulator configuration.
    pub fn new(entry: InstAddr, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            flag: false,
            ip: entry,
            cache: Cache::new(&config.memory),
            stats: SimStats::default(),
            indirect_mode: config.memory.indirect_mode,
            trace: config.general.trace_instructions,
        }
    }
}
