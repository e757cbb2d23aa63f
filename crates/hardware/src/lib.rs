//! 8-bit instruction set simulator library.
//!
//! This crate simulates a toy processor with six 8-bit registers, a 256-byte local
//! memory with one-shot validity bits, and a single equality flag:
//! 1. **ISA:** Instruction definitions, the line-oriented assembly decoder, and a disassembler.
//! 2. **Core:** Register file, ALU, local memory model, and the fetch-decode-execute step.
//! 3. **Simulation:** Program representation, loader, and the run loop.
//! 4. **Statistics:** Cycle, instruction, hit, and load/store counters and the final report.
//!
//! # Example
//!
//! ```
//! use bytesim_core::{Config, Simulator};
//!
//! let source = "0\tMOV R1, 3\n1\tADD R1, R1\n2\tST [R1], R1\n";
//! let mut sim = Simulator::from_source(source, &Config::default()).unwrap();
//! let stats = sim.run().unwrap();
//! assert_eq!(stats.instructions_executed, 3);
//! assert_eq!(stats.cycles, 1 + 1 + 40);
//! ```

/// Common types and constants (addresses, registers, errors).
pub mod common;
/// Simulator configuration (defaults, enums, config structures).
pub mod config;
/// CPU core (registers, ALU, local memory, execution).
pub mod core;
/// Instruction set (instruction, decode, disasm).
pub mod isa;
/// Program representation, loader, and simulator.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flag, local memory, and stats.
pub use crate::core::Cpu;
/// Decoded program with entry/exit bounds.
pub use crate::sim::Program;
/// Top-level simulator; construct with `Simulator::new` or `Simulator::from_source`.
pub use crate::sim::Simulator;
