//! # Unit Components
//!
//! Unit tests organized to mirror the crate's module tree, plus whole-program
//! property tests.



/// Unit tests for the register file, ALU, local memory, and CPU execution.
pub mod core;

/// Unit tests for the decoder and disassembler.
pub mod isa;

/// Property tests over generated programs (cycle accounting and hit/miss behavior).
pub mod properties;
