//! Simulation utilities and program loading.
//!
//! Provides the decoded program representation, the loader that builds it from
//! assembly source, and the simulator that runs it.

/// Source file loading and decoding.
pub mod loader;

/// Decoded program and its address bounds.
pub mod program;

/// Top-level run loop.
pub mod simulator;

pub use program::Program;
pub use simulator::Simulator;
