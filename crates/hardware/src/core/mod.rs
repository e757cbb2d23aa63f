//! Core processor implementation.
//!
//! This module contains the CPU state and its single-step execution, the
//! architectural register file, and the functional units (ALU and local memory).

/// Architectural state (general-purpose registers).
pub mod arch;

/// CPU core implementation and instruction execution.
pub mod cpu;

/// Functional units (ALU, local memory).
pub mod units;

pub use self::cpu::Cpu;
