//! Architectural state components.
//!
//! Holds the general-purpose register file. The equality flag and instruction
//! pointer are single scalars and live directly on [`Cpu`](crate::core::Cpu).

/// General-Purpose Register file implementation.
pub mod gpr;
