//! Core component tests.


/// Single-step execution tests, one group per instruction.
pub mod cpu;
