//! Execution units and functional components.
//!
//! This module contains the ALU used by `MOV`/`ADD`/`CMP` and the local memory
//! model used by `LD`/`ST`.

/// Arithmetic Logic Unit for 8-bit operations.
pub mod alu;

/// Local memory with one-shot validity bits.
pub mod cache;
