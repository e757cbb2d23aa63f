//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by the decoder, the execution
//! engine, and the front end. It includes:
//! 1. **Address Types:** A strong type for program (instruction) addresses.
//! 2. **Constants:** Register count, memory size, and cycle costs.
//! 3. **Error Handling:** Decode, execution, and top-level simulator errors.
//! 4. **Register Identifiers:** Validated names for `R1`..`R6`.

/// Instruction address type.
pub mod addr;

/// Architectural constants and cycle costs.
pub mod constants;

/// Error types for decoding and execution.
pub mod error;

/// Register identifier type.
pub mod reg;

pub use addr::InstAddr;
pub use error::{DecodeError, ExecError, SimError};
pub use reg::Reg;
