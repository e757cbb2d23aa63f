//! Global System Constants.
//!
//! This module defines the architectural constants of the simulated machine. It includes:
//! 1. **Register Constants:** Register file width and the source-level register prefix.
//! 2. **Memory Constants:** Size of the byte-addressable local memory.
//! 3. **Timing Constants:** Per-instruction cycle costs and memory access latencies.

/// Number of general-purpose registers (`R1`..`R6`).
pub const NUM_REGISTERS: usize = 6;

/// Prefix letter that marks a register token in assembly source (`R3`).
pub const REGISTER_PREFIX: char = 'R';

/// Size of the local memory in bytes; also the number of validity bits.
pub const CACHE_SIZE: usize = 256;

/// Cycles charged for `MOV` and both forms of `ADD`.
pub const CYCLES_ALU: u64 = 1;

/// Cycles charged for `CMP`.
pub const CYCLES_CMP: u64 = 2;

/// Cycles charged for `JE` (taken or not) and `JMP`.
pub const CYCLES_BRANCH: u64 = 1;

/// Default cycles charged for a load or store that hits a touched slot.
pub const HIT_LATENCY: u64 = 2;

/// Default cycles charged for the first load or store to a slot.
pub const MISS_LATENCY: u64 = 40;

/// Highest address a source line may carry.
pub const MAX_ADDRESS: u32 = u16::MAX as u32;

/// Marker that starts a comment in assembly source.
pub const COMMENT_MARKER: char = ';';
