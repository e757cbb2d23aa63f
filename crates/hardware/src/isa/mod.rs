//! Instruction set definitions and assembly decoding.
//!
//! This module contains:
//! 1. **Instruction:** The decoded instruction enum and its opcode tags.
//! 2. **Decode:** Translation of one line of assembly text into an instruction.
//! 3. **Disasm:** Rendering of instructions back into assembly syntax.

/// Line-oriented assembly decoder.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Decoded instruction and opcode types.
pub mod instruction;

pub use decode::decode_line;
pub use instruction::{Instruction, Opcode};
