//! Instruction set tests.


/// Disassembler rendering.
pub mod disasm;
