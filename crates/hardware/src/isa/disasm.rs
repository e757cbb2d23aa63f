//! Instruction Disassembler.
//!
//! Renders decoded instructions back into the assembly syntax the decoder accepts,
//! for instruction tracing, state dumps, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use bytesim_core::common::{InstAddr, Reg};
//! use bytesim_core::isa::disasm::disassemble;
//! use bytesim_core::isa::instruction::Instruction;
//!
//! let rd = Reg::from_number(2).unwrap();
//! let base = Reg::from_number(1).unwrap();
//! let text = disassemble(InstAddr::new(7), &Instruction::Ld { rd, base });
//! assert_eq!(text, "7\tLD R2, [R1]");
//! ```

use std::fmt;

use crate::common::InstAddr;
use crate::isa::instruction::Instruction;
use crate::sim::program::Program;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode().mnemonic();
        match *self {
            Self::Mov { rd, imm } | Self::AddImm { rd, imm } => write!(f, "{op} {rd}, {imm}"),
            Self::AddReg { rd, rs } => write!(f, "{op} {rd}, {rs}"),
            Self::Ld { rd, base } => write!(f, "{op} {rd}, [{base}]"),
            Self::St { base, rs } => write!(f, "{op} [{base}], {rs}"),
            Self::Cmp { rs1, rs2 } => write!(f, "{op} {rs1}, {rs2}"),
            Self::Je { target } | Self::Jmp { target } => write!(f, "{op} {target}"),
        }
    }
}

/// Renders one instruction as a source line (`<addr>\t<instruction>`).
pub fn disassemble(addr: InstAddr, inst: &Instruction) -> String {
    format!("{addr}\t{inst}")
}

/// Renders a whole program, one source line per instruction, in address order.
///
/// The output decodes back to an equal program.
pub fn disassemble_program(program: &Program) -> String {
    program
        .iter()
        .map(|(addr, inst)| disassemble(addr, inst) + "\n")
        .collect()
}
