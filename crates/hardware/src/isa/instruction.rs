//! Decoded instruction representation.
//!
//! Provides the `Instruction` enum produced by the decoder and consumed by the
//! execution engine, together with the `Opcode` tag that names its operation.

use crate::common::Reg;

/// Operation identifier of a decoded instruction.
///
/// `ADD` is split into register and immediate forms; they come from the same
/// mnemonic but are distinct operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `MOV Rn, imm`
    Mov,
    /// `ADD Rn, Rm`
    AddReg,
    /// `ADD Rn, imm`
    AddImm,
    /// `LD Rn, [Rm]`
    Ld,
    /// `ST [Rm], Rn`
    St,
    /// `CMP Rn, Rm`
    Cmp,
    /// `JE addr`
    Je,
    /// `JMP addr`
    Jmp,
}

impl Opcode {
    /// Returns the source mnemonic for this opcode.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mov => "MOV",
            Self::AddReg | Self::AddImm => "ADD",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::Cmp => "CMP",
            Self::Je => "JE",
            Self::Jmp => "JMP",
        }
    }
}

/// A decoded instruction. Immutable once produced by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Load an immediate into `rd`.
    Mov {
        /// Destination register.
        rd: Reg,
        /// Signed 8-bit immediate.
        imm: i8,
    },
    /// `rd += rs` with 8-bit wrapping.
    AddReg {
        /// Destination and first source register.
        rd: Reg,
        /// Second source register.
        rs: Reg,
    },
    /// `rd += imm` with 8-bit wrapping.
    AddImm {
        /// Destination and first source register.
        rd: Reg,
        /// Signed 8-bit immediate.
        imm: i8,
    },
    /// Load a byte from local memory into `rd`.
    Ld {
        /// Destination register.
        rd: Reg,
        /// Register named inside the brackets of `[Rm]`.
        base: Reg,
    },
    /// Store `rs` into local memory.
    St {
        /// Register named inside the brackets of `[Rm]`.
        base: Reg,
        /// Register holding the value to store.
        rs: Reg,
    },
    /// Set the flag to `rs1 == rs2`.
    Cmp {
        /// First compared register.
        rs1: Reg,
        /// Second compared register.
        rs2: Reg,
    },
    /// Jump to `target` if the flag is set.
    Je {
        /// Target address.
        target: i8,
    },
    /// Jump to `target` unconditionally.
    Jmp {
        /// Target address.
        target: i8,
    },
}

impl Instruction {
    /// Returns the opcode tag of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Mov { .. } => Opcode::Mov,
            Self::AddReg { .. } => Opcode::AddReg,
            Self::AddImm { .. } => Opcode::AddImm,
            Self::Ld { .. } => Opcode::Ld,
            Self::St { .. } => Opcode::St,
            Self::Cmp { .. } => Opcode::Cmp,
            Self::Je { .. } => Opcode::Je,
            Self::Jmp { .. } => Opcode::Jmp,
        }
    }

    /// Returns the raw 8-bit operand fields in source order.
    ///
    /// Register operands appear as their zero-based identifiers, so `LD R2, [R1]`
    /// yields `(1, Some(0))`. Jumps carry a single operand.
    pub const fn operands(&self) -> (i8, Option<i8>) {
        match *self {
            Self::Mov { rd, imm } | Self::AddImm { rd, imm } => (rd.id(), Some(imm)),
            Self::AddReg { rd, rs } => (rd.id(), Some(rs.id())),
            Self::Ld { rd, base } => (rd.id(), Some(base.id())),
            Self::St { base, rs } => (base.id(), Some(rs.id())),
            Self::Cmp { rs1, rs2 } => (rs1.id(), Some(rs2.id())),
            Self::Je { target } | Self::Jmp { target } => (target, None),
        }
    }
}
