//! Decode, execution, and top-level simulator errors.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Decode Errors:** Faults found while translating assembly text, tagged with the source line.
//! 2. **Execution Errors:** Runtime faults raised by the execution engine.
//! 3. **Simulator Errors:** The top-level error that wraps I/O, configuration, decode, and execution failures.
//!
//! Every error is fatal: the simulator never resumes past one.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::InstAddr;

/// Errors raised while decoding a line of assembly source.
///
/// Line numbers are one-based positions in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The mnemonic is not part of the instruction set.
    #[error("line {line}: invalid instruction `{mnemonic}`")]
    UnknownMnemonic {
        /// Source line number.
        line: usize,
        /// The unrecognised mnemonic.
        mnemonic: String,
    },

    /// The line has an address but no mnemonic.
    #[error("line {line}: missing mnemonic after address")]
    MissingMnemonic {
        /// Source line number.
        line: usize,
    },

    /// The leading address is not an integer in `0..=65535`.
    #[error("line {line}: malformed address `{token}`")]
    MalformedAddress {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// An operand token does not match the syntax expected at its position.
    #[error("line {line}: malformed operand `{token}` (expected {expected})")]
    MalformedOperand {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Description of the expected syntax.
        expected: &'static str,
    },

    /// A register token names a register outside `R1`..`R6`.
    #[error("line {line}: register `{token}` does not exist (R1-R6)")]
    RegisterOutOfRange {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// An immediate or jump target does not fit in a signed 8-bit operand.
    #[error("line {line}: value `{token}` does not fit in 8 bits (-128..=127)")]
    ImmediateOutOfRange {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The mnemonic was given the wrong number of operands.
    #[error("line {line}: {mnemonic} expects {expected} operand(s), found {found}")]
    OperandCount {
        /// Source line number.
        line: usize,
        /// The mnemonic being decoded.
        mnemonic: &'static str,
        /// Number of operands the mnemonic takes.
        expected: usize,
        /// Number of operands present.
        found: usize,
    },
}

impl DecodeError {
    /// Returns the source line the error was raised on.
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownMnemonic { line, .. }
            | Self::MissingMnemonic { line }
            | Self::MalformedAddress { line, .. }
            | Self::MalformedOperand { line, .. }
            | Self::RegisterOutOfRange { line, .. }
            | Self::ImmediateOutOfRange { line, .. }
            | Self::OperandCount { line, .. } => *line,
        }
    }
}

/// Runtime faults raised by the execution engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// A `JE`/`JMP` landed on a negative address, below the program entry, or on a gap.
    #[error("invalid jump target {target} at address {at}")]
    InvalidJumpTarget {
        /// Address of the jump instruction.
        at: InstAddr,
        /// The raw 8-bit target operand.
        target: i8,
    },

    /// Sequential execution reached an address inside the program bounds with no instruction.
    #[error("no instruction at address {0}")]
    MissingInstruction(InstAddr),

    /// A load or store produced an index outside 0-255 while out-of-range indices are rejected.
    #[error("cache index {index} out of range (0-255) at address {at}")]
    CacheIndexOutOfRange {
        /// Address of the memory instruction.
        at: InstAddr,
        /// The unresolved index.
        index: i8,
    },

    /// The configured instruction budget ran out before the program left its bounds.
    #[error("instruction limit of {0} reached without leaving the program")]
    InstructionLimit(u64),
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// A source or configuration file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// The file that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration JSON is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The assembly source failed to decode.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Execution hit a runtime fault.
    #[error("runtime error: {0}")]
    Exec(#[from] ExecError),
}
