//! Register identifiers.
//!
//! This module provides the `Reg` type naming one of the six general-purpose registers.
//! It provides:
//! 1. **Validation:** A `Reg` can only be built for an index inside the register file.
//! 2. **Naming:** Conversion between source mnemonics (`R1`..`R6`) and zero-based indices.
//! 3. **Display:** Rendering back to the mnemonic used in assembly source.

use std::fmt;

use super::constants::{NUM_REGISTERS, REGISTER_PREFIX};

/// A general-purpose register identifier, stored as a zero-based index (0-5).
///
/// Source mnemonic `Rn` maps to index `n - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// Creates a register from a zero-based index.
    ///
    /// Returns `None` if `idx` is not below [`NUM_REGISTERS`].
    pub const fn new(idx: u8) -> Option<Self> {
        if (idx as usize) < NUM_REGISTERS {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Creates a register from its one-based mnemonic number (`R1` is `1`).
    pub const fn from_number(n: u8) -> Option<Self> {
        match n.checked_sub(1) {
            Some(idx) => Self::new(idx),
            None => None,
        }
    }

    /// Returns the zero-based index used to address the register file.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the register identifier as an 8-bit operand value.
    ///
    /// This is the value the decoder stores for indirect memory operands (`[Rm]`).
    #[inline]
    pub const fn id(self) -> i8 {
        self.0 as i8
    }

    /// Returns the one-based mnemonic number (`R1` is `1`).
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", REGISTER_PREFIX, self.number())
    }
}
