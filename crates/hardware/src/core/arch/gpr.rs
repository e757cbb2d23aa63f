//! General-Purpose Register File.
//!
//! This module implements the six signed 8-bit registers `R1`..`R6`. It performs the following:
//! 1. **Storage:** Maintains the register values, all zero at reset.
//! 2. **Typed Access:** Registers are addressed by [`Reg`], so every access is in bounds.
//! 3. **Debugging:** Renders the whole register state on one line.

use std::fmt;

use crate::common::Reg;
use crate::common::constants::NUM_REGISTERS;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with all registers set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, reg: Reg) -> i8 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, reg: Reg, val: i8) {
        self.regs[reg.index()] = val;
    }

    /// Returns a copy of all register values, `R1` first.
    pub const fn values(&self) -> [i8; NUM_REGISTERS] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "R{}={:<4}", i + 1, val)?;
        }
        Ok(())
    }
}
