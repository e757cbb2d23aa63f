//! Instruction address type.
//!
//! Program addresses are plain line labels taken from the assembly source. They are
//! kept distinct from register values and cache indices so that a jump target can
//! never be confused with a memory slot.

use std::fmt;

/// An instruction address in the program (the number that prefixes each source line).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InstAddr(pub u32);

impl InstAddr {
    /// Creates a new instruction address from a raw value.
    #[inline]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns the sequentially following address.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Converts an 8-bit jump operand into an address.
    ///
    /// Negative targets have no address and return `None`.
    #[inline]
    pub fn from_target(target: i8) -> Option<Self> {
        u32::try_from(target).ok().map(Self)
    }
}

impl fmt::Display for InstAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
