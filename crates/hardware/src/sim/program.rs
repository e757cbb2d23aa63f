//! Decoded program representation.
//!
//! A `Program` maps instruction addresses to decoded instructions and tracks the
//! entry (lowest) and exit (highest) addresses. The bounds are narrowed on every
//! insert, so they are always available without scanning the map.

use std::collections::BTreeMap;

use crate::common::InstAddr;
use crate::isa::instruction::Instruction;

/// An ordered mapping from address to instruction, plus its address bounds.
///
/// Built once by the loader and read-only during execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: BTreeMap<InstAddr, Instruction>,
    bounds: Option<(InstAddr, InstAddr)>,
}

impl Program {
    /// Creates an empty program with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `inst` at `addr` and widens the bounds to include it.
    ///
    /// Returns the instruction previously stored at `addr`, if any.
    pub fn insert(&mut self, addr: InstAddr, inst: Instruction) -> Option<Instruction> {
        self.bounds = Some(match self.bounds {
            None => (addr, addr),
            Some((entry, exit)) => (entry.min(addr), exit.max(addr)),
        });
        self.instructions.insert(addr, inst)
    }

    /// Returns the instruction at `addr`.
    pub fn get(&self, addr: InstAddr) -> Option<&Instruction> {
        self.instructions.get(&addr)
    }

    /// Returns true if an instruction is stored at `addr`.
    pub fn contains(&self, addr: InstAddr) -> bool {
        self.instructions.contains_key(&addr)
    }

    /// Returns `(entry, exit)`: the lowest and highest addresses present.
    pub const fn bounds(&self) -> Option<(InstAddr, InstAddr)> {
        self.bounds
    }

    /// Lowest address present; execution starts here.
    pub fn entry(&self) -> Option<InstAddr> {
        self.bounds.map(|(entry, _)| entry)
    }

    /// Highest address present; execution ends once the pointer moves past it.
    pub fn exit(&self) -> Option<InstAddr> {
        self.bounds.map(|(_, exit)| exit)
    }

    /// Size of the address range, `exit - entry + 1`, or 0 for an empty program.
    ///
    /// This is the "instructions in the code" figure of the final report.
    pub fn span(&self) -> u64 {
        self.bounds
            .map_or(0, |(entry, exit)| u64::from(exit.val() - entry.val()) + 1)
    }

    /// Number of addresses that hold an instruction.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterates over `(address, instruction)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (InstAddr, &Instruction)> + '_ {
        self.instructions.iter().map(|(addr, inst)| (*addr, inst))
    }
}
