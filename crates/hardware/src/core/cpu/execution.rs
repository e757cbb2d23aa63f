//! Instruction Execution.
//!
//! This module implements one fetch-decode-execute step of the CPU. It performs the following:
//! 1. **Fetch:** Looks up the instruction at the instruction pointer.
//! 2. **Execute:** Applies the instruction to registers, flag, and local memory.
//! 3. **Timing:** Charges the instruction's cycle cost (memory cost depends on hit/miss).
//! 4. **Control Flow:** Advances or redirects the instruction pointer, validating jump targets.
//! 5. **Observability:** Traces each instruction and dumps the final machine state.

use super::Cpu;
use crate::common::constants::{CYCLES_ALU, CYCLES_BRANCH, CYCLES_CMP};
use crate::common::{ExecError, InstAddr, Reg};
use crate::config::IndirectMode;
use crate::core::units::alu::Alu;
use crate::isa::instruction::Instruction;
use crate::sim::program::Program;

impl Cpu {
    /// Returns true once the instruction pointer has moved past the program's exit.
    ///
    /// An empty program is finished before it starts.
    pub fn is_finished(&self, program: &Program) -> bool {
        program.exit().is_none_or(|exit| self.ip > exit)
    }

    /// Executes the instruction at the instruction pointer.
    ///
    /// The caller checks [`Cpu::is_finished`] first; stepping a finished CPU fails
    /// with [`ExecError::MissingInstruction`].
    ///
    /// # Errors
    ///
    /// * [`ExecError::MissingInstruction`] if no instruction is stored at the pointer.
    /// * [`ExecError::InvalidJumpTarget`] if a taken jump lands on a negative address,
    ///   below the entry, or on an address inside the program with no instruction.
    /// * [`ExecError::CacheIndexOutOfRange`] if a memory index is rejected by the index policy.
    pub fn step(&mut self, program: &Program) -> Result<(), ExecError> {
        let at = self.ip;
        let inst = *program
            .get(at)
            .ok_or(ExecError::MissingInstruction(at))?;

        self.stats.instructions_executed += 1;

        let cycles = match inst {
            Instruction::Mov { rd, imm } => {
                self.regs.write(rd, imm);
                self.ip = at.next();
                CYCLES_ALU
            }
            Instruction::AddReg { rd, rs } => {
                let sum = Alu::add(self.regs.read(rd), self.regs.read(rs));
                self.regs.write(rd, sum);
                self.ip = at.next();
                CYCLES_ALU
            }
            Instruction::AddImm { rd, imm } => {
                let sum = Alu::add(self.regs.read(rd), imm);
                self.regs.write(rd, sum);
                self.ip = at.next();
                CYCLES_ALU
            }
            Instruction::Cmp { rs1, rs2 } => {
                self.flag = Alu::equal(self.regs.read(rs1), self.regs.read(rs2));
                self.ip = at.next();
                CYCLES_CMP
            }
            Instruction::Je { target } => {
                self.ip = if self.flag {
                    self.jump(program, target)?
                } else {
                    at.next()
                };
                CYCLES_BRANCH
            }
            Instruction::Jmp { target } => {
                self.ip = self.jump(program, target)?;
                CYCLES_BRANCH
            }
            Instruction::Ld { rd, base } => {
                let index = self.memory_index(base)?;
                let (value, hit) = self.cache.read(index);
                self.regs.write(rd, value);
                self.stats.record_memory(false, hit);
                self.ip = at.next();
                self.cache.latency(hit)
            }
            Instruction::St { base, rs } => {
                let index = self.memory_index(base)?;
                let hit = self.cache.write(index, self.regs.read(rs));
                self.stats.record_memory(true, hit);
                self.ip = at.next();
                self.cache.latency(hit)
            }
        };

        self.stats.cycles += cycles;

        if self.trace {
            tracing::info!(ip = %at, inst = %inst, cycles, flag = self.flag, regs = %self.regs, "exec");
        } else {
            tracing::trace!(ip = %at, inst = %inst, cycles, flag = self.flag, regs = %self.regs, "exec");
        }

        Ok(())
    }

    /// Validates a jump target and counts the taken branch.
    ///
    /// Targets past the exit are allowed and end the run.
    fn jump(&mut self, program: &Program, target: i8) -> Result<InstAddr, ExecError> {
        let invalid = ExecError::InvalidJumpTarget {
            at: self.ip,
            target,
        };
        let dest = InstAddr::from_target(target).ok_or_else(|| invalid.clone())?;

        let lands_past_exit = program.exit().is_none_or(|exit| dest > exit);
        if !lands_past_exit && !program.contains(dest) {
            return Err(invalid);
        }

        self.stats.branches_taken += 1;
        Ok(dest)
    }

    /// Resolves the bracketed register of `LD`/`ST` to a cache slot.
    fn memory_index(&self, base: Reg) -> Result<u8, ExecError> {
        let raw = match self.indirect_mode {
            IndirectMode::RegisterId => base.id(),
            IndirectMode::RegisterValue => self.regs.read(base),
        };
        self.cache
            .resolve(raw)
            .ok_or(ExecError::CacheIndexOutOfRange {
                at: self.ip,
                index: raw,
            })
    }

    /// Logs the architectural state: pointer, flag, registers, and every touched memory slot.
    pub fn dump_state(&self) {
        tracing::info!(ip = %self.ip, flag = self.flag, "cpu state");
        tracing::info!("{}", self.regs);
        for (index, value) in self.cache.touched() {
            tracing::info!(index, value, "memory");
        }
    }
}
