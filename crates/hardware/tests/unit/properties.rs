//! # Whole-Program Properties
//!
//! Generated straight-line programs checked against the cycle and hit/miss rules.

use crate::common::builder::program::ProgramBuilder;
use bytesim_core::Simulator;
use bytesim_core::config::Config;
use bytesim_core::sim::loader::parse_program;
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum AluOp {
    Mov(u8, i8),
    Add(u8, u8),
    AddImm(u8, i8),
}

fn reg() -> impl Strategy<Value = u8> {
    1u8..=6
}

fn alu_op() -> impl Strategy<Value = AluOp> {
    prop_oneof![
        (reg(), any::<i8>()).prop_map(|(rd, imm)| AluOp::Mov(rd, imm)),
        (reg(), reg()).prop_map(|(rd, rs)| AluOp::Add(rd, rs)),
        (reg(), any::<i8>()).prop_map(|(rd, imm)| AluOp::AddImm(rd, imm)),
    ]
}

fn alu_program(start: u32, ops: &[AluOp]) -> String {
    ops.iter()
        .fold(ProgramBuilder::at(start), |b, op| match *op {
            AluOp::Mov(rd, imm) => b.mov(rd, imm),
            AluOp::Add(rd, rs) => b.add(rd, rs),
            AluOp::AddImm(rd, imm) => b.addi(rd, imm),
        })
        .build()
}

proptest! {
    #[test]
    fn alu_programs_cost_one_cycle_per_instruction(
        start in 0u32..1000,
        ops in prop::collection::vec(alu_op(), 1..40),
    ) {
        let source = alu_program(start, &ops);
        let mut sim = Simulator::from_source(&source, &Config::default()).unwrap();
        let stats = sim.run().unwrap().clone();

        prop_assert_eq!(stats.instructions_executed, ops.len() as u64);
        prop_assert_eq!(stats.cycles, stats.instructions_executed);
        prop_assert_eq!(stats.cache_hits, 0);
        prop_assert_eq!(stats.load_store, 0);
        prop_assert_eq!(sim.report().instructions_in_code, ops.len() as u64);
    }

    #[test]
    fn alu_results_match_wrapping_arithmetic(ops in prop::collection::vec(alu_op(), 1..40)) {
        let mut model = [0i8; 6];
        for op in &ops {
            match *op {
                AluOp::Mov(rd, imm) => model[usize::from(rd - 1)] = imm,
                AluOp::Add(rd, rs) => {
                    let sum = model[usize::from(rd - 1)].wrapping_add(model[usize::from(rs - 1)]);
                    model[usize::from(rd - 1)] = sum;
                }
                AluOp::AddImm(rd, imm) => {
                    model[usize::from(rd - 1)] = model[usize::from(rd - 1)].wrapping_add(imm);
                }
            }
        }

        let mut sim = Simulator::from_source(&alu_program(0, &ops), &Config::default()).unwrap();
        let _ = sim.run().unwrap();
        prop_assert_eq!(sim.cpu.regs.values(), model);
    }

    #[test]
    fn only_first_touch_of_a_slot_misses(
        accesses in prop::collection::vec((any::<bool>(), reg(), reg()), 1..40),
    ) {
        let builder = accesses.iter().fold(ProgramBuilder::new(), |b, &(store, base, other)| {
            if store { b.st(base, other) } else { b.ld(other, base) }
        });
        let mut sim = Simulator::from_source(&builder.build(), &Config::default()).unwrap();
        let stats = sim.run().unwrap().clone();

        let mut distinct: Vec<u8> = accesses.iter().map(|&(_, base, _)| base).collect();
        distinct.sort_unstable();
        distinct.dedup();
        let misses = distinct.len() as u64;
        let hits = accesses.len() as u64 - misses;

        prop_assert_eq!(stats.cache_misses, misses);
        prop_assert_eq!(stats.cache_hits, hits);
        prop_assert_eq!(stats.load_store, accesses.len() as u64);
        prop_assert_eq!(stats.cycles, misses * 40 + hits * 2);
    }

    #[test]
    fn span_covers_lowest_to_highest_address(
        addrs in prop::collection::btree_set(0u32..5000, 1..30),
    ) {
        let source: String = addrs
            .iter()
            .map(|addr| format!("{addr}\tMOV R1, 1\n"))
            .collect();
        let program = parse_program(&source).unwrap();

        let lo = *addrs.iter().next().unwrap();
        let hi = *addrs.iter().next_back().unwrap();
        prop_assert_eq!(program.len(), addrs.len());
        prop_assert_eq!(program.span(), u64::from(hi - lo) + 1);
    }
}
