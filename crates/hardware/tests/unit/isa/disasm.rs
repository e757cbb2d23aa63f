//! # Disassembler Tests

use bytesim_core::common::{InstAddr, Reg};
use bytesim_core::isa::disasm::{disassemble, disassemble_program};
use bytesim_core::isa::instruction::Instruction;
use bytesim_core::sim::loader::parse_program;
use pretty_assertions::assert_eq;

fn r(n: u8) -> Reg {
    Reg::from_number(n).unwrap()
}

#[test]
fn test_display_matches_source_syntax() {
    let cases = [
        (Instruction::Mov { rd: r(1), imm: -5 }, "MOV R1, -5"),
        (Instruction::AddReg { rd: r(2), rs: r(3) }, "ADD R2, R3"),
        (Instruction::AddImm { rd: r(2), imm: 9 }, "ADD R2, 9"),
        (Instruction::Ld { rd: r(4), base: r(1) }, "LD R4, [R1]"),
        (Instruction::St { base: r(1), rs: r(6) }, "ST [R1], R6"),
        (Instruction::Cmp { rs1: r(5), rs2: r(6) }, "CMP R5, R6"),
        (Instruction::Je { target: 15 }, "JE 15"),
        (Instruction::Jmp { target: 0 }, "JMP 0"),
    ];
    for (inst, text) in cases {
        assert_eq!(inst.to_string(), text);
    }
}

#[test]
fn test_disassemble_prefixes_address() {
    let text = disassemble(InstAddr::new(12), &Instruction::Cmp { rs1: r(1), rs2: r(2) });
    assert_eq!(text, "12\tCMP R1, R2");
}

#[test]
fn test_program_listing_decodes_to_same_program() {
    let source = "10\tMOV R1, 5\n11\tMOV R2, 5\n12\tCMP R1, R2\n13\tJE 15\n14\tMOV R3, 1\n15\tADD R3, 2\n";
    let program = parse_program(source).unwrap();

    let listing = disassemble_program(&program);
    assert_eq!(listing, source);
    assert_eq!(parse_program(&listing).unwrap(), program);
}

#[test]
fn test_listing_is_in_address_order() {
    let program = parse_program("5\tJMP 7\n3\tMOV R1, 1\n4\tADD R1, R1").unwrap();
    assert_eq!(
        disassemble_program(&program),
        "3\tMOV R1, 1\n4\tADD R1, R1\n5\tJMP 7\n"
    );
}
