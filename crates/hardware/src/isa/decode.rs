//! Assembly Line Decoder.
//!
//! This module translates one line of assembly source into an address and a decoded
//! `Instruction`. It performs:
//! 1. **Address extraction:** The leading integer becomes the instruction address.
//! 2. **Mnemonic lookup:** `MOV`, `ADD`, `LD`, `ST`, `CMP`, `JE`, `JMP`; anything else is fatal.
//! 3. **Operand parsing:** Fixed positional syntax per mnemonic. `ADD` is reclassified
//!    into its register or immediate form by the prefix of its second operand.
//!
//! Bracketed memory operands (`[Rm]`) decode to the register *identifier*; how that
//! identifier becomes a cache index is decided at execution time.

use crate::common::constants::{COMMENT_MARKER, MAX_ADDRESS, REGISTER_PREFIX};
use crate::common::{DecodeError, InstAddr, Reg};
use crate::isa::instruction::Instruction;

/// Expected-syntax descriptions used in `MalformedOperand` errors.
const EXPECT_REGISTER: &str = "register R1-R6";
const EXPECT_IMMEDIATE: &str = "8-bit integer";
const EXPECT_INDIRECT: &str = "bracketed register [Rm]";

/// Decodes a single source line.
///
/// `line` is the one-based line number used in error messages. Returns `Ok(None)`
/// for lines that are blank or hold only a `;` comment.
///
/// # Errors
///
/// Returns a [`DecodeError`] for a malformed address, an unknown mnemonic, a wrong
/// operand count, or an operand that does not match the mnemonic's syntax.
pub fn decode_line(line: usize, text: &str) -> Result<Option<(InstAddr, Instruction)>, DecodeError> {
    let code = text.split(COMMENT_MARKER).next().unwrap_or_default().trim();
    if code.is_empty() {
        return Ok(None);
    }

    let (addr_token, rest) = code
        .split_once(char::is_whitespace)
        .unwrap_or((code, ""));
    let addr = parse_address(line, addr_token)?;

    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err(DecodeError::MissingMnemonic { line });
    }
    let (mnemonic, operand_text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let operands = split_operands(operand_text);

    let inst = match mnemonic {
        "MOV" => {
            let [rd, imm] = expect_operands::<2>(line, "MOV", &operands)?;
            Instruction::Mov {
                rd: parse_reg(line, rd)?,
                imm: parse_imm(line, imm)?,
            }
        }
        "ADD" => {
            let [rd, src] = expect_operands::<2>(line, "ADD", &operands)?;
            let rd = parse_reg(line, rd)?;
            if src.starts_with(REGISTER_PREFIX) {
                Instruction::AddReg {
                    rd,
                    rs: parse_reg(line, src)?,
                }
            } else {
                Instruction::AddImm {
                    rd,
                    imm: parse_imm(line, src)?,
                }
            }
        }
        "LD" => {
            let [rd, base] = expect_operands::<2>(line, "LD", &operands)?;
            Instruction::Ld {
                rd: parse_reg(line, rd)?,
                base: parse_indirect(line, base)?,
            }
        }
        "ST" => {
            let [base, rs] = expect_operands::<2>(line, "ST", &operands)?;
            Instruction::St {
                base: parse_indirect(line, base)?,
                rs: parse_reg(line, rs)?,
            }
        }
        "CMP" => {
            let [rs1, rs2] = expect_operands::<2>(line, "CMP", &operands)?;
            Instruction::Cmp {
                rs1: parse_reg(line, rs1)?,
                rs2: parse_reg(line, rs2)?,
            }
        }
        "JE" => {
            let [target] = expect_operands::<1>(line, "JE", &operands)?;
            Instruction::Je {
                target: parse_imm(line, target)?,
            }
        }
        "JMP" => {
            let [target] = expect_operands::<1>(line, "JMP", &operands)?;
            Instruction::Jmp {
                target: parse_imm(line, target)?,
            }
        }
        other => {
            return Err(DecodeError::UnknownMnemonic {
                line,
                mnemonic: other.to_string(),
            });
        }
    };

    Ok(Some((addr, inst)))
}

/// Splits the operand field on commas. An empty field yields no operands.
fn split_operands(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        Vec::new()
    } else {
        text.split(',').map(str::trim).collect()
    }
}

/// Checks the operand count and hands the operands back as a fixed-size array.
fn expect_operands<'a, const N: usize>(
    line: usize,
    mnemonic: &'static str,
    operands: &[&'a str],
) -> Result<[&'a str; N], DecodeError> {
    <[&str; N]>::try_from(operands).map_err(|_| DecodeError::OperandCount {
        line,
        mnemonic,
        expected: N,
        found: operands.len(),
    })
}

fn parse_address(line: usize, token: &str) -> Result<InstAddr, DecodeError> {
    token
        .parse::<u32>()
        .ok()
        .filter(|addr| *addr <= MAX_ADDRESS)
        .map(InstAddr::new)
        .ok_or_else(|| DecodeError::MalformedAddress {
            line,
            token: token.to_string(),
        })
}

/// Parses `Rn` into the register with index `n - 1`.
fn parse_reg(line: usize, token: &str) -> Result<Reg, DecodeError> {
    let digits = token
        .strip_prefix(REGISTER_PREFIX)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| DecodeError::MalformedOperand {
            line,
            token: token.to_string(),
            expected: EXPECT_REGISTER,
        })?;

    digits
        .parse::<u8>()
        .ok()
        .and_then(Reg::from_number)
        .ok_or_else(|| DecodeError::RegisterOutOfRange {
            line,
            token: token.to_string(),
        })
}

/// Parses `[Rm]` into register `m - 1`.
fn parse_indirect(line: usize, token: &str) -> Result<Reg, DecodeError> {
    let inner = token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| DecodeError::MalformedOperand {
            line,
            token: token.to_string(),
            expected: EXPECT_INDIRECT,
        })?;
    parse_reg(line, inner.trim())
}

/// Parses a signed 8-bit immediate or jump target.
fn parse_imm(line: usize, token: &str) -> Result<i8, DecodeError> {
    let value = token
        .parse::<i64>()
        .map_err(|_| DecodeError::MalformedOperand {
            line,
            token: token.to_string(),
            expected: EXPECT_IMMEDIATE,
        })?;
    i8::try_from(value).map_err(|_| DecodeError::ImmediateOutOfRange {
        line,
        token: token.to_string(),
    })
}
