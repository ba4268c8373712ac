//! Canonical awa text for instructions.
//!
//! The canonical spelling is the marker followed by one token per bit,
//! each preceded by a single space: ` wa` for one and ` awa` for zero.
//! Unsigned parameters are written as eight bits.

use crate::decode::MARKER;
use crate::error::EncodeError;
use crate::instruction::Instruction;
use crate::opcode::{OPCODE_BITS, ParamKind};

const PARAM_BITS: u32 = 8;

fn push_bits(out: &mut String, value: u32, width: u32) {
    for shift in (0..width).rev() {
        if (value >> shift) & 1 == 1 {
            out.push_str(" wa");
        } else {
            out.push_str(" awa");
        }
    }
}

/// Render an instruction as a single line of canonical awa text.
pub fn encode_instruction(instruction: &Instruction) -> Result<String, EncodeError> {
    let opcode = instruction.opcode();
    let mut out = String::from(MARKER);
    push_bits(&mut out, opcode.value() as u32, OPCODE_BITS);

    match (opcode.param_kind(), instruction.parameter()) {
        (ParamKind::Unsigned, Some(p)) => push_bits(&mut out, p as u32, PARAM_BITS),
        // A signed parameter decodes from zero bits only, so zero is its sole
        // spelling and needs no tokens at all.
        (ParamKind::Signed, Some(0)) => {}
        (ParamKind::Signed, Some(_)) => {
            return Err(EncodeError::Unrepresentable {
                instruction: *instruction,
            });
        }
        _ => {}
    }

    Ok(out)
}

/// Render a program, one instruction per line.
pub fn encode_program(program: &[Instruction]) -> Result<String, EncodeError> {
    let lines = program
        .iter()
        .map(encode_instruction)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
