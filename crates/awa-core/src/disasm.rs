//! Program listing for debugging.

use std::fmt;

use crate::instruction::Instruction;

/// A disassembled instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisassembledInstr {
    /// Program counter of the instruction.
    pub pc: usize,
    /// Mnemonic text (e.g. "blo 5").
    pub text: String,
}

impl fmt::Display for DisassembledInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}  {}", self.pc, self.text)
    }
}

/// Disassemble a program.
///
/// With `skip_noops` set, no-op lines are left out of the listing; the
/// remaining entries keep their original program counters.
pub fn disassemble(program: &[Instruction], skip_noops: bool) -> Vec<DisassembledInstr> {
    program
        .iter()
        .enumerate()
        .filter(|(_, instr)| !(skip_noops && **instr == Instruction::NoOp))
        .map(|(pc, instr)| DisassembledInstr {
            pc,
            text: instr.to_string(),
        })
        .collect()
}
