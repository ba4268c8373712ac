use std::fmt;

use crate::opcode::Opcode;

/// A decoded instruction: an opcode together with its resolved parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Instruction {
    #[default]
    NoOp,
    Print,
    PrintNum,
    Read,
    ReadNum,
    Blow(i8),
    Submerge(u8),
    Pop,
    Duplicate,
    Surround(u8),
    Merge,
    Add,
    Subtract,
    Multiply,
    Divide,
    Count,
    Label(u8),
    Jump(u8),
    EqualTo,
    LessThan,
    GreaterThan,
    Terminate,
}

/// A decoded program. Positions in the sequence are program counter values.
pub type Program = Vec<Instruction>;

impl Instruction {
    /// Build an instruction from an opcode and a raw parameter.
    ///
    /// The parameter is truncated to the opcode's width; it is ignored for
    /// opcodes without a parameter.
    pub fn with_parameter(opcode: Opcode, parameter: i32) -> Self {
        match opcode {
            Opcode::NoOp => Instruction::NoOp,
            Opcode::Print => Instruction::Print,
            Opcode::PrintNum => Instruction::PrintNum,
            Opcode::Read => Instruction::Read,
            Opcode::ReadNum => Instruction::ReadNum,
            Opcode::Blow => Instruction::Blow(parameter as i8),
            Opcode::Submerge => Instruction::Submerge(parameter as u8),
            Opcode::Pop => Instruction::Pop,
            Opcode::Duplicate => Instruction::Duplicate,
            Opcode::Surround => Instruction::Surround(parameter as u8),
            Opcode::Merge => Instruction::Merge,
            Opcode::Add => Instruction::Add,
            Opcode::Subtract => Instruction::Subtract,
            Opcode::Multiply => Instruction::Multiply,
            Opcode::Divide => Instruction::Divide,
            Opcode::Count => Instruction::Count,
            Opcode::Label => Instruction::Label(parameter as u8),
            Opcode::Jump => Instruction::Jump(parameter as u8),
            Opcode::EqualTo => Instruction::EqualTo,
            Opcode::LessThan => Instruction::LessThan,
            Opcode::GreaterThan => Instruction::GreaterThan,
            Opcode::Terminate => Instruction::Terminate,
        }
    }

    /// Build a parameterless instruction.
    pub fn from_opcode(opcode: Opcode) -> Self {
        Self::with_parameter(opcode, 0)
    }

    /// The opcode of this instruction.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::NoOp => Opcode::NoOp,
            Instruction::Print => Opcode::Print,
            Instruction::PrintNum => Opcode::PrintNum,
            Instruction::Read => Opcode::Read,
            Instruction::ReadNum => Opcode::ReadNum,
            Instruction::Blow(_) => Opcode::Blow,
            Instruction::Submerge(_) => Opcode::Submerge,
            Instruction::Pop => Opcode::Pop,
            Instruction::Duplicate => Opcode::Duplicate,
            Instruction::Surround(_) => Opcode::Surround,
            Instruction::Merge => Opcode::Merge,
            Instruction::Add => Opcode::Add,
            Instruction::Subtract => Opcode::Subtract,
            Instruction::Multiply => Opcode::Multiply,
            Instruction::Divide => Opcode::Divide,
            Instruction::Count => Opcode::Count,
            Instruction::Label(_) => Opcode::Label,
            Instruction::Jump(_) => Opcode::Jump,
            Instruction::EqualTo => Opcode::EqualTo,
            Instruction::LessThan => Opcode::LessThan,
            Instruction::GreaterThan => Opcode::GreaterThan,
            Instruction::Terminate => Opcode::Terminate,
        }
    }

    /// The parameter of this instruction, widened to `i32`.
    pub fn parameter(&self) -> Option<i32> {
        match *self {
            Instruction::Blow(v) => Some(v as i32),
            Instruction::Submerge(v)
            | Instruction::Surround(v)
            | Instruction::Label(v)
            | Instruction::Jump(v) => Some(v as i32),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.opcode().mnemonic();
        match self.parameter() {
            Some(p) => write!(f, "{} {}", mnemonic, p),
            None => f.write_str(mnemonic),
        }
    }
}
