//! The AWA instruction set.
//!
//! Every opcode is identified by a 5-bit value. Values without an entry in
//! the table decode as [`Opcode::NoOp`].

/// Number of bits used to encode an opcode.
pub const OPCODE_BITS: u32 = 5;

/// Shape of the parameter an opcode carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// No parameter.
    None,
    /// 8-bit signed parameter.
    Signed,
    /// 8-bit unsigned parameter.
    Unsigned,
}

/// AWA opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Do nothing.
    NoOp = 0x00,
    /// Print the top bubble as AWASCII.
    Print = 0x01,
    /// Print the top bubble as a number.
    PrintNum = 0x02,
    /// Read a string (reserved).
    Read = 0x03,
    /// Read a number (reserved).
    ReadNum = 0x04,
    /// Push a signed 8-bit value.
    Blow = 0x05,
    /// Rotate the top of the abyss.
    Submerge = 0x06,
    /// Pop the top bubble, flattening a double bubble.
    Pop = 0x07,
    /// Duplicate the top bubble.
    Duplicate = 0x08,
    /// Wrap the top N bubbles into a double bubble.
    Surround = 0x09,
    /// Merge the top two bubbles.
    Merge = 0x0A,
    Add = 0x0B,
    Subtract = 0x0C,
    Multiply = 0x0D,
    /// Divide, yielding quotient and remainder for scalars.
    Divide = 0x0E,
    /// Count the elements in the top bubble.
    Count = 0x0F,
    /// Record the current position in a label slot.
    Label = 0x10,
    /// Jump to a label slot.
    Jump = 0x11,
    EqualTo = 0x12,
    LessThan = 0x13,
    GreaterThan = 0x14,
    /// Stop execution.
    Terminate = 0x1F,
}

impl Opcode {
    /// All assigned opcodes, in value order.
    pub const ALL: [Opcode; 22] = [
        Opcode::NoOp,
        Opcode::Print,
        Opcode::PrintNum,
        Opcode::Read,
        Opcode::ReadNum,
        Opcode::Blow,
        Opcode::Submerge,
        Opcode::Pop,
        Opcode::Duplicate,
        Opcode::Surround,
        Opcode::Merge,
        Opcode::Add,
        Opcode::Subtract,
        Opcode::Multiply,
        Opcode::Divide,
        Opcode::Count,
        Opcode::Label,
        Opcode::Jump,
        Opcode::EqualTo,
        Opcode::LessThan,
        Opcode::GreaterThan,
        Opcode::Terminate,
    ];

    /// Look up an opcode by its 5-bit value. Unassigned values yield `None`.
    pub const fn from_value(value: u8) -> Option<Opcode> {
        let op = match value {
            0x00 => Opcode::NoOp,
            0x01 => Opcode::Print,
            0x02 => Opcode::PrintNum,
            0x03 => Opcode::Read,
            0x04 => Opcode::ReadNum,
            0x05 => Opcode::Blow,
            0x06 => Opcode::Submerge,
            0x07 => Opcode::Pop,
            0x08 => Opcode::Duplicate,
            0x09 => Opcode::Surround,
            0x0A => Opcode::Merge,
            0x0B => Opcode::Add,
            0x0C => Opcode::Subtract,
            0x0D => Opcode::Multiply,
            0x0E => Opcode::Divide,
            0x0F => Opcode::Count,
            0x10 => Opcode::Label,
            0x11 => Opcode::Jump,
            0x12 => Opcode::EqualTo,
            0x13 => Opcode::LessThan,
            0x14 => Opcode::GreaterThan,
            0x1F => Opcode::Terminate,
            _ => return None,
        };
        Some(op)
    }

    /// The 5-bit value of this opcode.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parameter shape carried by this opcode.
    pub const fn param_kind(self) -> ParamKind {
        match self {
            Opcode::Blow => ParamKind::Signed,
            Opcode::Submerge | Opcode::Surround | Opcode::Label | Opcode::Jump => {
                ParamKind::Unsigned
            }
            _ => ParamKind::None,
        }
    }

    /// Whether this opcode carries a parameter.
    pub const fn has_parameter(self) -> bool {
        !matches!(self.param_kind(), ParamKind::None)
    }

    /// Three-letter mnemonic used by the disassembler.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::NoOp => "nop",
            Opcode::Print => "prn",
            Opcode::PrintNum => "pr1",
            Opcode::Read => "red",
            Opcode::ReadNum => "r3d",
            Opcode::Blow => "blo",
            Opcode::Submerge => "sbm",
            Opcode::Pop => "pop",
            Opcode::Duplicate => "dpl",
            Opcode::Surround => "srn",
            Opcode::Merge => "mrg",
            Opcode::Add => "4dd",
            Opcode::Subtract => "sub",
            Opcode::Multiply => "mul",
            Opcode::Divide => "div",
            Opcode::Count => "cnt",
            Opcode::Label => "lbl",
            Opcode::Jump => "jmp",
            Opcode::EqualTo => "eql",
            Opcode::LessThan => "lss",
            Opcode::GreaterThan => "gr8",
            Opcode::Terminate => "trm",
        }
    }
}
