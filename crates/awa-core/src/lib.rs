//! AWA instruction set and decoder.
//!
//! AWA programs are written one instruction per line using nothing but the
//! syllables "awa" and "wa". This crate turns those lines into
//! [`Instruction`] values and back:
//!
//! - [`decode_line`] reads the bit stream hidden in a filtered line
//! - [`parse_program`] / [`read_program`] filter and decode whole sources
//! - [`encode_instruction`] writes the canonical spelling of an instruction
//! - [`disassemble`] produces a mnemonic listing
//!
//! # Example
//!
//! ```
//! use awa_core::{Instruction, parse_program};
//!
//! let program = parse_program("awa awa wa awa wa wa\nawa wa wa wa wa wa");
//! assert_eq!(program, vec![Instruction::Add, Instruction::Terminate]);
//! ```

mod decode;
mod disasm;
mod encode;
mod error;
mod instruction;
mod opcode;
mod source;

pub use decode::{MARKER, decode_line};
pub use disasm::{DisassembledInstr, disassemble};
pub use encode::{encode_instruction, encode_program};
pub use error::EncodeError;
pub use instruction::{Instruction, Program};
pub use opcode::{OPCODE_BITS, Opcode, ParamKind};
pub use source::{clean_line, is_awa_char, parse_line, parse_program, read_program};
