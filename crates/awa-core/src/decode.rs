//! Line decoder.
//!
//! An instruction is written as the marker `awa` followed by a stream of bit
//! tokens. `wa` is a one bit and `awa` plus its trailing separator is a zero
//! bit; anything else is skipped a character at a time. The first five bits
//! select the opcode, the rest of the line is the parameter.
//!
//! Signed parameters cannot spell a one bit: a `wa` token there only marks
//! the value as negative.

use crate::instruction::Instruction;
use crate::opcode::{OPCODE_BITS, Opcode, ParamKind};

/// The three-letter marker that opens an instruction.
pub const MARKER: &str = "awa";

const ONE: &[u8] = b"wa";
const ZERO: &[u8] = b"awa";

/// Width consumed by a zero token: the marker plus its separator.
const ZERO_WIDTH: usize = 4;

/// Classification of the characters at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    One,
    Zero,
    Skip,
}

impl Token {
    fn width(self) -> usize {
        match self {
            Token::One => ONE.len(),
            Token::Zero => ZERO_WIDTH,
            Token::Skip => 1,
        }
    }
}

/// Cursor over the bit tokens of a single line.
struct BitCursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> BitCursor<'a> {
    fn new(line: &'a [u8], pos: usize) -> Self {
        Self { line, pos }
    }

    fn classify(&self) -> Token {
        let rest = &self.line[self.pos..];
        if rest.starts_with(ONE) {
            Token::One
        } else if rest.starts_with(ZERO) {
            Token::Zero
        } else {
            Token::Skip
        }
    }
}

impl Iterator for BitCursor<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pos >= self.line.len() {
            return None;
        }
        let token = self.classify();
        self.pos += token.width();
        Some(token)
    }
}

/// Decode one pre-filtered line into an instruction.
///
/// Lines without a marker, and lines whose opcode bits name no opcode,
/// decode as [`Instruction::NoOp`].
pub fn decode_line(line: &str) -> Instruction {
    let Some(start) = line.find(MARKER) else {
        return Instruction::NoOp;
    };
    let mut cursor = BitCursor::new(line.as_bytes(), start + MARKER.len());

    let mut value: u8 = 0;
    let mut bits = 0;
    while bits < OPCODE_BITS {
        match cursor.next() {
            Some(Token::One) => {
                value = (value << 1) | 1;
                bits += 1;
            }
            Some(Token::Zero) => {
                value <<= 1;
                bits += 1;
            }
            Some(Token::Skip) => {}
            None => break,
        }
    }

    let Some(opcode) = Opcode::from_value(value) else {
        return Instruction::NoOp;
    };

    let kind = opcode.param_kind();
    if kind == ParamKind::None {
        return Instruction::from_opcode(opcode);
    }

    let mut parameter: i32 = 0;
    let mut negative = false;
    for token in cursor {
        match (token, kind) {
            (Token::One, ParamKind::Signed) => negative = true,
            (Token::One, _) => parameter = (parameter << 1) | 1,
            (Token::Zero, _) => parameter <<= 1,
            (Token::Skip, _) => {}
        }
    }
    if negative {
        parameter = parameter.wrapping_neg();
    }

    Instruction::with_parameter(opcode, parameter)
}
