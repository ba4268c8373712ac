//! Program loading.
//!
//! Source text is read line by line. Each line is filtered down to the
//! letters of the encoding and spaces, then decoded into exactly one
//! instruction, so blank and comment lines still occupy a program position.

use std::io::{self, BufRead};

use log::debug;

use crate::decode::decode_line;
use crate::instruction::{Instruction, Program};

/// Whether a character survives the line filter.
pub fn is_awa_char(c: char) -> bool {
    matches!(c, 'a' | 'A' | 'w' | 'W' | ' ')
}

/// Strip everything but `a`, `w` (either case) and spaces from a line.
pub fn clean_line(line: &str) -> String {
    line.chars().filter(|&c| is_awa_char(c)).collect()
}

/// Filter and decode a single raw source line.
pub fn parse_line(line: &str) -> Instruction {
    decode_line(&clean_line(line))
}

/// Decode a whole program held in memory.
pub fn parse_program(source: &str) -> Program {
    let program: Program = source.lines().map(parse_line).collect();
    debug!("decoded {} instructions", program.len());
    program
}

/// Decode a program from a buffered reader.
pub fn read_program<R: BufRead>(reader: R) -> io::Result<Program> {
    let mut program = Program::new();
    for (index, line) in reader.lines().enumerate() {
        let instruction = parse_line(&line?);
        debug!("line {}: {}", index + 1, instruction);
        program.push(instruction);
    }
    debug!("decoded {} instructions", program.len());
    Ok(program)
}
