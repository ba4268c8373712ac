//! End-to-end decode and execution tests.
//!
//! These tests verify the complete source → decode → execute path.
//! Tests are organized into modules by functionality.

use awa::{Evaluation, Session};
use awa_core::{Instruction, encode_program};
use awa_vm::{Bubble, RuntimeError};

/// Run an already-decoded program and return its output.
pub fn run_output(program: Vec<Instruction>) -> String {
    eval_program(program).output
}

/// Run an already-decoded program.
pub fn eval_program(program: Vec<Instruction>) -> Evaluation {
    Session::new()
        .eval_program(program.clone())
        .unwrap_or_else(|e| panic!("run failed for {:?}: {}", program, e))
}

/// Write a program as awa text, then decode and run the text.
pub fn eval_text(program: &[Instruction]) -> Evaluation {
    let source = encode_program(program).expect("program should be expressible in awa");
    Session::new()
        .eval(&source)
        .unwrap_or_else(|e| panic!("run failed for {:?}: {}", source, e))
}

/// Run a program that is expected to fault.
pub fn run_error(program: Vec<Instruction>) -> RuntimeError {
    match Session::new().eval_program(program.clone()) {
        Ok(result) => panic!("expected {:?} to fault, got {:?}", program, result),
        Err(e) => e,
    }
}

pub fn singles(values: &[i32]) -> Vec<Bubble> {
    values.iter().map(|&v| Bubble::single(v)).collect()
}

// Test modules
mod decoding;
mod errors;
mod scenarios;
