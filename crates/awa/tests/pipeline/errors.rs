//! Runtime fault tests.

use awa_core::Instruction::*;
use awa_vm::{ArithmeticError, Fault, RuntimeError, StackError};

use super::run_error;

#[test]
fn pop_empty_abyss() {
    let err = run_error(vec![Pop]);
    assert_eq!(err.pc(), 0);
    assert!(matches!(
        err,
        RuntimeError::Fault {
            source: Fault::Stack(StackError::Underflow { .. }),
            ..
        }
    ));
}

#[test]
fn print_empty_abyss() {
    let err = run_error(vec![NoOp, NoOp, Print]);
    assert_eq!(err.pc(), 2);
}

#[test]
fn duplicate_empty_abyss() {
    let err = run_error(vec![Duplicate]);
    assert!(matches!(err, RuntimeError::Fault { instruction: Duplicate, .. }));
}

#[test]
fn add_with_one_bubble() {
    let err = run_error(vec![Blow(1), Add]);
    assert!(matches!(err, RuntimeError::Fault { pc: 1, instruction: Add, .. }));
}

#[test]
fn divide_by_zero() {
    let err = run_error(vec![Blow(0), Blow(4), Divide]);
    assert!(matches!(
        err,
        RuntimeError::Fault {
            source: Fault::Arithmetic(ArithmeticError::DivisionByZero),
            ..
        }
    ));
}

#[test]
fn count_empty_abyss() {
    let err = run_error(vec![Count]);
    assert!(matches!(err, RuntimeError::Fault { instruction: Count, .. }));
}

#[test]
fn fault_message_names_position_and_instruction() {
    let err = run_error(vec![Blow(1), Surround(3)]);
    let message = err.to_string();
    assert!(message.contains("pc 1"), "{}", message);
    assert!(message.contains("srn 3"), "{}", message);
    assert!(message.contains("underflow"), "{}", message);
}

#[test]
fn fault_stops_execution() {
    let session = awa::Session::new();
    let mut out = Vec::new();
    let result = session.run(vec![Blow(1), PrintNum, Pop, Blow(2), PrintNum], &mut out);
    assert!(result.is_err());
    assert_eq!(out, b"1");
}
