//! Scenario tests over decoded programs.

use awa::Session;
use awa_core::Instruction::*;
use awa_vm::{Bubble, Limits, Machine, RuntimeError};

use super::{eval_program, run_output, singles};

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn add_and_print() {
    assert_eq!(run_output(vec![Blow(5), Blow(3), Add, PrintNum, Terminate]), "8");
}

#[test]
fn divide_count_print() {
    let result = eval_program(vec![Blow(7), Blow(2), Divide, Count, PrintNum, Terminate]);
    assert_eq!(result.output, "2");
    assert_eq!(result.abyss.len(), 1);
    assert_eq!(result.abyss[0].count(), 2);
}

#[test]
fn divide_singles_quotient_and_remainder() {
    for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, 5), (100, 7)] {
        // a is blown last, so it is on top and becomes the dividend
        let result = eval_program(vec![Blow(b), Blow(a), Divide]);
        let (a, b) = (a as i32, b as i32);
        assert_eq!(result.abyss, vec![Bubble::double(vec![a / b, a % b])]);
    }
}

#[test]
fn subtract_takes_top_minus_next() {
    assert_eq!(run_output(vec![Blow(3), Blow(10), Subtract, PrintNum]), "7");
}

#[test]
fn multiply_broadcasts_over_double() {
    let program = vec![Blow(3), Blow(2), Blow(1), Surround(3), Blow(4), Multiply, PrintNum];
    assert_eq!(run_output(program), "4 8 12");
}

#[test]
fn add_doubles_keeps_longer_tail() {
    let program = vec![
        Blow(1),
        Blow(2),
        Surround(2),
        Blow(10),
        Blow(20),
        Blow(30),
        Surround(3),
        Add,
        PrintNum,
    ];
    // left = [30 20 10], right = [2 1]
    assert_eq!(run_output(program), "32 21 10");
}

// ============================================================================
// Double bubbles
// ============================================================================

#[test]
fn count_of_double_and_single() {
    for n in 1u8..=5 {
        let mut program: Vec<_> = (0..n).map(|i| Blow(i as i8)).collect();
        program.extend([Surround(n), Count, PrintNum]);
        assert_eq!(run_output(program), n.to_string());
    }
    assert_eq!(run_output(vec![Blow(9), Count, PrintNum]), "0");
}

#[test]
fn merge_singles_is_sum() {
    let result = eval_program(vec![Blow(2), Blow(3), Merge]);
    assert_eq!(result.abyss, singles(&[5]));
}

#[test]
fn merge_single_onto_double_concatenates() {
    let result = eval_program(vec![Blow(2), Blow(1), Surround(2), Blow(7), Merge]);
    assert_eq!(result.abyss, vec![Bubble::double(vec![7, 1, 2])]);
}

#[test]
fn surround_zero_is_empty() {
    let result = eval_program(vec![Surround(0)]);
    assert_eq!(result.abyss, vec![Bubble::double(vec![])]);
}

#[test]
fn surround_then_pop_restores_order() {
    let result = eval_program(vec![Blow(1), Blow(2), Blow(3), Surround(3), Pop]);
    assert_eq!(result.abyss, singles(&[3, 2, 1]));
}

#[test]
fn print_double_as_text() {
    // H i !
    let program = vec![Blow(55), Blow(21), Blow(8), Surround(3), Print];
    assert_eq!(run_output(program), "Hi!");
}

#[test]
fn print_num_negative_elements() {
    let program = vec![Blow(-5), Blow(5), Surround(2), PrintNum];
    assert_eq!(run_output(program), "5 ~5");
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn loop_cycles_back_to_label() {
    let mut machine = Machine::new(vec![Label(0), Blow(1), Jump(0)], Vec::new());
    let mut returns_to_start = 0;
    for _ in 0..30 {
        machine.step().unwrap();
        assert!(!machine.is_halted());
        if machine.pc() == 0 {
            returns_to_start += 1;
        }
    }
    assert_eq!(returns_to_start, 10);
}

#[test]
fn loop_hits_step_cap() {
    let session = Session::with_limits(Limits {
        max_steps: Some(100),
        max_depth: None,
    });
    let err = session
        .eval_program(vec![Label(0), Blow(1), Jump(0)])
        .unwrap_err();
    assert!(matches!(err, RuntimeError::StepLimit { limit: 100, .. }));
}

#[test]
fn countdown() {
    let program = vec![
        Blow(5),
        Label(3),
        Duplicate,
        PrintNum,
        Blow(-1),
        Add,
        Blow(0),
        EqualTo,
        Terminate,
        Pop,
        Jump(3),
    ];
    assert_eq!(run_output(program), "54321");
}

#[test]
fn greater_than_guards_print() {
    let guarded = |a: i8, b: i8| {
        run_output(vec![Blow(b), Blow(a), GreaterThan, PrintNum, Terminate])
    };
    assert_eq!(guarded(9, 1), "9");
    assert_eq!(guarded(1, 9), "");
}

#[test]
fn submerge_brings_bottom_up() {
    let program = vec![Blow(1), Blow(2), Blow(3), Submerge(0), PrintNum, PrintNum, PrintNum];
    assert_eq!(run_output(program), "213");
}

#[test]
fn noop_lines_only_advance() {
    let mut machine = Machine::new(vec![NoOp, NoOp, Blow(1)], Vec::new());
    machine.step().unwrap();
    assert_eq!(machine.pc(), 1);
    assert!(machine.abyss().is_empty());
}
