//! Tests that go through awa source text.

use awa::Session;
use awa_core::Instruction::{self, *};
use awa_core::{decode_line, encode_instruction, parse_program};

use super::eval_text;

#[test]
fn counting_from_text() {
    // Only zero can be blown from text, so build numbers by counting.
    let program = [Blow(0), Blow(0), Blow(0), Surround(3), Count, PrintNum, Terminate];
    let result = eval_text(&program);
    assert_eq!(result.output, "3");
}

#[test]
fn printing_from_text() {
    // Count of a ten-element double bubble is 10, AWASCII 'S'
    let mut program = vec![Blow(0); 10];
    program.extend([Surround(10), Count, Print]);
    assert_eq!(eval_text(&program).output, "S");
}

#[test]
fn handwritten_source_with_noise() {
    let source = "\
awa awa awa wa awa wa          -- blo 0
awa awa awa wa awa wa          -- blo 0
this line has no marker at all
awa awa wa awa awa wa; awa awa awa wa awa   -- srn 2
awa awa wa wa wa wa            -- cnt
awa awa awa awa wa awa         -- pr1
awa wa wa wa wa wa             -- trm
";
    let program = parse_program(source);
    assert_eq!(
        program,
        vec![Blow(0), Blow(0), NoOp, Surround(2), Count, PrintNum, Terminate]
    );
    let result = Session::new().eval(source).unwrap();
    assert_eq!(result.output, "2");
}

#[test]
fn canonical_reencoding_is_stable() {
    let lines = [
        "awa wa awa awa awa awa wa wa",
        "awa awa awa wa wa awa wa awa wa",
        "awa awa wa awa awa wa wa wa wa wa wa wa wa wa wa",
        "awawa",
        "",
    ];
    for line in lines {
        let decoded = decode_line(line);
        let canonical = encode_instruction(&decoded).unwrap();
        assert_eq!(decode_line(&canonical), decoded, "line {:?}", line);
        assert_eq!(encode_instruction(&decode_line(&canonical)).unwrap(), canonical);
    }
}

#[test]
fn unmarked_line_is_a_noop_step() {
    let program = parse_program("wa wa wa\nawa wa wa wa wa wa");
    assert_eq!(program, vec![NoOp, Terminate]);
    let result = Session::new().eval("wa wa wa\nawa wa wa wa wa wa").unwrap();
    assert!(result.abyss.is_empty());
}

#[test]
fn every_opcode_round_trips_through_text() {
    let program: Vec<Instruction> = awa_core::Opcode::ALL
        .iter()
        .map(|&op| Instruction::from_opcode(op))
        .collect();
    let source = awa_core::encode_program(&program).unwrap();
    assert_eq!(parse_program(&source), program);
}
