mod common;
use common::*;
use pilha::mach::{Opcode, Program};

#[test]
fn test_parsing_preserves_line_count_and_order() {
    let source = "PUSH 1\n\n# comentário\ninicio:\nADD # soma\nHALT\n";
    let program = Program::compile(source);
    assert_eq!(program.len(), 6);
    for (addr, instruction) in program.instructions().iter().enumerate() {
        assert_eq!(instruction.line(), addr);
    }
}

#[test]
fn test_blank_and_comment_lines_keep_line_numbers_aligned() {
    // The DIV sits on the fifth line; the error must say so even with
    // no-op lines above it.
    let source = "# cabeçalho\n\nPUSH 1\nPUSH 0\nDIV\nHALT\n";
    let error = exec_err(source);
    assert_eq!(error.line_number(), Some(4));
    assert_eq!(error.to_string(), "Erro na linha 5: Divisão por zero");
}

#[test]
fn test_label_lines_execute_as_noops() {
    assert_eq!(exec("a:\nb:\nPUSH 1\nPRINT\nHALT\n"), "1\n");
}

#[test]
fn test_opcodes_are_case_insensitive() {
    assert_eq!(exec("push 2\npUsH 3\nadd\nprint\nhalt\n"), "5\n");
}

#[test]
fn test_malformed_operands_parse_as_names() {
    // "1-2" is not a number; parsing keeps it and PUSH rejects it at
    // execution time.
    let program = Program::compile("PUSH 1-2\n");
    assert_eq!(*program.get(0).unwrap().opcode(), Opcode::Push);
    let error = exec_err("PUSH 1-2\n");
    assert_eq!(error.line_number(), Some(0));
}

#[test]
fn test_decimal_literals() {
    assert_eq!(exec("PUSH 1.5\nPUSH 1.5\nADD\nPRINT\nHALT\n"), "3\n");
    assert_eq!(exec("PUSH -0.5\nPRINT\nHALT\n"), "-0.5\n");
}
