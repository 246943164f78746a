mod common;
use common::*;
use pilha::lang::ErrorCode;

#[test]
fn test_jmp_to_label_skips_code() {
    let source = "JMP fim\nPUSH 1\nPRINT\nfim:\nHALT\n";
    assert_eq!(exec(source), "");
}

#[test]
fn test_jz_jumps_on_zero() {
    let source = "PUSH 0\nJZ pula\nPUSH 1\nPRINT\npula:\nHALT\n";
    assert_eq!(exec(source), "");
    let source = "PUSH 2\nJZ pula\nPUSH 1\nPRINT\npula:\nHALT\n";
    assert_eq!(exec(source), "1\n");
}

#[test]
fn test_jnz_jumps_on_nonzero() {
    let source = "PUSH 2\nJNZ pula\nPUSH 1\nPRINT\npula:\nHALT\n";
    assert_eq!(exec(source), "");
    let source = "PUSH 0\nJNZ pula\nPUSH 1\nPRINT\npula:\nHALT\n";
    assert_eq!(exec(source), "1\n");
}

#[test]
fn test_countdown_loop() {
    let source = "\
PUSH 3
STORE n
loop:
LOAD n
JZ fim
LOAD n
PRINT
POP
LOAD n
PUSH 1
SUB
STORE n
JMP loop
fim:
HALT
";
    assert_eq!(exec(source), "3\n2\n1\n");
}

#[test]
fn test_numeric_jump_targets_resolve() {
    // Address 3 is the HALT; the PUSH/PRINT pair never runs.
    assert_eq!(exec("JMP 3\nPUSH 1\nPRINT\nHALT\n"), "");
}

#[test]
fn test_numeric_jump_out_of_range() {
    let error = exec_err("JMP 9\nHALT\n");
    assert_eq!(error.code(), ErrorCode::InvalidAddress);
    assert_eq!(error.line_number(), Some(0));
}

#[test]
fn test_call_returns_to_following_instruction() {
    let source = "\
CALL sub
PUSH 2
PRINT
HALT
sub:
PUSH 1
PRINT
POP
RET
";
    assert_eq!(exec(source), "1\n2\n");
}

#[test]
fn test_nested_calls() {
    let source = "\
CALL a
PUSH 3
PRINT
HALT
a:
CALL b
PUSH 2
PRINT
POP
RET
b:
PUSH 1
PRINT
POP
RET
";
    assert_eq!(exec(source), "1\n2\n3\n");
}

#[test]
fn test_ret_without_call() {
    let error = exec_err("RET\n");
    assert_eq!(error.code(), ErrorCode::MissingCall);
    assert_eq!(
        error.to_string(),
        "Erro na linha 1: RET sem CALL correspondente"
    );
}

#[test]
fn test_runaway_recursion_overflows_call_stack() {
    let error = exec_err("r:\nCALL r\n");
    assert_eq!(error.code(), ErrorCode::CallStackOverflow);
    assert_eq!(error.line_number(), Some(1));
    assert_eq!(
        error.to_string(),
        "Erro na linha 2: Limite de recursão excedido (1000)"
    );
}
