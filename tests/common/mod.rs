#![allow(dead_code)]

use pilha::lang::Error;
use pilha::mach::{Program, Runtime};

pub fn exec(source: &str) -> String {
    exec_with_input(source, "")
}

pub fn exec_with_input(source: &str, input: &str) -> String {
    match try_exec(source, input) {
        Ok(output) => output,
        Err(error) => panic!("program failed: {}", error),
    }
}

pub fn exec_err(source: &str) -> Error {
    try_exec(source, "").unwrap_err()
}

pub fn exec_err_with_input(source: &str, input: &str) -> Error {
    try_exec(source, input).unwrap_err()
}

pub fn try_exec(source: &str, input: &str) -> Result<String, Error> {
    let program = Program::compile(source);
    let mut output: Vec<u8> = Vec::new();
    let mut runtime = Runtime::new(program, input.as_bytes(), &mut output)?;
    runtime.execute()?;
    Ok(String::from_utf8(output).expect("output is utf-8"))
}
