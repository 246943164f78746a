/*!
## Terminal Module

The process boundary. Picks the program source (file argument or
stdin), wires the runtime to real stdio, and turns the first fatal
error into a styled one-line report and a non-zero exit status. All
process termination happens in `main.rs`; everything here returns.

*/

extern crate ansi_term;

use crate::error;
use crate::lang::Error;
use crate::mach::{Program, Runtime};
use ansi_term::Style;
use std::fs::File;
use std::io::{ErrorKind, Read};

/// Returns the process exit status: 0 on normal completion, 1 after a
/// fatal error has been reported to stderr.
pub fn main() -> i32 {
    match run() {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    }
}

fn run() -> Result<(), Error> {
    let stdin = std::io::stdin();
    let source = match std::env::args().nth(1) {
        Some(path) => load(&path)?,
        None => {
            // No file: the whole program text comes from stdin up
            // front. A later READ continues on the same stream.
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .map_err(|error| error!(IoError; error.to_string()))?;
            text
        }
    };
    let program = Program::compile(&source);
    let stdout = std::io::stdout();
    let mut runtime = Runtime::new(program, stdin.lock(), stdout.lock())?;
    runtime.execute()
}

fn load(path: &str) -> Result<String, Error> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            return match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(IoError; msg)),
            };
        }
    };
    let mut source = String::new();
    file.read_to_string(&mut source)
        .map_err(|error| error!(IoError; error.to_string()))?;
    Ok(source)
}
