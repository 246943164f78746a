use super::{Address, Link, Opcode, Operation, Program, Stack, Val, Var};
use crate::error;
use crate::lang::{Error, ErrorCode, Operand};
use std::io::{BufRead, Write};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Call stack depth cap. Converts runaway recursion into a reported
/// error instead of unbounded memory growth.
pub const MAX_CALL_DEPTH: usize = 1000;

/// ## Fetch-decode-execute engine
///
/// Owns the whole VM state for one run: program counter, data stack,
/// variable memory and call stack. Generic over the runtime input
/// source and the output sink so the driver can hand it real stdio
/// while tests hand it buffers, and so program source and `READ` input
/// stay independently configurable.

pub struct Runtime<R, W> {
    program: Program,
    link: Link,
    pc: Address,
    stack: Stack<Val>,
    vars: Var,
    calls: Stack<Address>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Runtime<R, W> {
    /// Links the program's labels; fails on a duplicate label before
    /// any instruction executes.
    pub fn new(program: Program, input: R, output: W) -> Result<Runtime<R, W>> {
        Runtime::with_call_depth(program, input, output, MAX_CALL_DEPTH)
    }

    pub fn with_call_depth(
        program: Program,
        input: R,
        output: W,
        max_call_depth: usize,
    ) -> Result<Runtime<R, W>> {
        let link = Link::link(&program)?;
        Ok(Runtime {
            program,
            link,
            pc: 0,
            stack: Stack::unbounded(ErrorCode::EmptyStack),
            vars: Var::new(),
            calls: Stack::bounded(
                ErrorCode::MissingCall,
                ErrorCode::CallStackOverflow,
                max_call_depth,
            ),
            input,
            output,
        })
    }

    /// Runs to `HALT`, the end of the program, or the first error.
    /// Errors come back annotated with the faulting instruction's
    /// source line; the engine never terminates the process itself.
    pub fn execute(&mut self) -> Result<()> {
        while let Some(instruction) = self.program.get(self.pc) {
            let line = instruction.line();
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(error) => return Err(error.in_line_number(Some(line))),
            }
        }
        Ok(())
    }

    /// One fetch-decode-execute cycle. `Ok(false)` means `HALT`.
    fn step(&mut self) -> Result<bool> {
        let instruction = match self.program.get(self.pc) {
            Some(instruction) => instruction,
            None => return Ok(false),
        };
        let opcode = instruction.opcode().clone();
        let operand = instruction.operand().clone();
        use Opcode::*;
        match opcode {
            Push => {
                let value = literal(&operand)?;
                self.stack.push(value)?;
                self.pc += 1;
            }
            Pop => {
                self.stack.pop()?;
                self.pc += 1;
            }
            Add => self.binary(Operation::sum)?,
            Sub => self.binary(Operation::subtract)?,
            Mul => self.binary(Operation::multiply)?,
            Div => self.binary(Operation::divide)?,
            Mod => self.binary(Operation::modulo)?,
            Neg => {
                let value = self.stack.pop()?;
                self.stack.push(Operation::negate(value)?)?;
                self.pc += 1;
            }
            Store => {
                let var_name = name(&operand, "STORE")?;
                let value = self.stack.pop()?;
                self.vars.store(&var_name, value);
                self.pc += 1;
            }
            Load => {
                let var_name = name(&operand, "LOAD")?;
                let value = self.vars.fetch(&var_name)?;
                self.stack.push(value)?;
                self.pc += 1;
            }
            Jmp => self.pc = self.resolve(&operand)?,
            Jz => {
                let condition = self.stack.pop()?;
                if condition.is_zero() {
                    self.pc = self.resolve(&operand)?;
                } else {
                    self.pc += 1;
                }
            }
            Jnz => {
                let condition = self.stack.pop()?;
                if !condition.is_zero() {
                    self.pc = self.resolve(&operand)?;
                } else {
                    self.pc += 1;
                }
            }
            Call => {
                // Depth check happens on the push, before resolution,
                // so runaway recursion reports overflow rather than a
                // late resolution error.
                self.calls.push(self.pc + 1)?;
                self.pc = self.resolve(&operand)?;
            }
            Ret => self.pc = self.calls.pop()?,
            Eq => self.binary(Operation::equal)?,
            Neq => self.binary(Operation::not_equal)?,
            Lt => self.binary(Operation::less)?,
            Gt => self.binary(Operation::greater)?,
            Le => self.binary(Operation::less_equal)?,
            Ge => self.binary(Operation::greater_equal)?,
            Print => {
                // PRINT reads the top of the stack without removing it.
                if self.stack.is_empty() {
                    return Err(error!(EmptyStack; "PRINT: pilha vazia"));
                }
                let value = *self.stack.peek()?;
                writeln!(self.output, "{}", value).map_err(io_error)?;
                self.pc += 1;
            }
            Read => {
                let mut text = String::new();
                self.input.read_line(&mut text).map_err(io_error)?;
                let value = text
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| error!(InvalidInput))?;
                self.stack.push(Val::Integer(value))?;
                self.pc += 1;
            }
            Label | Empty => self.pc += 1,
            Halt => return Ok(false),
            Unknown(mnemonic) => {
                return Err(error!(UnknownOpcode;
                    format!("Operação desconhecida: {}", mnemonic)))
            }
        }
        Ok(true)
    }

    fn binary(&mut self, operation: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(operation(lhs, rhs)?)?;
        self.pc += 1;
        Ok(())
    }

    fn resolve(&self, operand: &Operand) -> Result<Address> {
        self.link.resolve(operand, self.program.len())
    }
}

fn literal(operand: &Operand) -> Result<Val> {
    match operand {
        Operand::Integer(n) => Ok(Val::Integer(*n)),
        Operand::Decimal(n) => Ok(Val::Decimal(*n)),
        Operand::Name(_) | Operand::None => {
            Err(error!(InvalidOperand; "Operando inválido para PUSH"))
        }
    }
}

fn name(operand: &Operand, mnemonic: &str) -> Result<Rc<str>> {
    match operand {
        Operand::Name(s) => Ok(s.clone()),
        _ => Err(error!(InvalidOperand; format!("Operando inválido para {}", mnemonic))),
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(IoError; error.to_string())
}
