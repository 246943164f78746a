/*!
## Machine Module

This module is the virtual machine: the instruction set, the numeric
value model, the data and call stacks, variable memory, label
resolution and the fetch-decode-execute runtime.

*/

/// Index of an instruction in a program.
pub type Address = usize;

mod link;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use link::Link;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Instruction;
pub use program::Program;
pub use runtime::Runtime;
pub use runtime::MAX_CALL_DEPTH;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
