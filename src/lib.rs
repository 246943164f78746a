//! # Pilha VM
//!
//! A stack-based bytecode virtual machine for a line-oriented textual
//! instruction format: one instruction per source line, symbolic
//! labels for control transfers, a data stack for all operand passing,
//! a flat variable store and a bounded call stack.
//!
//! The `lang` module lexes source lines, the `mach` module links and
//! executes them, and the `term` module is the command-line driver.

pub mod lang;
pub mod mach;
pub mod term;
