/*!
## Language Module

This module provides lexical analysis of the bytecode text format.
Each source line is independent and lexes to exactly one token.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use token::Operand;
pub use token::Token;

/// 0-based source line index. `None` when an error has no line context.
pub type LineNumber = Option<usize>;
