use std::rc::Rc;

/// What a single source line lexes to. Every line is exactly one of
/// these; there is no failure case.

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Blank line or full-line comment.
    Empty,
    /// `name:` label declaration.
    Label(Rc<str>),
    /// `MNEMONIC [operand]`. The mnemonic is upper-cased; whether it
    /// names a real operation is decided by the machine, not the lexer.
    Statement(Rc<str>, Operand),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    None,
    Integer(i64),
    Decimal(f64),
    Name(Rc<str>),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Empty => Ok(()),
            Label(name) => write!(f, "{}:", name),
            Statement(mnemonic, Operand::None) => write!(f, "{}", mnemonic),
            Statement(mnemonic, operand) => write!(f, "{} {}", mnemonic, operand),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operand::*;
        match self {
            None => Ok(()),
            Integer(n) => write!(f, "{}", n),
            Decimal(n) => write!(f, "{}", n),
            Name(s) => write!(f, "{}", s),
        }
    }
}
