use std::rc::Rc;

/// ## Virtual machine instruction set
///
/// The machine has no registers. Every operation reads and writes the
/// data stack; control transfers target labels or literal addresses.
///
/// The set is closed: a mnemonic that names nothing here is carried as
/// `Unknown` so that loading stays total, and only fails if the
/// instruction is actually reached.

#[derive(Debug, PartialEq, Clone)]
pub enum Opcode {
    // *** Stack manipulation
    Push,
    Pop,

    // *** Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Neg,

    // *** Variables
    Store,
    Load,

    // *** Branch control
    Jmp,
    Jz,
    Jnz,
    Call,
    Ret,

    // *** Comparison
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,

    // *** Input/output
    Print,
    Read,

    // *** No-ops and termination
    Label,
    Empty,
    Halt,

    Unknown(Rc<str>),
}

impl Opcode {
    /// Mnemonics arrive upper-cased from the lexer.
    pub fn from_mnemonic(mnemonic: &str) -> Opcode {
        use Opcode::*;
        match mnemonic {
            "PUSH" => Push,
            "POP" => Pop,
            "ADD" => Add,
            "SUB" => Sub,
            "MUL" => Mul,
            "DIV" => Div,
            "MOD" => Mod,
            "NEG" => Neg,
            "STORE" => Store,
            "LOAD" => Load,
            "JMP" => Jmp,
            "JZ" => Jz,
            "JNZ" => Jnz,
            "CALL" => Call,
            "RET" => Ret,
            "EQ" => Eq,
            "NEQ" => Neq,
            "LT" => Lt,
            "GT" => Gt,
            "LE" => Le,
            "GE" => Ge,
            "PRINT" => Print,
            "READ" => Read,
            "LABEL" => Label,
            "EMPTY" => Empty,
            "HALT" => Halt,
            _ => Unknown(mnemonic.into()),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Mod => write!(f, "MOD"),
            Neg => write!(f, "NEG"),
            Store => write!(f, "STORE"),
            Load => write!(f, "LOAD"),
            Jmp => write!(f, "JMP"),
            Jz => write!(f, "JZ"),
            Jnz => write!(f, "JNZ"),
            Call => write!(f, "CALL"),
            Ret => write!(f, "RET"),
            Eq => write!(f, "EQ"),
            Neq => write!(f, "NEQ"),
            Lt => write!(f, "LT"),
            Gt => write!(f, "GT"),
            Le => write!(f, "LE"),
            Ge => write!(f, "GE"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Label => write!(f, "LABEL"),
            Empty => write!(f, "EMPTY"),
            Halt => write!(f, "HALT"),
            Unknown(s) => write!(f, "{}", s),
        }
    }
}
