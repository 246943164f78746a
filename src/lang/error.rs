use super::LineNumber;

/// Fatal interpreter error. Every error terminates the run; the line
/// number is attached where the faulting instruction is known and is
/// reported 1-based.

pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message,
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateLabel,
    EmptyStack,
    UndefinedVariable,
    UnresolvedLabel,
    InvalidAddress,
    InvalidOperand,
    DivisionByZero,
    CallStackOverflow,
    MissingCall,
    UnknownOpcode,
    InvalidInput,
    Overflow,
    IoError,
    FileNotFound,
}

impl ErrorCode {
    fn as_str(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            DuplicateLabel => "Label duplicado",
            EmptyStack => "Pop em pilha vazia",
            UndefinedVariable => "Variável não definida",
            UnresolvedLabel => "Label não encontrado",
            InvalidAddress => "Endereço deve ser inteiro ou label",
            InvalidOperand => "Operando inválido",
            DivisionByZero => "Divisão por zero",
            CallStackOverflow => "Limite de recursão excedido",
            MissingCall => "RET sem CALL correspondente",
            UnknownOpcode => "Operação desconhecida",
            InvalidInput => "Entrada inválida: esperado um número",
            Overflow => "Overflow aritmético",
            IoError => "Erro de E/S",
            FileNotFound => "Arquivo não encontrado",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let body = if self.message.is_empty() {
            self.code.as_str()
        } else {
            self.message.as_str()
        };
        match self.line_number {
            Some(line) => write!(f, "Erro na linha {}: {}", line + 1, body),
            None => write!(f, "{}", body),
        }
    }
}
