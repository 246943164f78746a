use super::lex::lex;
use super::token::Token;

/// One source line: its 0-based index and the token it lexes to.

#[derive(Debug, PartialEq)]
pub struct Line {
    number: usize,
    token: Token,
}

impl Line {
    pub fn from_str(number: usize, s: &str) -> Line {
        Line {
            number,
            token: lex(s),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn into_token(self) -> Token {
        self.token
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_keeps_its_number() {
        let line = Line::from_str(7, "HALT");
        assert_eq!(line.number(), 7);
        assert_eq!(line.to_string(), "HALT");
    }
}
