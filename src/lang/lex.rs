use super::token::{Operand, Token};

/// Lex one source line. Never fails: a line is blank, a label
/// declaration, or a statement, and malformed operand text is simply
/// kept as a name.
pub fn lex(s: &str) -> Token {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Token::Empty;
    }
    let code = match trimmed.find('#') {
        Some(idx) => trimmed[..idx].trim(),
        None => trimmed,
    };
    if code.ends_with(':') {
        let label = code[..code.len() - 1].trim();
        return Token::Label(label.into());
    }
    let mut split = code.splitn(2, char::is_whitespace);
    let mnemonic = split.next().unwrap_or_default().to_ascii_uppercase();
    let operand = match split.next() {
        Some(rest) => operand(rest.trim()),
        None => Operand::None,
    };
    Token::Statement(mnemonic.into(), operand)
}

fn operand(text: &str) -> Operand {
    match number(text) {
        Some(op) => op,
        None => Operand::Name(text.into()),
    }
}

/// Numeric pattern: optional leading `-`, ASCII digits, at most one `.`.
fn number(text: &str) -> Option<Operand> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        || !digits.chars().any(|c| c.is_ascii_digit())
        || digits.matches('.').count() > 1
    {
        return None;
    }
    if digits.contains('.') {
        text.parse::<f64>().ok().map(Operand::Decimal)
    } else {
        match text.parse::<i64>() {
            Ok(n) => Some(Operand::Integer(n)),
            // Wider than i64; keep the value rather than the text.
            Err(_) => text.parse::<f64>().ok().map(Operand::Decimal),
        }
    }
}
