use super::errors::AsmError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Identifier(String),
    Number(i64),
    Delimiter(char),
    /// `N(reg)` composite. The lexer never emits this; the parser builds it
    /// when a Number is immediately followed by `(`.
    OffsetAndBase(i64, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

/// Tokenize a whole source text. Numbers are carried as `i64` so that
/// range checking happens in the parser, against the field width of the
/// instruction they end up in.
pub fn lex(text: &str) -> Result<Vec<Token>, AsmError> {
    let chars: Vec<char> = text.chars().collect();
    let mut toks = Vec::new();
    let mut line = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\r' => i += 1,
            '\n' => {
                toks.push(Token { kind: TokenKind::Delimiter('\n'), line });
                line += 1;
                i += 1;
            }
            '#' => {
                // comment runs to end of line; the newline itself is lexed next
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            _ if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_ascii_alphanumeric() || chars[i] == '_' || chars[i] == '.')
                {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                toks.push(Token { kind: TokenKind::Identifier(name), line });
            }
            _ if c.is_ascii_digit() || ((c == '+' || c == '-') && digit_follows(&chars, i)) => {
                let negative = c == '-';
                if c == '+' || c == '-' {
                    i += 1;
                }
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_hexdigit() || chars[i] == 'x') {
                    i += 1;
                }
                let body: String = chars[start..i].iter().collect();
                let value = parse_number(&body, negative).ok_or_else(|| AsmError::Lex {
                    line,
                    msg: format!("malformed number: {body}"),
                })?;
                toks.push(Token { kind: TokenKind::Number(value), line });
            }
            _ => {
                toks.push(Token { kind: TokenKind::Delimiter(c), line });
                i += 1;
            }
        }
    }
    Ok(toks)
}

fn digit_follows(chars: &[char], i: usize) -> bool {
    chars.get(i + 1).map_or(false, |c| c.is_ascii_digit())
}

// Base rule: a letter in the second position selects an 0x/0b prefix,
// anything else is decimal.
fn parse_number(body: &str, negative: bool) -> Option<i64> {
    let bytes = body.as_bytes();
    let magnitude = if bytes.len() >= 3 && bytes[1].is_ascii_alphabetic() {
        match &body[..2] {
            "0x" => i64::from_str_radix(&body[2..], 16).ok()?,
            "0b" => i64::from_str_radix(&body[2..], 2).ok()?,
            _ => return None,
        }
    } else {
        body.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}
