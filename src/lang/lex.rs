use super::{ident::*, token::*, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

fn is_basic_whitespace(c: char) -> bool {
    c == ' '
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_basic_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Parse a whole signed integer: optional `+` or `-`, then digits.
pub fn parse_integer(s: &str) -> Result<i32> {
    let digits = s.trim_start_matches(|c| c == '+' || c == '-');
    if s.len() - digits.len() > 1 || digits.is_empty() || !digits.chars().all(is_basic_digit) {
        return Err(error!(InvalidNumber));
    }
    s.parse::<i32>().map_err(|_| error!(InvalidNumber))
}

/// A cursor over the argument text of one command.
///
/// `peek` classifies the next lexeme without moving; the other methods
/// consume exactly the lexeme they recognise and leave the cursor
/// untouched when they fail to recognise anything.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    s: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Lexer<'a> {
        Lexer { s }
    }

    /// Everything not yet consumed, leading spaces included.
    pub fn rest(&self) -> &'a str {
        self.s
    }

    fn trimmed(&self) -> &'a str {
        self.s.trim_start_matches(is_basic_whitespace)
    }

    pub fn skip_whitespace(&mut self) {
        self.s = self.trimmed();
    }

    pub fn peek(&self) -> Token {
        let s = self.trimmed();
        let ch = match s.chars().next() {
            None | Some('\0') | Some(';') => return Token::End,
            Some(ch) => ch,
        };
        if is_basic_digit(ch) {
            return Token::Digits;
        }
        if ch == '"' {
            return Token::Quote;
        }
        if is_basic_alphabetic(ch) {
            let after = s.trim_start_matches(is_basic_alphanumeric);
            return match after.chars().next() {
                Some('$') => Token::StringVar,
                _ => Token::NumberVar,
            };
        }
        match Operator::from_char(ch) {
            Some(op) => Token::Operator(op),
            None => Token::Invalid,
        }
    }

    pub fn is_end(&self) -> bool {
        self.peek() == Token::End
    }

    /// Consume `ch` if it is the next non-space character.
    pub fn expect(&mut self, ch: char) -> bool {
        let s = self.trimmed();
        if s.starts_with(ch) {
            self.s = &s[ch.len_utf8()..];
            true
        } else {
            false
        }
    }

    pub fn operator(&mut self) -> Option<Operator> {
        if let Token::Operator(op) = self.peek() {
            self.skip_whitespace();
            self.s = &self.s[1..];
            Some(op)
        } else {
            None
        }
    }

    /// An optionally signed integer literal. Returns `None` without
    /// consuming anything if the next lexeme isn't one.
    pub fn integer(&mut self) -> Option<Result<i32>> {
        let s = self.trimmed();
        let sign = match s.chars().next() {
            Some('+') | Some('-') => 1,
            _ => 0,
        };
        let len = sign
            + s[sign..]
                .find(|c: char| !is_basic_digit(c))
                .unwrap_or_else(|| s.len() - sign);
        if len == sign {
            return None;
        }
        self.s = &s[len..];
        Some(parse_integer(&s[..len]))
    }

    /// An unsigned line number.
    pub fn line_number(&mut self) -> Option<Result<LineNumber>> {
        let s = self.trimmed();
        let len = s.find(|c: char| !is_basic_digit(c)).unwrap_or_else(|| s.len());
        if len == 0 {
            return None;
        }
        self.s = &s[len..];
        Some(
            s[..len]
                .parse::<LineNumber>()
                .map_err(|_| error!(SyntaxError; "invalid line number")),
        )
    }

    /// A double quoted string literal, returned without its quotes.
    pub fn string(&mut self) -> Result<&'a str> {
        let s = self.trimmed();
        if !s.starts_with('"') {
            return Err(error!(InvalidStringExpression));
        }
        match s[1..].find('"') {
            Some(end) => {
                self.s = &s[end + 2..];
                Ok(&s[1..end + 1])
            }
            None => Err(error!(MalformedString)),
        }
    }

    /// A variable reference. Only the first two characters of the name
    /// are significant; a trailing `$` makes it a string variable.
    pub fn ident(&mut self) -> Option<Ident> {
        let s = self.trimmed();
        let name = Name::from_str(s)?;
        let after = s.trim_start_matches(is_basic_alphanumeric);
        let (kind, after) = match after.strip_prefix('$') {
            Some(after) => (Kind::String, after),
            None => (Kind::Integer, after),
        };
        self.s = after;
        Some(Ident::new(name, kind))
    }

    /// A bare alphanumeric word such as `on` or `off`.
    pub fn word(&mut self) -> &'a str {
        let s = self.trimmed();
        let len = s
            .find(|c: char| !is_basic_alphanumeric(c))
            .unwrap_or_else(|| s.len());
        self.s = &s[len..];
        &s[..len]
    }
}
