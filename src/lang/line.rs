use super::token::Word;
use super::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// One submitted line of text, classified.
#[derive(Debug, PartialEq)]
pub enum Line<'a> {
    Empty,
    /// Execute immediately.
    Direct(&'a str),
    /// A bare line number.
    Delete(LineNumber),
    /// A line number followed by a statement.
    Store(LineNumber, &'a str),
}

impl<'a> Line<'a> {
    pub fn new(s: &'a str) -> Result<Line<'a>> {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r');
        let s = s.trim_start_matches(' ');
        if s.is_empty() {
            return Ok(Line::Empty);
        }
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| s.len());
        if digits == 0 {
            return Ok(Line::Direct(s));
        }
        let number = s[..digits]
            .parse::<LineNumber>()
            .map_err(|_| error!(SyntaxError; "invalid line number"))?;
        let rest = s[digits..].trim();
        if rest.is_empty() {
            Ok(Line::Delete(number))
        } else {
            Ok(Line::Store(number, rest))
        }
    }
}

/// A command keyword and its unparsed argument text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Statement {
    word: Word,
    args: String,
}

impl Statement {
    /// Split off the first space delimited word and look it up in the
    /// keyword table. The arguments are kept as text.
    pub fn new(s: &str) -> Result<Statement> {
        let s = s.trim();
        let (keyword, args) = match s.find(' ') {
            Some(index) => (&s[..index], s[index..].trim_start()),
            None => (s, ""),
        };
        match Word::from_string(keyword) {
            Some(word) => Ok(Statement {
                word,
                args: args.to_string(),
            }),
            None => Err(error!(UnknownCommand)),
        }
    }

    pub fn word(&self) -> Word {
        self.word
    }

    pub fn args(&self) -> &str {
        &self.args
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.word)
        } else {
            write!(f, "{} {}", self.word, self.args)
        }
    }
}
