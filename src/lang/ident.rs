// Used by both the lexer and the variable store.

/// Packed variable name. One character lives in the low byte; with two
/// characters the first one moves to the high byte.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Name(u16);

impl Name {
    /// Pack the first one or two characters of `s`. The first character
    /// must be ASCII alphabetic, the second (if any) ASCII alphanumeric.
    pub fn from_str(s: &str) -> Option<Name> {
        let mut chars = s.bytes();
        let first = chars.next().filter(u8::is_ascii_alphabetic)?;
        let mut name = first as u16;
        if let Some(second) = chars.next().filter(u8::is_ascii_alphanumeric) {
            name = (name << 8) | second as u16;
        }
        Some(Name(name))
    }

    pub const fn pair(first: u8, second: u8) -> Name {
        Name((first as u16) << 8 | second as u16)
    }

    pub fn key(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.0 > 0xff {
            write!(f, "{}", (self.0 >> 8) as u8 as char)?;
        }
        write!(f, "{}", (self.0 & 0xff) as u8 as char)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Kind {
    Integer,
    String,
}

/// A variable reference as written: name plus kind (`a` or `a$`).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Ident {
    pub name: Name,
    pub kind: Kind,
}

impl Ident {
    pub fn new(name: Name, kind: Kind) -> Ident {
        Ident { name, kind }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::Integer => write!(f, "{}", self.name),
            Kind::String => write!(f, "{}$", self.name),
        }
    }
}
