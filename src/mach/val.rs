use crate::lang::Kind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Val {
    Integer(i32),
    String(String),
}

impl Val {
    pub fn kind(&self) -> Kind {
        match self {
            Val::Integer(_) => Kind::Integer,
            Val::String(_) => Kind::String,
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
