use super::Val;
use crate::error;
use crate::lang::{parse_integer, Error, Ident, Kind};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// Accessor of a read-only variable, evaluated on every read.
pub enum Live {
    Integer(Box<dyn Fn() -> i32>),
    String(Box<dyn Fn() -> String>),
}

impl Live {
    pub fn kind(&self) -> Kind {
        match self {
            Live::Integer(_) => Kind::Integer,
            Live::String(_) => Kind::String,
        }
    }

    fn read(&self) -> Val {
        match self {
            Live::Integer(f) => Val::Integer(f()),
            Live::String(f) => Val::String(f()),
        }
    }
}

impl std::fmt::Debug for Live {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Live({:?})", self.kind())
    }
}

#[derive(Debug)]
pub enum Variable {
    User(Val),
    Live(Live),
}

impl Variable {
    pub fn is_live(&self) -> bool {
        matches!(self, Variable::Live(_))
    }

    /// Current value. Live variables call their accessor now, so two
    /// reads can differ.
    pub fn read(&self) -> Val {
        match self {
            Variable::User(val) => val.clone(),
            Variable::Live(live) => live.read(),
        }
    }
}

/// ## Variable memory
///
/// Keyed by name and kind; `a` and `a$` are different variables.

#[derive(Debug, Default)]
pub struct Var {
    vars: BTreeMap<Ident, Variable>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Install a live variable. Only the runtime does this, at start-up.
    pub fn define_live(&mut self, ident: Ident, live: Live) {
        debug_assert_eq!(ident.kind, live.kind());
        self.vars.insert(ident, Variable::Live(live));
    }

    pub fn find(&self, ident: &Ident) -> Option<&Variable> {
        self.vars.get(ident)
    }

    pub fn fetch(&self, ident: &Ident) -> Result<Val> {
        match self.find(ident) {
            Some(var) => Ok(var.read()),
            None => Err(error!(UndefinedVariable)),
        }
    }

    pub fn store(&mut self, ident: Ident, value: Val) -> Result<()> {
        if value.kind() != ident.kind {
            return Err(error!(SyntaxError));
        }
        match self.vars.get_mut(&ident) {
            Some(Variable::Live(_)) => Err(error!(ProtectedVariable)),
            Some(var) => {
                *var = Variable::User(value);
                Ok(())
            }
            None => {
                self.vars.insert(ident, Variable::User(value));
                Ok(())
            }
        }
    }

    /// Store text as typed by a user. Integer variables only accept a
    /// signed decimal integer; the table is untouched otherwise.
    pub fn store_raw(&mut self, ident: Ident, raw: &str) -> Result<()> {
        let value = match ident.kind {
            Kind::Integer => Val::Integer(parse_integer(raw.trim())?),
            Kind::String => Val::String(raw.to_string()),
        };
        self.store(ident, value)
    }

    pub fn remove(&mut self, ident: &Ident) -> Result<()> {
        match self.vars.get(ident) {
            Some(Variable::Live(_)) => Err(error!(ProtectedVariable)),
            Some(_) => {
                self.vars.remove(ident);
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Remove every user variable. Live variables stay.
    pub fn clear(&mut self) {
        self.vars.retain(|_, var| var.is_live());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Variable)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Rough storage cost, used by FREE.
    pub fn bytes_used(&self) -> usize {
        self.vars
            .values()
            .map(|var| match var {
                Variable::User(Val::String(s)) => 8 + s.len(),
                Variable::User(_) => 8,
                Variable::Live(_) => 0,
            })
            .sum()
    }
}
