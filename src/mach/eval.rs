use super::{Operation, Val, Var};
use crate::error;
use crate::lang::token::{Operator, Token};
use crate::lang::{Error, Lexer};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Number expressions are terms joined by `+ - * / %`, folded strictly
/// left to right with no precedence: `10 - 2 * 3` is `(10 - 2) * 3`.
/// String expressions are a single literal or a single string variable.
/// Evaluation stops at the first lexeme that isn't part of the
/// expression; the caller decides whether what follows is acceptable.
pub struct Eval<'a, 'b> {
    lex: &'a mut Lexer<'b>,
    var: &'a Var,
}

impl<'a, 'b> Eval<'a, 'b> {
    pub fn new(lex: &'a mut Lexer<'b>, var: &'a Var) -> Eval<'a, 'b> {
        Eval { lex, var }
    }

    pub fn number_term(&mut self) -> Result<i32> {
        match self.lex.peek() {
            Token::Digits | Token::Operator(Operator::Plus) | Token::Operator(Operator::Minus) => {
                match self.lex.integer() {
                    Some(result) => result,
                    None => Err(error!(InvalidNumberExpression)),
                }
            }
            Token::NumberVar => match self.lex.ident() {
                Some(ident) => match self.var.fetch(&ident)? {
                    Val::Integer(n) => Ok(n),
                    Val::String(_) => Err(error!(InvalidNumberExpression)),
                },
                None => Err(error!(InvalidNumberExpression)),
            },
            _ => Err(error!(InvalidNumberExpression)),
        }
    }

    pub fn number_expr(&mut self) -> Result<i32> {
        let mut acc = self.number_term()?;
        loop {
            match self.lex.peek() {
                Token::Operator(Operator::Equal) => break,
                Token::Operator(_) => {
                    let op = match self.lex.operator() {
                        Some(op) => op,
                        None => break,
                    };
                    let rhs = self.number_term()?;
                    acc = Operation::apply(op, acc, rhs)?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    pub fn string_expr(&mut self) -> Result<String> {
        let s = match self.lex.peek() {
            Token::Quote => self.lex.string()?.to_string(),
            Token::StringVar => match self.lex.ident() {
                Some(ident) => match self.var.fetch(&ident)? {
                    Val::String(s) => s,
                    Val::Integer(_) => return Err(error!(InvalidStringExpression)),
                },
                None => return Err(error!(InvalidStringExpression)),
            },
            _ => return Err(error!(InvalidStringExpression)),
        };
        if let Token::Operator(_) = self.lex.peek() {
            return Err(error!(SyntaxError));
        }
        Ok(s)
    }

    /// A string expression if one starts here, otherwise a number
    /// expression.
    pub fn expr(&mut self) -> Result<Val> {
        match self.lex.peek() {
            Token::Quote | Token::StringVar => Ok(Val::String(self.string_expr()?)),
            _ => Ok(Val::Integer(self.number_expr()?)),
        }
    }
}
