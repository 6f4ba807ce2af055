/*!
# Rust Language Module

This Rust module provides lexical analysis of command lines: keywords,
line classification, the argument lexer and the error type shared by
the whole interpreter.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::{Ident, Kind, Name};
pub use lex::{parse_integer, Lexer};
pub use line::{Line, Statement};

pub mod token;

pub type LineNumber = u16;
