/*!
## Rust Machine Module

This Rust module is the interpreter proper: variable memory, expression
evaluation, program memory, the command runtime and the program host
link.

*/

/// Longest line the line editor accepts.
pub const MAX_LINE_LEN: usize = 79;
/// Memory pool reported by `FREE`.
pub const MEMORY_SIZE: usize = 32768;

mod clock;
mod eval;
mod host;
mod listing;
mod operation;
mod runtime;
mod val;
mod var;

pub mod transfer;

pub use clock::Clock;
pub use clock::SystemClock;
pub use eval::Eval;
pub use host::{Devices, Host, Interrupt, Keyboard, Screen, Transport};
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Runtime;
pub use val::Val;
pub use var::{Live, Var, Variable};

#[cfg(test)]
mod tests;
