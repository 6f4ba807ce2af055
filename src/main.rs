//! # 6502 HomeComputer BASIC
//!
//! Interactive terminal for the interpreter.
//!

fn main() {
    homebasic::term::main();
}
