//! # 6502 HomeComputer BASIC
//!
//! The line-numbered BASIC of a small 6502 home computer: integers and
//! strings, left-to-right arithmetic, a program host for saving and
//! loading programs over a serial link.
//!
//! Run the executable in a terminal. If you get the following, you have
//! achieved success.
//! ```text
//! 6502 HomeComputer ready!
//! 32768 bytes free.
//! █
//! ```
//!
//! Programs are stored in the `programs` directory, or the directory
//! named by `HOMEBASIC_PROGRAMS`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
