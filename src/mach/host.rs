//! Services the interpreter consumes but does not implement: the screen,
//! the keyboard line editor, the serial link to the program host, the
//! LED and the tone generator.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token. Raised asynchronously (Ctrl-C, ESC) and polled by
/// the runtime between program lines, listed lines and transferred
/// records.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Interrupt {
        Interrupt::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub trait Screen {
    fn put_str(&mut self, s: &str);
    /// Error lines. Hosts may style them; the default is plain output.
    fn put_error(&mut self, s: &str) {
        self.put_str(s)
    }
    fn clear(&mut self);
    fn home(&mut self);
    fn move_to(&mut self, x: u8, y: u8);
    fn show_cursor(&mut self, on: bool);
}

pub trait Keyboard {
    /// Collect one line of text. `None` if the read was interrupted or
    /// the input has ended.
    fn read_line(&mut self, interrupt: &Interrupt) -> Option<String>;
}

/// Line oriented link to the program host. Lines are sent and received
/// without their trailing newline.
pub trait Transport {
    fn send(&mut self, line: &str) -> io::Result<()>;
    fn receive(&mut self) -> io::Result<String>;
}

pub trait Devices {
    fn led(&mut self, on: bool);
    /// Play the keyboard synthesizer until the user quits.
    fn synth(&mut self, interrupt: &Interrupt);
}

pub trait Host: Screen + Keyboard + Transport + Devices {}

impl<T: Screen + Keyboard + Transport + Devices> Host for T {}
