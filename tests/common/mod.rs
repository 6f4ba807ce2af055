#![allow(dead_code)]
use homebasic::mach::transfer::{Memory, Server, Storage};
use homebasic::mach::{Clock, Devices, Interrupt, Keyboard, Runtime, Screen, Transport};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// Scripted host: screen output is captured, keyboard lines are queued
/// and the program host keeps its files in memory.
#[derive(Default)]
pub struct TestHost {
    pub output: String,
    pub keys: VecDeque<String>,
    pub server: Server<Memory>,
    pub sent: Vec<String>,
    pub broken: bool,
    /// Raise the interrupt after this many lines have been sent.
    pub break_after: Option<usize>,
    /// Raise the interrupt once this many lines have been printed.
    pub break_after_output: Option<usize>,
    pub interrupt: Option<Interrupt>,
    pub led: bool,
    pub cursor: bool,
    pub position: (u8, u8),
    pub cleared: usize,
    pub synth_played: bool,
}

impl TestHost {
    pub fn new() -> TestHost {
        TestHost {
            cursor: true,
            ..TestHost::default()
        }
    }

    pub fn key(&mut self, line: &str) {
        self.keys.push_back(line.to_string());
    }

    /// Put a file on the program host.
    pub fn file(&mut self, name: &str, lines: &[&str]) {
        let mut storage = self.server.storage().clone();
        storage
            .write(name, lines.iter().map(|s| s.to_string()).collect())
            .unwrap();
        self.server = Server::new(storage);
    }

    pub fn stored(&self, name: &str) -> Option<Vec<String>> {
        self.server.storage().file(name).cloned()
    }
}

impl Screen for TestHost {
    fn put_str(&mut self, s: &str) {
        self.output.push_str(s);
        if let (Some(n), Some(interrupt)) = (self.break_after_output, &self.interrupt) {
            if self.output.matches('\n').count() >= n {
                interrupt.raise();
            }
        }
    }
    fn clear(&mut self) {
        self.cleared += 1;
    }
    fn home(&mut self) {
        self.position = (0, 0);
    }
    fn move_to(&mut self, x: u8, y: u8) {
        self.position = (x, y);
    }
    fn show_cursor(&mut self, on: bool) {
        self.cursor = on;
    }
}

/// An empty queue behaves like Ctrl-C at the prompt.
impl Keyboard for TestHost {
    fn read_line(&mut self, interrupt: &Interrupt) -> Option<String> {
        let line = self.keys.pop_front();
        if line.is_none() {
            interrupt.raise();
        }
        line
    }
}

impl Transport for TestHost {
    fn send(&mut self, line: &str) -> io::Result<()> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "link down"));
        }
        self.sent.push(line.to_string());
        if let (Some(n), Some(interrupt)) = (self.break_after, &self.interrupt) {
            if self.sent.len() >= n {
                interrupt.raise();
            }
        }
        self.server.send(line)
    }
    fn receive(&mut self) -> io::Result<String> {
        self.server.receive()
    }
}

impl Devices for TestHost {
    fn led(&mut self, on: bool) {
        self.led = on;
    }
    fn synth(&mut self, interrupt: &Interrupt) {
        self.synth_played = true;
        interrupt.raise();
    }
}

/// Enter one line and return what it printed.
pub fn exec(runtime: &mut Runtime, host: &mut TestHost, s: &str) -> String {
    runtime.enter(s, host);
    std::mem::take(&mut host.output)
}

/// Enter several lines, discarding their output.
pub fn enter_all(runtime: &mut Runtime, host: &mut TestHost, lines: &[&str]) {
    for line in lines {
        exec(runtime, host, line);
    }
}

/// A clock stopped at 1234 ms after start-up, 13:05:09.
pub struct FixedClock;

impl Clock for FixedClock {
    fn millis(&self) -> u32 {
        1234
    }
    fn time(&self) -> (u32, u32, u32) {
        (13, 5, 9)
    }
}

pub fn fixed_runtime() -> Runtime {
    Runtime::new(Rc::new(FixedClock))
}
