use super::transfer::{Memory, Server};
use super::{Devices, Interrupt, Keyboard, Runtime, Screen, Transport};
use std::collections::VecDeque;
use std::io;


/// Screen output and keyboard lines; the link goes to an in-memory host.
/// An empty keyboard queue behaves like the user pressing ESC.
#[derive(Default)]
struct TestHost {
    output: String,
    keys: VecDeque<String>,
    server: Server<Memory>,
}

impl Screen for TestHost {
    fn put_str(&mut self, s: &str) {
        self.output.push_str(s);
    }
    fn clear(&mut self) {}
    fn home(&mut self) {}
    fn move_to(&mut self, _x: u8, _y: u8) {}
    fn show_cursor(&mut self, _on: bool) {}
}

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
        self.server.send(line)
    }
    fn receive(&mut self) -> io::Result<String> {
        self.server.receive()
    }
}

impl Devices for TestHost {
    fn led(&mut self, _on: bool) {}
    fn synth(&mut self, _interrupt: &Interrupt) {}
}

fn run(runtime: &mut Runtime, host: &mut TestHost, s: &str) -> String {
    runtime.enter(s, host);
    std::mem::take(&mut host.output)
}
