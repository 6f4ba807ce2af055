extern crate ansi_term;
use super::Disk;
use crate::mach::transfer::Server;
use crate::mach::{Devices, Interrupt, Keyboard, Screen, Transport};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::io;

/// Keys of the synthesizer, lowest note first. The bottom row holds the
/// white keys, the row above it the black ones.
const SYNTH_KEYS: &str = "awsedftgzhujkolp";
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// The terminal as a host for the interpreter.
pub struct Console {
    interface: Interface<DefaultTerminal>,
    link: Server<Disk>,
}

impl Console {
    pub fn new(interface: Interface<DefaultTerminal>, disk: Disk) -> Console {
        Console {
            interface,
            link: Server::new(disk),
        }
    }

    pub fn interface(&self) -> &Interface<DefaultTerminal> {
        &self.interface
    }

    fn write(&self, s: &str) {
        if let Err(error) = self.interface.write_fmt(format_args!("{}", s)) {
            eprintln!("{}", error);
        }
    }

    fn notice(&self, s: &str) {
        self.write(&format!("{}\n", Style::new().dimmed().paint(s)));
    }
}

impl Screen for Console {
    fn put_str(&mut self, s: &str) {
        self.write(s);
    }

    fn put_error(&mut self, s: &str) {
        self.write(&format!("{}\n", Style::new().bold().paint(s.trim_end())));
    }

    fn clear(&mut self) {
        self.write("\x1b[2J\x1b[H");
    }

    fn home(&mut self) {
        self.write("\x1b[H");
    }

    fn move_to(&mut self, x: u8, y: u8) {
        self.write(&format!("\x1b[{};{}H", y as u16 + 1, x as u16 + 1));
    }

    fn show_cursor(&mut self, on: bool) {
        self.write(if on { "\x1b[?25h" } else { "\x1b[?25l" });
    }
}

impl Keyboard for Console {
    fn read_line(&mut self, interrupt: &Interrupt) -> Option<String> {
        match self.interface.read_line() {
            Ok(ReadResult::Input(line)) => Some(line),
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => {
                interrupt.raise();
                None
            }
            Err(error) => {
                eprintln!("{}", error);
                interrupt.raise();
                None
            }
        }
    }
}

impl Transport for Console {
    fn send(&mut self, line: &str) -> io::Result<()> {
        self.link.send(line)
    }

    fn receive(&mut self) -> io::Result<String> {
        self.link.receive()
    }
}

impl Devices for Console {
    fn led(&mut self, on: bool) {
        self.notice(if on { "LED on" } else { "LED off" });
    }

    /// Each line typed is played key by key; an empty line, ESC or
    /// Ctrl-C quits.
    fn synth(&mut self, interrupt: &Interrupt) {
        while !interrupt.is_raised() {
            let keys = match self.read_line(interrupt) {
                Some(keys) => keys,
                None => break,
            };
            if keys.is_empty() || keys.contains('\x1b') {
                break;
            }
            let notes: Vec<String> = keys.chars().filter_map(note).collect();
            if !notes.is_empty() {
                self.write(&format!("\x07{}\n", notes.join(" ")));
            }
        }
    }
}

/// Name and frequency of the note on `key`, starting at middle C.
fn note(key: char) -> Option<String> {
    let semitone = SYNTH_KEYS.find(key.to_ascii_lowercase())?;
    let octave = 4 + semitone / 12;
    let hz = 261.63 * 2f64.powf(semitone as f64 / 12.0);
    Some(format!("{}{} {:.0}Hz", NOTE_NAMES[semitone % 12], octave, hz))
}
