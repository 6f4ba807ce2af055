/*!
## Terminal front end

Runs the interpreter on a text terminal. Lines are read with `linefeed`,
Ctrl-C raises the interpreter's interrupt and the program host is a
directory on the local disk.

*/

extern crate ctrlc;
extern crate linefeed;

mod console;
mod disk;

pub use console::Console;
pub use disk::Disk;

use crate::mach::{Runtime, Screen};
use linefeed::{Interface, ReadResult, Signal};
use std::env;
use std::path::PathBuf;

/// Start-up settings taken from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory served to SAVE, LOAD and DIR. `HOMEBASIC_PROGRAMS`.
    pub programs: PathBuf,
    /// Initial seed of `rn`. `HOMEBASIC_SEED`.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            programs: PathBuf::from("programs"),
            seed: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Config {
        let mut config = Config::default();
        if let Some(programs) = var("HOMEBASIC_PROGRAMS") {
            config.programs = PathBuf::from(programs);
        }
        if let Some(seed) = var("HOMEBASIC_SEED") {
            match seed.trim().parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => eprintln!("HOMEBASIC_SEED is not a number: {}", seed),
            }
        }
        config
    }
}

pub fn main() {
    let config = Config::from_env();
    let mut runtime = Runtime::default();
    runtime.seed(config.seed);
    let interrupt = runtime.interrupt();
    ctrlc::set_handler(move || interrupt.raise()).expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(runtime, config) {
        eprintln!("{}", error);
    }
}

fn main_loop(mut runtime: Runtime, config: Config) -> std::io::Result<()> {
    let interface = Interface::new("homebasic")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut console = Console::new(interface, Disk::new(config.programs));
    console.put_str("6502 HomeComputer ready!\n");
    runtime.enter("free", &mut console);
    loop {
        match console.interface().read_line()? {
            ReadResult::Input(string) => {
                runtime.enter(&string, &mut console);
                if !runtime.is_error() && !string.trim().is_empty() {
                    console.interface().add_history_unique(string);
                }
            }
            ReadResult::Signal(Signal::Interrupt) => {
                console.interface().set_buffer("")?;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(())
}
