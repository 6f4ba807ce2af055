extern crate chrono;
use chrono::{Local, Timelike};
use std::time::Instant;

/// Time source behind the `ti` and `ti$` variables.
pub trait Clock {
    /// Milliseconds since start-up.
    fn millis(&self) -> u32;
    /// Wall time as hours, minutes, seconds.
    fn time(&self) -> (u32, u32, u32);
}

#[derive(Debug)]
pub struct SystemClock {
    boot: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            boot: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        self.boot.elapsed().as_millis() as u32
    }

    fn time(&self) -> (u32, u32, u32) {
        let now = Local::now();
        (now.hour(), now.minute(), now.second())
    }
}

pub fn format_time((hours, minutes, seconds): (u32, u32, u32)) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
