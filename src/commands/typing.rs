use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, warn};

use crate::terminal::{Command, Console, Control};

const COUNTDOWN: u32 = 3;

/// Whole five-character words typed per minute.
pub fn words_per_minute(text: &str, elapsed: Duration) -> f64 {
    let words = (text.chars().count() / 5) as f64;
    words / (elapsed.as_secs_f64() / 60.0)
}

pub struct TypingCommand {
    tick: Duration,
}

impl TypingCommand {
    pub fn new(tick: Duration) -> Self {
        TypingCommand { tick }
    }
}

impl Command for TypingCommand {
    fn on_command(&mut self, console: &mut Console<'_>, _args: Option<&[&str]>) -> Result<Control> {
        writeln!(console.out, "Press enter when done.\nPreparing typing...")?;
        for i in (1..=COUNTDOWN).rev() {
            writeln!(console.out, "{i}")?;
            console.out.flush()?;
            thread::sleep(self.tick);
        }
        writeln!(console.out, "GO!")?;
        console.out.flush()?;
        let start = Instant::now();
        let Some(text) = console.read_line()? else {
            warn!("Input closed before anything was typed");
            return Ok(Control::Continue);
        };
        let elapsed = start.elapsed();
        debug!("Typed {} chars in {elapsed:?}", text.chars().count());
        writeln!(console.out, "WPM: {:.1}", words_per_minute(&text, elapsed))?;
        Ok(Control::Continue)
    }

    fn name(&self) -> &str {
        "typing"
    }

    fn description(&self) -> &str {
        "checks your WPM for something that you type."
    }
}
