use std::io::Write;

use anyhow::Result;

use crate::terminal::{Command, Console, Control};

pub struct PrintNumberCommand;

impl Command for PrintNumberCommand {
    fn on_command(&mut self, console: &mut Console<'_>, args: Option<&[&str]>) -> Result<Control> {
        match args.and_then(|args| args.first()) {
            None => writeln!(console.err, "Missing parameter 'x'!")?,
            Some(x) => match x.parse::<i64>() {
                Ok(number) => writeln!(console.out, "{number}")?,
                Err(_) => writeln!(
                    console.err,
                    "Invalid number (too small/big or contained non-numeric characters?)!"
                )?,
            },
        }
        Ok(Control::Continue)
    }

    fn name(&self) -> &str {
        "printNumber"
    }

    fn usage(&self) -> Option<&str> {
        Some("x")
    }

    fn description(&self) -> &str {
        "prints parameter 'x' passed to the standard output."
    }
}
