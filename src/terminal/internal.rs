use std::io::Write;

use anyhow::Result;

use crate::terminal::{help_text, Command, CommandInfo, Console, Control};

/// Prints the help text gathered at setup.
#[derive(Debug, Default)]
pub struct HelpCommand {
    help_message: String,
}

impl Command for HelpCommand {
    fn on_command(&mut self, console: &mut Console<'_>, _args: Option<&[&str]>) -> Result<Control> {
        writeln!(console.out, "{}", self.help_message)?;
        Ok(Control::Continue)
    }

    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "sends the list of valid terminal commands."
    }

    fn setup(&mut self, commands: &[CommandInfo]) {
        self.help_message = help_text(commands);
    }
}

#[derive(Debug, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn on_command(&mut self, console: &mut Console<'_>, _args: Option<&[&str]>) -> Result<Control> {
        writeln!(console.out, "Exiting the terminal...")?;
        Ok(Control::Exit)
    }

    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> &str {
        "exits the terminal."
    }
}
