//! The line-oriented shell: reads a line, finds the command named by its
//! first word and hands it the rest.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{debug, info, trace};

mod internal;

pub use internal::{ExitCommand, HelpCommand};

/// The three streams a command talks through.
pub struct Console<'a> {
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Console<'a> {
        Console { input, out, err }
    }

    /// Next line without its line ending, `None` once input is exhausted.
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled line is just an
    /// unrecognised command.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// What the terminal does after a command returns.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Control {
    Continue,
    Exit,
}

/// Name, usage and description of a registered command.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CommandInfo {
    pub name: String,
    pub usage: Option<String>,
    pub description: String,
}

impl CommandInfo {
    /// `name: description` or `name usage: description`.
    pub fn help_line(&self) -> String {
        match &self.usage {
            Some(usage) => format!("{} {}: {}", self.name, usage, self.description),
            None => format!("{}: {}", self.name, self.description),
        }
    }
}

/// One help line per command, no trailing newline.
pub fn help_text(commands: &[CommandInfo]) -> String {
    commands
        .iter()
        .map(CommandInfo::help_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub trait Command {
    /// Runs the command. `args` is `None` when nothing followed the name.
    fn on_command(&mut self, console: &mut Console<'_>, args: Option<&[&str]>) -> Result<Control>;

    fn name(&self) -> &str;

    fn usage(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> &str;

    /// Called once before the terminal starts, with every registered command.
    fn setup(&mut self, _commands: &[CommandInfo]) {}

    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: self.name().to_string(),
            usage: self.usage().map(str::to_string),
            description: self.description().to_string(),
        }
    }
}

pub struct Terminal {
    commands: Vec<Box<dyn Command>>,
}

impl Terminal {
    /// `help` and `exit` always come first, followed by `commands` in order.
    pub fn new(commands: Vec<Box<dyn Command>>) -> Terminal {
        let mut all: Vec<Box<dyn Command>> =
            vec![Box::new(HelpCommand::default()), Box::new(ExitCommand)];
        all.extend(commands);
        Terminal { commands: all }
    }

    pub fn command_infos(&self) -> Vec<CommandInfo> {
        self.commands.iter().map(|command| command.info()).collect()
    }

    pub fn help_message(&self) -> String {
        help_text(&self.command_infos())
    }

    /// Sets the commands up, prints the help text and runs the loop until
    /// `exit` or the end of input.
    pub fn start(&mut self, console: &mut Console<'_>) -> Result<()> {
        writeln!(console.out, "Starting the terminal...")?;
        let infos = self.command_infos();
        for command in self.commands.iter_mut() {
            command.setup(&infos);
        }
        writeln!(console.out, "{}", self.help_message())?;
        self.run(console)
    }

    fn run(&mut self, console: &mut Console<'_>) -> Result<()> {
        loop {
            write!(console.out, "\n> ")?;
            console.out.flush()?;
            let Some(line) = console.read_line()? else {
                info!("End of input, leaving the terminal");
                return Ok(());
            };
            if self.dispatch(console, &line)? == Control::Exit {
                info!("Terminal exited");
                return Ok(());
            }
        }
    }

    /// Runs the command named by the first word of `line`.
    pub fn dispatch(&mut self, console: &mut Console<'_>, line: &str) -> Result<Control> {
        let (name, rest) = match line.split_once(' ') {
            Some((name, rest)) => (name, Some(rest)),
            None => (line, None),
        };
        let Some(command) = self.commands.iter_mut().find(|command| command.name() == name) else {
            debug!("No command named {name:?}");
            writeln!(console.err, "Not a valid command (case-sensitivity error?)!")?;
            return Ok(Control::Continue);
        };
        let args: Option<Vec<&str>> = rest
            .map(|rest| rest.split_whitespace().collect::<Vec<_>>())
            .filter(|args| !args.is_empty());
        trace!("Running {name} with {args:?}");
        command.on_command(console, args.as_deref())
    }
}
