use std::io;

use anyhow::{Context, Result};
use log::info;
use terminal_chess::{commands, config::Config, Console, Terminal};

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let config = Config::from_env().context("Invalid configuration")?;
    info!("Starting with {config:?}");

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let mut console = Console::new(&mut input, &mut out, &mut err);

    let mut terminal = Terminal::new(commands::all(&config));
    terminal.start(&mut console)
}
