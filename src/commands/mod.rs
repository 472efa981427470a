mod chess;
mod print_number;
mod typing;
mod window;

pub use chess::ChessCommand;
pub use print_number::PrintNumberCommand;
pub use typing::{words_per_minute, TypingCommand};
pub use window::WindowCommand;

use crate::config::Config;
use crate::terminal::Command;

/// Every non-internal command, in the order the help text lists them.
pub fn all(config: &Config) -> Vec<Box<dyn Command>> {
    vec![
        Box::new(PrintNumberCommand),
        Box::new(TypingCommand::new(config.typing_tick)),
        Box::new(WindowCommand),
        Box::new(ChessCommand::new(config.layout, config.rules)),
    ]
}
