use thiserror::Error;

/// Everything that can go wrong while handling one line of a chess session.
///
/// None of these end the session: they are written to the error stream and
/// the player is asked for another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("A place is not valid! Try again...\n")]
    InvalidSquare,
    #[error("Can't move from a blank space!")]
    EmptySquare,
    #[error("Not a valid move!")]
    IllegalMove,
    #[error("Not enough arguments! Try again...\n")]
    NotEnoughArguments,
    #[error("Not a valid chess command! Try again...\n")]
    UnknownCommand,
    /// A line arrived after the session already ended. The interactive loop
    /// stops first, so only direct callers of `handle_line` see this.
    #[error("The game is already over!")]
    GameFinished,
}

impl ChessError {
    /// The line could not be understood as a command at all.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::NotEnoughArguments | Self::UnknownCommand)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown rule set `{0}` (expected `permissive` or `standard`)")]
    UnknownRules(String),
    #[error("`{name}` must be a boolean, got `{value}`")]
    NotABool { name: &'static str, value: String },
    #[error("`{name}` must be a number of milliseconds, got `{value}`")]
    NotADuration { name: &'static str, value: String },
}
