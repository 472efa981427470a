use std::io::Write;

use anyhow::Result;
use log::{debug, info, trace, warn};

use crate::engine::board::{Board, GameState, MoveOutcome};
use crate::engine::definitions::{Color, Square};
use crate::engine::render::render;
use crate::errors::ChessError;
use crate::terminal::Console;

pub const BANNER: &str = "Chess commands (this program assumes that you know how to play Chess):

move oldPlace newPlace: moves the piece from oldPlace to newPlace. Example: \"move e2 e4\"
exit: exits the game.
";

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SessionState {
    Setup,
    Playing,
    Exited,
    GameOver(Color),
    /// Input ran out before the game was finished.
    InputClosed,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Setup | SessionState::Playing)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum GameCommand<'a> {
    Move(&'a str, &'a str),
    Exit,
}

/// Splits a line into a command. Square tokens are left unparsed, extra
/// arguments after the two squares are ignored.
pub fn parse_command(line: &str) -> Result<GameCommand<'_>, ChessError> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("move") => match (tokens.next(), tokens.next()) {
            (Some(from), Some(to)) => Ok(GameCommand::Move(from, to)),
            _ => Err(ChessError::NotEnoughArguments),
        },
        Some("exit") => Ok(GameCommand::Exit),
        _ => Err(ChessError::UnknownCommand),
    }
}

/// One game from setup to exit or king capture.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    game_state: GameState,
    state: SessionState,
}

impl GameSession {
    pub fn new(board: Board) -> GameSession {
        GameSession {
            board,
            game_state: GameState::default(),
            state: SessionState::Setup,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    fn start(&mut self) {
        if self.state == SessionState::Setup {
            info!("Chess session started");
            self.state = SessionState::Playing;
        }
    }

    /// Applies one line of player input. Both squares are checked before the
    /// board is looked at; any error leaves the board as it was.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<MoveOutcome>, ChessError> {
        self.start();
        let command = parse_command(line)?;
        if self.state.is_terminal() {
            debug!("Ignoring {command:?}, session is {:?}", self.state);
            return Err(ChessError::GameFinished);
        }
        match command {
            GameCommand::Exit => {
                self.state = SessionState::Exited;
                Ok(None)
            }
            GameCommand::Move(from, to) => {
                let (from, to): (Square, Square) = (from.parse()?, to.parse()?);
                let outcome = self.board.move_piece(from, to)?;
                self.game_state.record(&outcome);
                if let Some(winner) = self.game_state.winner {
                    self.state = SessionState::GameOver(winner);
                }
                Ok(Some(outcome))
            }
        }
    }

    /// The interactive loop: show the board, prompt, apply, repeat until the
    /// player leaves, a king falls or input ends.
    pub fn run(&mut self, console: &mut Console<'_>) -> Result<SessionState> {
        self.start();
        writeln!(console.out, "{BANNER}")?;
        while self.state == SessionState::Playing {
            writeln!(console.out, "{}", render(&self.board))?;
            write!(console.out, "> ")?;
            console.out.flush()?;
            let Some(line) = console.read_line()? else {
                warn!("Input closed in the middle of a chess game");
                self.state = SessionState::InputClosed;
                break;
            };
            if let Err(error) = self.handle_line(&line) {
                if error.is_malformed() {
                    debug!("Could not parse {line:?}: {error:?}");
                } else {
                    trace!("Move {line:?} rejected: {error:?}");
                }
                writeln!(console.err, "{error}")?;
            }
            if self.state == SessionState::Exited {
                writeln!(console.out, "Goodbye.")?;
            }
        }
        if let SessionState::GameOver(winner) = self.state {
            writeln!(console.out, "{}", render(&self.board))?;
            writeln!(console.out, "Game over! {winner} won!")?;
        }
        writeln!(console.out, "Exiting chess...")?;
        Ok(self.state)
    }
}
