pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod terminal;

// module re-exports
pub use engine::{render, Board, Color, GameSession, Piece, PieceKind, RuleSet, Square};
pub use errors::{ChessError, ConfigError};
pub use terminal::{Command, Console, Terminal};
