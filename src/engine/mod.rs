pub mod board;
pub mod definitions;
pub mod game;
pub mod render;
pub mod rules;

pub use board::{Board, GameState, Layout, MoveOutcome};
pub use definitions::{Color, Piece, PieceKind, Square};
pub use game::{GameSession, SessionState};
pub use render::render;
pub use rules::RuleSet;
