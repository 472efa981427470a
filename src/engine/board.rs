use log::{debug, info, trace};

use crate::engine::definitions::{Color, Piece, PieceKind, Square};
use crate::engine::rules::RuleSet;
use crate::errors::ChessError;

/// How the back ranks are filled at setup.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub struct Layout {
    /// Put knights on b/g files. Off by default: the classic terminal game
    /// has never had them.
    pub with_knights: bool,
}

/// Result of an accepted move.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct MoveOutcome {
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Set when the captured piece was a king.
    pub winner: Option<Color>,
}

impl MoveOutcome {
    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// Whether the game has ended and who won. Only ever goes from "running" to
/// "over", never back.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub struct GameState {
    pub game_over: bool,
    pub winner: Option<Color>,
}

impl GameState {
    pub fn record(&mut self, outcome: &MoveOutcome) {
        if self.game_over {
            return;
        }
        if let Some(winner) = outcome.winner {
            self.game_over = true;
            self.winner = Some(winner);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    rules: RuleSet,
}

impl Board {
    pub fn empty(rules: RuleSet) -> Board {
        Board {
            grid: [[None; 8]; 8],
            rules,
        }
    }

    pub fn setup(layout: Layout, rules: RuleSet) -> Board {
        use PieceKind::*;
        let knight = layout.with_knights.then_some(Knight);
        let back_rank = [
            Some(Rook),
            knight,
            Some(Bishop),
            Some(Queen),
            Some(King),
            Some(Bishop),
            knight,
            Some(Rook),
        ];
        let mut board = Board::empty(rules);
        for (column, kind) in back_rank.into_iter().enumerate() {
            board.grid[0][column] = kind.map(Piece::white);
            board.grid[1][column] = Some(Piece::white(Pawn));
            board.grid[6][column] = Some(Piece::black(Pawn));
            board.grid[7][column] = kind.map(Piece::black);
        }
        debug!("Board set up with {} pieces ({rules:?} rules)", board.population());
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.row()][square.column()]
    }

    /// Puts `piece` on `square`, returning whatever stood there.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.grid[square.row()][square.column()], piece)
    }

    pub fn population(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Rows from rank 1 to rank 8.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.grid
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        match self.get(from) {
            Some(piece) => self.rules.legality_of(piece.kind)(self, from, to),
            None => false,
        }
    }

    /** Move whatever stands on `from` to `to`, capturing anything there.
     * The board is left untouched when an error is returned. Permissive
     * rules accept `from == to`, which takes the piece off the board. */
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessError> {
        let Some(piece) = self.get(from) else {
            trace!("Rejected {from}{to}: nothing on {from}");
            return Err(ChessError::EmptySquare);
        };
        let null_move = from == to && self.rules == RuleSet::Standard;
        if null_move || !self.is_legal_move(from, to) {
            trace!("Rejected {from}{to}: {:?} rules", self.rules);
            return Err(ChessError::IllegalMove);
        }
        let captured = self.place(to, Some(piece));
        self.place(from, None);
        let winner = match captured {
            Some(target) if target.kind == PieceKind::King => {
                info!("{} king captured on {to}", target.color);
                Some(target.color.opposite())
            }
            _ => None,
        };
        debug!("{:?} {from} -> {to}, captured: {captured:?}", piece);
        Ok(MoveOutcome {
            moved: piece,
            captured,
            winner,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::setup(Layout::default(), RuleSet::default())
    }
}
