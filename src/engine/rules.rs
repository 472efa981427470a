use crate::engine::board::Board;
use crate::engine::definitions::{Color, PieceKind, Square};

/// Decides whether the piece standing on `from` may go to `to`.
pub type Legality = fn(&Board, Square, Square) -> bool;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub enum RuleSet {
    /// Any piece may go anywhere, captures of either colour included.
    #[default]
    Permissive,
    /// Piece geometry with path blocking and no friendly captures.
    /// Check, castling, en passant and promotion are still not played.
    Standard,
}

impl RuleSet {
    pub fn legality_of(self, kind: PieceKind) -> Legality {
        match self {
            RuleSet::Permissive => always_legal,
            RuleSet::Standard => match kind {
                PieceKind::Pawn => pawn_move,
                PieceKind::Knight => knight_move,
                PieceKind::Bishop => bishop_move,
                PieceKind::Rook => rook_move,
                PieceKind::Queen => queen_move,
                PieceKind::King => king_move,
            },
        }
    }
}

fn always_legal(_board: &Board, _from: Square, _to: Square) -> bool {
    true
}

/// Target is empty or holds an enemy of the piece on `from`.
fn lands_on_enemy_or_empty(board: &Board, from: Square, to: Square) -> bool {
    match (board.get(from), board.get(to)) {
        (Some(piece), Some(target)) => piece.color != target.color,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    from.between(to).all(|square| board.get(square).is_none())
}

fn pawn_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(pawn) = board.get(from) else {
        return false;
    };
    let (forward, start_row) = match pawn.color {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };
    let (d_row, d_column) = from.delta(to);
    let target = board.get(to);
    match (d_row, d_column.abs()) {
        (d, 0) if d == forward => target.is_none(),
        (d, 0) if d == 2 * forward && from.row() == start_row => {
            target.is_none() && path_is_clear(board, from, to)
        }
        (d, 1) if d == forward => target.is_some_and(|target| target.color != pawn.color),
        _ => false,
    }
}

fn knight_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_column) = from.delta(to);
    matches!((d_row.abs(), d_column.abs()), (1, 2) | (2, 1))
        && lands_on_enemy_or_empty(board, from, to)
}

fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_column) = from.delta(to);
    d_row != 0
        && d_row.abs() == d_column.abs()
        && path_is_clear(board, from, to)
        && lands_on_enemy_or_empty(board, from, to)
}

fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_column) = from.delta(to);
    (d_row == 0) != (d_column == 0)
        && path_is_clear(board, from, to)
        && lands_on_enemy_or_empty(board, from, to)
}

fn queen_move(board: &Board, from: Square, to: Square) -> bool {
    rook_move(board, from, to) || bishop_move(board, from, to)
}

fn king_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_column) = from.delta(to);
    d_row.abs().max(d_column.abs()) == 1 && lands_on_enemy_or_empty(board, from, to)
}
