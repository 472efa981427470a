use std::fmt::Display;
use std::str::FromStr;

use crate::errors::ChessError;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

/// Role of a piece. Knights exist so that the optional full layout and the
/// standard rule set can use them, the default layout never places one.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Glyphs as `(white, black)`.
    const fn glyphs(self) -> (char, char) {
        match self {
            PieceKind::Pawn => ('♙', '♟'),
            PieceKind::Knight => ('♘', '♞'),
            PieceKind::Bishop => ('♗', '♝'),
            PieceKind::Rook => ('♖', '♜'),
            PieceKind::Queen => ('♕', '♛'),
            PieceKind::King => ('♔', '♚'),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    pub const fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    pub const fn black(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::Black)
    }

    pub fn glyph(&self) -> char {
        let (white, black) = self.kind.glyphs();
        match self.color {
            Color::White => white,
            Color::Black => black,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A board coordinate. `row` is the rank minus one, `column` is the file
/// counted from `a`; both are always in `0..8`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    #[inline]
    pub fn row(&self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// Signed `(row, column)` distance to `other`.
    pub fn delta(&self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.column as i8 - self.column as i8,
        )
    }

    /// Squares strictly between `self` and `to` along a rank, file or
    /// diagonal. Empty for squares that do not share a line.
    pub fn between(self, to: Square) -> impl Iterator<Item = Square> {
        let (d_row, d_column) = self.delta(to);
        let aligned = d_row == 0 || d_column == 0 || d_row.abs() == d_column.abs();
        let steps = if aligned {
            d_row.abs().max(d_column.abs()) - 1
        } else {
            0
        };
        let (step_row, step_column) = (d_row.signum(), d_column.signum());
        (1..=steps.max(0)).map(move |i| Square {
            row: (self.row as i8 + step_row * i) as u8,
            column: (self.column as i8 + step_column * i) as u8,
        })
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |column| Square { row, column }))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Parses a lowercase file letter followed by a rank digit, e.g. `e2`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square {
                row: rank - b'1',
                column: file - b'a',
            }),
            _ => Err(ChessError::InvalidSquare),
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.column) as char, self.row + 1)
    }
}
