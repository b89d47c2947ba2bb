//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::types::moves::Move;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in index order
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
        }
    }

    /// Material value in centipawns: Pawn=100, Knight=320, Bishop=330,
    /// Rook=500, Queen=900, King=10000.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 100,
            PieceType::Knight => 320,
            PieceType::Bishop => 330,
            PieceType::Rook => 500,
            PieceType::Queen => 900,
            PieceType::King => 10000,
        }
    }

    /// Display glyph (uppercase).
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceType::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceType::Rook)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// Pawn advance direction in row terms: White moves toward row 0,
    /// Black toward row 7. Multiplied into index offsets by the generators.
    #[inline]
    #[must_use]
    pub(crate) const fn direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The opponent's advance direction.
    #[inline]
    #[must_use]
    pub(crate) const fn opposite_direction(self) -> i32 {
        -self.direction()
    }

    /// Row this side's pawns start on (White 6, Black 1).
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row this side promotes on (White 0, Black 7).
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row this side's major pieces start on (White 7, Black 0).
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// An immutable piece instance: type, square, color, and whether it has
/// ever moved. Two pieces are equal iff all four fields match.
///
/// The first-move flag drives pawn double-step and castling eligibility, so
/// it is threaded through every board transition: the successor instance
/// produced by [`Piece::moved_to`] always carries `is_first_move = false`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceType,
    square: Square,
    color: Color,
    is_first_move: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[must_use]
    pub const fn new(kind: PieceType, square: Square, color: Color) -> Self {
        Piece {
            kind,
            square,
            color,
            is_first_move: true,
        }
    }

    /// Create a piece with an explicit first-move flag.
    #[must_use]
    pub const fn with_history(
        kind: PieceType,
        square: Square,
        color: Color,
        is_first_move: bool,
    ) -> Self {
        Piece {
            kind,
            square,
            color,
            is_first_move,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceType {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn is_first_move(self) -> bool {
        self.is_first_move
    }

    /// The successor instance after executing `mv`: same type and color,
    /// relocated to the move's destination, first-move flag cleared.
    #[must_use]
    pub(crate) fn move_piece(self, mv: &Move) -> Piece {
        Piece {
            kind: self.kind,
            square: mv.destination(),
            color: self.color,
            is_first_move: false,
        }
    }

    /// This piece relocated to `square` with the first-move flag cleared.
    #[must_use]
    pub(crate) const fn moved_to(self, square: Square) -> Piece {
        Piece {
            kind: self.kind,
            square,
            color: self.color,
            is_first_move: false,
        }
    }

    /// Display glyph, uppercase for White and lowercase for Black.
    #[must_use]
    pub fn glyph(self) -> char {
        match self.color {
            Color::White => self.kind.glyph(),
            Color::Black => self.kind.glyph().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
