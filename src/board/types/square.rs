//! Board square representation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;
use crate::board::geometry::{self, NUM_TILES, TILES_PER_ROW};

/// A square on the board, indexed 0-63 row-major from Black's back rank:
/// a8 = 0, b8 = 1, ..., h1 = 63.
///
/// A `Square` is validated at construction, so holding one guarantees it
/// names a real square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from an index (0-63).
    pub fn from_index(index: usize) -> Result<Self, SquareError> {
        if index < NUM_TILES {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::IndexOutOfBounds { index })
        }
    }

    /// Parse a square from algebraic notation (e.g. "e4").
    pub fn from_algebraic(notation: &str) -> Result<Self, SquareError> {
        let bytes = notation.as_bytes();
        if bytes.len() == 2
            && (b'a'..=b'h').contains(&bytes[0])
            && (b'1'..=b'8').contains(&bytes[1])
        {
            let column = (bytes[0] - b'a') as usize;
            let row = (b'8' - bytes[1]) as usize;
            Ok(Square((row * TILES_PER_ROW + column) as u8))
        } else {
            Err(SquareError::InvalidNotation {
                notation: notation.to_string(),
            })
        }
    }

    /// Get the index (0-63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this square, 0-7 from the top (row 0 is the eighth rank).
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / TILES_PER_ROW
    }

    /// Column of this square, 0-7 from the a-file.
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize % TILES_PER_ROW
    }

    /// Rank in chess terms, 1-8.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.row()
    }

    /// Square at (row, column); both must be in 0..8.
    #[inline]
    #[must_use]
    pub(crate) const fn from_parts(row: usize, column: usize) -> Square {
        debug_assert!(row < 8 && column < 8);
        Square((row * TILES_PER_ROW + column) as u8)
    }

    /// Apply an index offset, returning `None` when the result leaves the
    /// board. Edge wrapping is the caller's concern.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, delta: i32) -> Option<Square> {
        let candidate = self.0 as i32 + delta;
        if geometry::is_valid_index(candidate) {
            Some(Square(candidate as u8))
        } else {
            None
        }
    }

    /// Algebraic notation for this square.
    #[must_use]
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.column() as u8) as char, self.rank())
    }

    /// All squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_TILES as u8).map(Square)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
