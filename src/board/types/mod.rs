//! Core value types: squares, pieces, colors, and moves.

pub mod moves;
pub mod piece;
pub mod square;

pub use moves::{Move, MoveStatus, MoveTransition};
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
