//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `construction.rs` - Board building, tiles, display
//! - `movegen.rs` - Raw move generation per piece
//! - `transitions.rs` - Move execution, undo, legality verification
//! - `castling.rs` - Castle generation and safety for both colors
//! - `endgame.rs` - Check, checkmate and stalemate detection
//! - `search.rs` - Minimax and alpha-beta strategies
//! - `proptest.rs` - Property-based tests

mod construction;
mod proptest;
mod search;

use crate::board::types::{Color, Piece, PieceType, Square};
use crate::board::{Board, BoardBuilder};

/// Parse an algebraic square, panicking on bad input.
pub(crate) fn sq(notation: &str) -> Square {
    Square::from_algebraic(notation).unwrap()
}

/// A piece that has not moved yet.
pub(crate) fn piece(kind: PieceType, square: &str, color: Color) -> Piece {
    Piece::new(kind, sq(square), color)
}

/// A bare-kings board with extra pieces, `to_move` to play. Kings go on e1
/// and a8 unless the extras occupy those squares.
pub(crate) fn kings_board(extras: &[Piece], to_move: Color) -> Board {
    let mut builder = BoardBuilder::new()
        .piece(piece(PieceType::King, "e1", Color::White))
        .piece(piece(PieceType::King, "a8", Color::Black));
    for &extra in extras {
        builder = builder.piece(extra);
    }
    builder.move_maker(to_move).build()
}

/// Play a sequence of (from, to) algebraic pairs from the standard
/// position, panicking if any move fails to transition.
pub(crate) fn play(moves: &[(&str, &str)]) -> Board {
    let mut board = Board::standard();
    for &(from, to) in moves {
        let mv = crate::board::Move::from_squares(&board, sq(from), sq(to));
        assert!(!mv.is_null(), "no legal move {from}{to}");
        let transition = board.make_move(&mv);
        assert!(
            transition.status().is_done(),
            "move {from}{to} failed with {:?}",
            transition.status()
        );
        board = transition.into_board();
    }
    board
}
