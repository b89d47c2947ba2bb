//! A chess engine built around immutable per-ply board snapshots.
//!
//! Every move produces a brand-new [`Board`]; nothing is mutated in place.
//! Each board carries a [`Player`] view per side with that side's fully
//! legal moves, check status, and mate detection. Automated play goes
//! through [`MoveStrategy`] implementations ([`Minimax`] and [`AlphaBeta`]).
//!
//! # Example
//! ```
//! use plyboard::{Board, Move, MoveStatus, Square};
//!
//! let board = Board::standard();
//! let from = Square::from_algebraic("e2").unwrap();
//! let to = Square::from_algebraic("e4").unwrap();
//! let mv = Move::from_squares(&board, from, to);
//! let transition = board.make_move(&mv);
//! assert_eq!(transition.status(), MoveStatus::Done);
//! ```

pub mod board;

pub use board::search::{
    AlphaBeta, BoardEvaluator, Minimax, MoveStrategy, SearchInfo, SearchLogger, StandardEvaluator,
    StdoutLogger,
};
pub use board::{
    Board, BoardBuilder, Color, Move, MoveStatus, MoveTransition, Piece, PieceType, Player, Square,
    SquareError, Tile,
};
