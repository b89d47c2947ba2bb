//! Static board evaluation: material plus piece-square bonuses.

use super::types::{Color, PieceType, Square};
use super::Board;

/// Base score of a delivered checkmate; the remaining search depth is added
/// so that nearer mates score higher.
pub(crate) const MATE_SCORE: i32 = 1_000_000;

/// Positional bonus tables, one per piece type, from White's perspective
/// with index 0 = a8. Black mirrors vertically.
#[rustfmt::skip]
const POSITION_BONUS: [[i32; 64]; 6] = [
    // Pawn
    [
          0,   0,   0,   0,   0,   0,   0,   0,
         50,  50,  50,  50,  50,  50,  50,  50,
         10,  10,  20,  30,  30,  20,  10,  10,
          5,   5,  10,  25,  25,  10,   5,   5,
          0,   0,   0,  20,  20,   0,   0,   0,
          5,  -5, -10,   0,   0, -10,  -5,   5,
          5,  10,  10, -20, -20,  10,  10,   5,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    // Knight
    [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   0,  15,  20,  20,  15,   0, -30,
        -30,   5,  10,  15,  15,  10,   5, -30,
        -40, -20,   0,   5,   5,   0, -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    // Bishop
    [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,  10,  10,   5,   0, -10,
        -10,   5,   5,  10,  10,   5,   5, -10,
        -10,   0,  10,  10,  10,  10,   0, -10,
        -10,  10,  10,  10,  10,  10,  10, -10,
        -10,   5,   0,   0,   0,   0,   5, -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    // Rook
    [
          0,   0,   0,   0,   0,   0,   0,   0,
          5,  10,  10,  10,  10,  10,  10,   5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
          0,   0,   0,   5,   5,   0,   0,   0,
    ],
    // Queen
    [
        -20, -10, -10,  -5,  -5, -10, -10, -20,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -10,   0,   5,   5,   5,   5,   0, -10,
         -5,   0,   5,   5,   5,   5,   0,  -5,
          0,   0,   5,   5,   5,   5,   0,  -5,
        -10,   5,   5,   5,   5,   5,   0, -10,
        -10,   0,   5,   0,   0,   0,   0, -10,
        -20, -10, -10,  -5,  -5, -10, -10, -20,
    ],
    // King
    [
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -20, -30, -30, -40, -40, -30, -30, -20,
        -10, -20, -20, -20, -20, -20, -20, -10,
         20,  20,   0,   0,   0,   0,  20,  20,
         20,  30,  10,   0,   0,  10,  30,  20,
    ],
];

impl Color {
    /// Positional bonus for a piece of `kind` standing on `square`, from
    /// this side's own frame of reference.
    pub(crate) fn bonus(self, kind: PieceType, square: Square) -> i32 {
        let index = match self {
            Color::White => square.index(),
            Color::Black => (7 - square.row()) * 8 + square.column(),
        };
        POSITION_BONUS[kind.index()][index]
    }
}

/// Deterministic scoring of a board position. White maximizes, Black
/// minimizes; the sign convention is absolute, not side-to-move relative.
pub trait BoardEvaluator {
    /// Score `board`; `depth` is the remaining search depth, used to prefer
    /// faster mates.
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

/// Material sum plus positional bonuses, saturating to mate scores for
/// terminal positions. Stalemate scores as a draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl BoardEvaluator for StandardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        let player = board.current_player();
        if player.is_in_checkmate(board) {
            return match player.color() {
                Color::White => -(MATE_SCORE + depth as i32),
                Color::Black => MATE_SCORE + depth as i32,
            };
        }
        if player.is_in_stalemate(board) {
            return 0;
        }
        side_score(board, Color::White) - side_score(board, Color::Black)
    }
}

fn side_score(board: &Board, color: Color) -> i32 {
    board
        .active_pieces(color)
        .iter()
        .map(|piece| piece.kind().value() + color.bonus(piece.kind(), piece.square()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_standard_position_is_balanced() {
        let board = Board::standard();
        assert_eq!(StandardEvaluator.evaluate(&board, 0), 0);
    }

    #[test]
    fn test_bonus_is_mirrored() {
        let e2 = Square::from_algebraic("e2").unwrap();
        let e7 = Square::from_algebraic("e7").unwrap();
        assert_eq!(
            Color::White.bonus(PieceType::Pawn, e2),
            Color::Black.bonus(PieceType::Pawn, e7)
        );
        let g1 = Square::from_algebraic("g1").unwrap();
        let g8 = Square::from_algebraic("g8").unwrap();
        assert_eq!(
            Color::White.bonus(PieceType::King, g1),
            Color::Black.bonus(PieceType::King, g8)
        );
    }

    #[test]
    fn test_material_advantage_shows() {
        // Standard position without Black's queen.
        let board = Board::standard();
        let mut builder = crate::board::BoardBuilder::new();
        for piece in board.all_pieces() {
            if piece.kind() == PieceType::Queen && piece.color() == Color::Black {
                continue;
            }
            builder = builder.piece(piece);
        }
        let board = builder.move_maker(Color::White).build();
        let score = StandardEvaluator.evaluate(&board, 0);
        assert!(score > 800, "expected a queen-sized edge, got {score}");
    }
}
