//! Per-color view over a board: legal moves, check status, move application.

use super::movegen::attacks_on_square;
use super::types::{Color, Move, MoveStatus, MoveTransition, Piece, Square};
use super::{Board, Occupancy};

/// One side's view of a single board: its king, its full legal-move set
/// (raw moves plus castling), and a precomputed check flag.
///
/// Players are built in a second phase of board construction, after both
/// sides' raw moves exist, because check and castling safety for one side
/// are derived from the other side's raw attack set. Methods that must
/// derive successor state take the owning [`Board`] as an argument.
#[derive(Clone, Debug)]
pub struct Player {
    color: Color,
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    /// Build a player from its raw moves and the opponent's raw moves.
    ///
    /// # Panics
    /// Panics when `pieces` holds no king; `BoardBuilder::build` validates
    /// this before players are constructed.
    pub(crate) fn build(
        color: Color,
        tiles: &Occupancy,
        pieces: &[Piece],
        mut raw_moves: Vec<Move>,
        opponent_moves: &[Move],
    ) -> Player {
        let king = pieces
            .iter()
            .copied()
            .find(|p| p.kind().is_king())
            .unwrap_or_else(|| panic!("not a valid board: no {color} king"));
        let in_check = attacks_on_square(king.square(), opponent_moves)
            .next()
            .is_some();
        raw_moves.extend(king_castles(color, tiles, king, in_check, opponent_moves));
        Player {
            color,
            king,
            legal_moves: raw_moves,
            in_check,
        }
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn king(&self) -> Piece {
        self.king
    }

    /// The full legal-move set: raw moves plus computed castling moves.
    /// Moves that would expose the king are still present here; they are
    /// rejected by [`Player::make_move`].
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// Membership test against the legal-move set. Castling while in check
    /// is never legal, beyond the generation-time filter.
    #[must_use]
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        !(mv.is_castle() && self.in_check) && self.legal_moves.contains(mv)
    }

    /// Attempt `mv` on `board`.
    ///
    /// An illegal move returns [`MoveStatus::IllegalMove`] with the board
    /// unchanged. A legal move is executed, then the successor position is
    /// checked for attacks on the mover's own king: if any exist the move is
    /// rejected with [`MoveStatus::LeavesPlayerInCheck`] (this is how pinned
    /// pieces and king steps into check are caught), otherwise the successor
    /// board comes back with [`MoveStatus::Done`].
    #[must_use]
    pub fn make_move(&self, board: &Board, mv: &Move) -> MoveTransition {
        if !self.is_move_legal(mv) {
            return MoveTransition::new(board.clone(), mv.clone(), MoveStatus::IllegalMove);
        }

        let next = mv.execute(board);
        let mover_king = next.player(self.color).king();
        let exposed = attacks_on_square(mover_king.square(), next.current_player().legal_moves())
            .next()
            .is_some();
        if exposed {
            return MoveTransition::new(board.clone(), mv.clone(), MoveStatus::LeavesPlayerInCheck);
        }
        MoveTransition::new(next, mv.clone(), MoveStatus::Done)
    }

    /// Checkmate: in check with no move that transitions to `Done`.
    #[must_use]
    pub fn is_in_checkmate(&self, board: &Board) -> bool {
        self.in_check && !self.has_escape_moves(board)
    }

    /// Stalemate: not in check, yet no move transitions to `Done`.
    #[must_use]
    pub fn is_in_stalemate(&self, board: &Board) -> bool {
        !self.in_check && !self.has_escape_moves(board)
    }

    fn has_escape_moves(&self, board: &Board) -> bool {
        self.legal_moves
            .iter()
            .any(|mv| self.make_move(board, mv).status().is_done())
    }

    /// True while the king and the king-side rook both retain their
    /// first-move flags.
    #[must_use]
    pub fn is_king_side_castle_capable(&self, board: &Board) -> bool {
        self.castle_capable(board, 7)
    }

    /// True while the king and the queen-side rook both retain their
    /// first-move flags.
    #[must_use]
    pub fn is_queen_side_castle_capable(&self, board: &Board) -> bool {
        self.castle_capable(board, 0)
    }

    fn castle_capable(&self, board: &Board, rook_column: usize) -> bool {
        if !self.king.is_first_move() {
            return false;
        }
        let corner = square_at(self.color.back_row(), rook_column);
        match board.piece_at(corner) {
            Some(rook) => {
                rook.kind().is_rook() && rook.color() == self.color && rook.is_first_move()
            }
            None => false,
        }
    }
}

fn square_at(row: usize, column: usize) -> Square {
    Square::from_parts(row, column)
}

/// Castling move generation, symmetric for both colors.
///
/// A castle is generated only when the king has never moved and is not in
/// check, the squares between king and rook are empty, the rook in the
/// corner has never moved, and neither the king's transit square nor its
/// destination is attacked by any opponent raw move.
fn king_castles(
    color: Color,
    tiles: &Occupancy,
    king: Piece,
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let mut castles = Vec::new();
    if !king.is_first_move() || in_check {
        return castles;
    }
    let row = color.back_row();
    let empty = |column: usize| tiles[row * 8 + column].is_none();
    let safe = |column: usize| {
        attacks_on_square(square_at(row, column), opponent_moves)
            .next()
            .is_none()
    };
    let corner_rook = |column: usize| match tiles[row * 8 + column] {
        Some(p) if p.kind().is_rook() && p.color() == color && p.is_first_move() => Some(p),
        _ => None,
    };

    // King side: f and g files clear and safe.
    if empty(5) && empty(6) && safe(5) && safe(6) {
        if let Some(rook) = corner_rook(7) {
            castles.push(Move::KingSideCastle {
                piece: king,
                dest: square_at(row, 6),
                rook,
                rook_dest: square_at(row, 5),
            });
        }
    }

    // Queen side: b, c and d files clear; c and d safe (the b file is not
    // on the king's path).
    if empty(1) && empty(2) && empty(3) && safe(2) && safe(3) {
        if let Some(rook) = corner_rook(0) {
            castles.push(Move::QueenSideCastle {
                piece: king,
                dest: square_at(row, 2),
                rook,
                rook_dest: square_at(row, 3),
            });
        }
    }
    castles
}
