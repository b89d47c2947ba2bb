//! Move variants and the move-application result types.

use std::fmt;

use super::piece::{Color, Piece, PieceType};
use super::square::Square;
use crate::board::{Board, BoardBuilder};

/// One move shape, tagged per variant.
///
/// A move is constructed only from a legal board context by the generators
/// (or resolved via [`Move::from_squares`]). [`Move::execute`] is the sole
/// transition and always produces a new [`Board`]; the source board is never
/// mutated.
///
/// Equality is structural over (moved piece, destination), so a promotion
/// compares equal to the pawn move it wraps.
#[derive(Clone, Debug)]
pub enum Move {
    /// Quiet move of a non-pawn piece.
    Major { piece: Piece, dest: Square },
    /// Capture by a non-pawn piece.
    Attack {
        piece: Piece,
        dest: Square,
        captured: Piece,
    },
    /// Single pawn push.
    PawnMove { piece: Piece, dest: Square },
    /// Pawn double-step from its start row. Records the pawn as the
    /// successor board's en-passant target.
    PawnJump { piece: Piece, dest: Square },
    /// Pawn diagonal capture.
    PawnAttack {
        piece: Piece,
        dest: Square,
        captured: Piece,
    },
    /// En-passant capture; the captured pawn is not on the destination.
    PawnEnPassantAttack {
        piece: Piece,
        dest: Square,
        captured: Piece,
    },
    /// Wraps a pawn move or capture landing on the far rank; execution
    /// swaps the landed pawn for a queen.
    PawnPromotion { inner: Box<Move> },
    /// King-side castle; relocates the rook as a side effect.
    KingSideCastle {
        piece: Piece,
        dest: Square,
        rook: Piece,
        rook_dest: Square,
    },
    /// Queen-side castle; relocates the rook as a side effect.
    QueenSideCastle {
        piece: Piece,
        dest: Square,
        rook: Piece,
        rook_dest: Square,
    },
    /// Sentinel for "no move found". Never legal; executing it panics.
    Null,
}

impl Move {
    /// The piece being moved.
    ///
    /// # Panics
    /// Panics on [`Move::Null`], which moves no piece.
    #[must_use]
    pub fn moved_piece(&self) -> Piece {
        match self {
            Move::Major { piece, .. }
            | Move::Attack { piece, .. }
            | Move::PawnMove { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. }
            | Move::KingSideCastle { piece, .. }
            | Move::QueenSideCastle { piece, .. } => *piece,
            Move::PawnPromotion { inner } => inner.moved_piece(),
            Move::Null => panic!("null move has no moved piece"),
        }
    }

    /// The destination square.
    ///
    /// # Panics
    /// Panics on [`Move::Null`], which has no destination.
    #[must_use]
    pub fn destination(&self) -> Square {
        match self {
            Move::Major { dest, .. }
            | Move::Attack { dest, .. }
            | Move::PawnMove { dest, .. }
            | Move::PawnJump { dest, .. }
            | Move::PawnAttack { dest, .. }
            | Move::PawnEnPassantAttack { dest, .. }
            | Move::KingSideCastle { dest, .. }
            | Move::QueenSideCastle { dest, .. } => *dest,
            Move::PawnPromotion { inner } => inner.destination(),
            Move::Null => panic!("null move has no destination"),
        }
    }

    /// The square the moved piece starts on.
    ///
    /// # Panics
    /// Panics on [`Move::Null`].
    #[inline]
    #[must_use]
    pub fn source(&self) -> Square {
        self.moved_piece().square()
    }

    /// The captured piece, if this move captures one.
    #[must_use]
    pub fn captured_piece(&self) -> Option<Piece> {
        match self {
            Move::Attack { captured, .. }
            | Move::PawnAttack { captured, .. }
            | Move::PawnEnPassantAttack { captured, .. } => Some(*captured),
            Move::PawnPromotion { inner } => inner.captured_piece(),
            _ => None,
        }
    }

    /// Returns true if this move captures a piece (including en passant).
    #[inline]
    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    /// Returns true for either castle variant.
    #[inline]
    #[must_use]
    pub fn is_castle(&self) -> bool {
        matches!(
            self,
            Move::KingSideCastle { .. } | Move::QueenSideCastle { .. }
        )
    }

    /// Returns true for a promotion-wrapped move.
    #[inline]
    #[must_use]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion { .. })
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Resolve a (source, destination) pair against the current player's
    /// legal moves, yielding the concrete variant or [`Move::Null`] when no
    /// legal move matches. This is the bridge used by human input.
    #[must_use]
    pub fn from_squares(board: &Board, from: Square, to: Square) -> Move {
        for mv in board.current_player().legal_moves() {
            if mv.source() == from && mv.destination() == to {
                return mv.clone();
            }
        }
        Move::Null
    }

    /// Deterministically produce the successor board: every unaffected piece
    /// is copied forward, the moved piece is re-created on its destination
    /// with its first-move flag cleared, variant-specific effects are
    /// applied, and the move goes to the opponent.
    ///
    /// # Panics
    /// Panics on [`Move::Null`]; a null move is never legal.
    #[must_use]
    pub fn execute(&self, board: &Board) -> Board {
        if self.is_null() {
            panic!("attempted to execute a null move");
        }
        let piece = self.moved_piece();
        let mut builder = BoardBuilder::new();

        for other in board.all_pieces() {
            if other == piece {
                continue;
            }
            if Some(other) == self.captured_piece() {
                continue;
            }
            builder = builder.piece(other);
        }

        match self {
            Move::PawnJump { .. } => {
                let jumped = piece.move_piece(self);
                builder = builder.piece(jumped).en_passant_pawn(jumped);
            }
            Move::PawnPromotion { .. } => {
                builder = builder.piece(Piece::with_history(
                    PieceType::Queen,
                    self.destination(),
                    piece.color(),
                    false,
                ));
            }
            Move::KingSideCastle {
                rook, rook_dest, ..
            }
            | Move::QueenSideCastle {
                rook, rook_dest, ..
            } => {
                builder = builder
                    .piece(piece.move_piece(self))
                    .piece(rook.moved_to(*rook_dest));
            }
            _ => {
                builder = builder.piece(piece.move_piece(self));
            }
        }

        builder.move_maker(piece.color().opponent()).build()
    }

    /// Rebuild the predecessor's piece layout from this move's retained
    /// fields, given the successor board that [`Move::execute`] produced.
    ///
    /// The predecessor's own en-passant eligibility is not recorded on the
    /// move, so the rebuilt board carries no en-passant pawn; piece layout
    /// and side to move are restored exactly.
    ///
    /// # Panics
    /// Panics on [`Move::Null`].
    #[must_use]
    pub fn undo(&self, board: &Board) -> Board {
        if self.is_null() {
            panic!("attempted to undo a null move");
        }
        let piece = self.moved_piece();
        let dest = self.destination();
        let mut builder = BoardBuilder::new();

        for other in board.all_pieces() {
            // The landed piece (or its promotion replacement).
            if other.square() == dest && other.color() == piece.color() {
                continue;
            }
            if let Move::KingSideCastle {
                rook, rook_dest, ..
            }
            | Move::QueenSideCastle {
                rook, rook_dest, ..
            } = self
            {
                if other == rook.moved_to(*rook_dest) {
                    continue;
                }
            }
            builder = builder.piece(other);
        }

        builder = builder.piece(piece);
        if let Some(captured) = self.captured_piece() {
            builder = builder.piece(captured);
        }
        if let Move::KingSideCastle { rook, .. } | Move::QueenSideCastle { rook, .. } = self {
            builder = builder.piece(*rook);
        }

        builder.move_maker(piece.color()).build()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_null(), other.is_null()) {
            (true, true) => true,
            (false, false) => {
                self.moved_piece() == other.moved_piece()
                    && self.destination() == other.destination()
            }
            _ => false,
        }
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Null => write!(f, "--"),
            Move::KingSideCastle { .. } => write!(f, "O-O"),
            Move::QueenSideCastle { .. } => write!(f, "O-O-O"),
            Move::PawnPromotion { inner } => write!(f, "{inner}=Q"),
            _ if self.is_attack() => write!(f, "{}x{}", self.source(), self.destination()),
            _ => write!(f, "{}{}", self.source(), self.destination()),
        }
    }
}

/// Outcome class of a move attempt.
///
/// Illegal attempts are an expected, frequent occurrence (misclicks,
/// speculative search probes), so legality feedback travels through this
/// status rather than an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveStatus {
    /// Move applied; the transition carries the successor board.
    Done,
    /// Move is not in the legal-move set; the board is unchanged.
    IllegalMove,
    /// Move is locally legal but exposes the mover's own king; the board
    /// is unchanged.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// Result of attempting a move: the board to continue from, the move
/// itself, and the status the caller must branch on.
#[derive(Clone, Debug)]
pub struct MoveTransition {
    board: Board,
    mv: Move,
    status: MoveStatus,
}

impl MoveTransition {
    pub(crate) fn new(board: Board, mv: Move, status: MoveStatus) -> Self {
        MoveTransition { board, mv, status }
    }

    /// The successor board when the status is [`MoveStatus::Done`],
    /// otherwise the unchanged source board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the transition, keeping the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[must_use]
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> MoveStatus {
        self.status
    }
}
