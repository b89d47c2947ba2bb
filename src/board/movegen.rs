//! Raw per-piece move generation.
//!
//! "Raw" moves follow piece-movement rules alone and ignore whether the
//! mover's king is safe afterward; that verification happens in
//! [`Player::make_move`](crate::board::Player::make_move). Castling is not
//! generated here either, since it needs the opponent's full attack set.

use super::geometry::{EIGHTH_COLUMN, FIRST_COLUMN, ROWS, SECOND_COLUMN, SEVENTH_COLUMN};
use super::types::{Color, Move, Piece, PieceType, Square};
use super::Occupancy;

const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const BISHOP_DIRECTIONS: [i32; 4] = [-9, -7, 7, 9];
const ROOK_DIRECTIONS: [i32; 4] = [-8, -1, 1, 8];
const QUEEN_DIRECTIONS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Raw moves for every piece in `pieces`.
pub(crate) fn raw_legal_moves(
    tiles: &Occupancy,
    en_passant: Option<Piece>,
    pieces: &[Piece],
) -> Vec<Move> {
    let mut moves = Vec::new();
    for &piece in pieces {
        moves.extend(piece_moves(tiles, en_passant, piece));
    }
    moves
}

/// Raw moves for a single piece.
pub(crate) fn piece_moves(tiles: &Occupancy, en_passant: Option<Piece>, piece: Piece) -> Vec<Move> {
    match piece.kind() {
        PieceType::Pawn => pawn_moves(tiles, en_passant, piece),
        PieceType::Knight => jumping_moves(tiles, piece, &KNIGHT_OFFSETS, knight_wraps),
        PieceType::Bishop => sliding_moves(tiles, piece, &BISHOP_DIRECTIONS),
        PieceType::Rook => sliding_moves(tiles, piece, &ROOK_DIRECTIONS),
        PieceType::Queen => sliding_moves(tiles, piece, &QUEEN_DIRECTIONS),
        PieceType::King => jumping_moves(tiles, piece, &KING_OFFSETS, king_wraps),
    }
}

/// Knight and king: one candidate square per offset.
fn jumping_moves(
    tiles: &Occupancy,
    piece: Piece,
    offsets: &[i32],
    wraps: fn(usize, i32) -> bool,
) -> Vec<Move> {
    let mut moves = Vec::new();
    for &offset in offsets {
        if wraps(piece.square().index(), offset) {
            continue;
        }
        let Some(dest) = piece.square().offset(offset) else {
            continue;
        };
        match tiles[dest.index()] {
            None => moves.push(Move::Major { piece, dest }),
            Some(target) if target.color() != piece.color() => moves.push(Move::Attack {
                piece,
                dest,
                captured: target,
            }),
            Some(_) => {}
        }
    }
    moves
}

/// Bishop, rook, queen: walk each ray until the edge or the first occupant.
fn sliding_moves(tiles: &Occupancy, piece: Piece, directions: &[i32]) -> Vec<Move> {
    let mut moves = Vec::new();
    for &dir in directions {
        let mut current = piece.square();
        loop {
            if ray_wraps(current.index(), dir) {
                break;
            }
            let Some(next) = current.offset(dir) else {
                break;
            };
            match tiles[next.index()] {
                None => {
                    moves.push(Move::Major { piece, dest: next });
                    current = next;
                }
                Some(target) => {
                    if target.color() != piece.color() {
                        moves.push(Move::Attack {
                            piece,
                            dest: next,
                            captured: target,
                        });
                    }
                    break;
                }
            }
        }
    }
    moves
}

fn pawn_moves(tiles: &Occupancy, en_passant: Option<Piece>, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let dir = piece.color().direction();

    // Single push, blocked by any occupant; double push only from the start
    // row with both squares empty.
    if let Some(dest) = piece.square().offset(dir * 8) {
        if tiles[dest.index()].is_none() {
            moves.push(promote_if_due(Move::PawnMove { piece, dest }, piece));
            if piece.is_first_move() && ROWS[piece.color().pawn_start_row()][piece.square().index()]
            {
                if let Some(jump_dest) = piece.square().offset(dir * 16) {
                    if tiles[jump_dest.index()].is_none() {
                        moves.push(Move::PawnJump {
                            piece,
                            dest: jump_dest,
                        });
                    }
                }
            }
        }
    }

    // Diagonal captures, with the edge exclusion appropriate to color.
    for offset in [7, 9] {
        if pawn_capture_wraps(piece.square().index(), offset, piece.color()) {
            continue;
        }
        let Some(dest) = piece.square().offset(dir * offset) else {
            continue;
        };
        match tiles[dest.index()] {
            Some(target) if target.color() != piece.color() => {
                moves.push(promote_if_due(
                    Move::PawnAttack {
                        piece,
                        dest,
                        captured: target,
                    },
                    piece,
                ));
            }
            None => {
                // Empty diagonal square: en passant if the opponent's pawn
                // just double-stepped past it.
                if let Some(ep) = en_passant {
                    if ep.color() != piece.color()
                        && ep.square().row() == piece.square().row()
                        && ep.square().column() == dest.column()
                    {
                        moves.push(Move::PawnEnPassantAttack {
                            piece,
                            dest,
                            captured: ep,
                        });
                    }
                }
            }
            Some(_) => {}
        }
    }
    moves
}

fn promote_if_due(mv: Move, piece: Piece) -> Move {
    if mv.destination().row() == piece.color().promotion_row() {
        Move::PawnPromotion {
            inner: Box::new(mv),
        }
    } else {
        mv
    }
}

fn knight_wraps(position: usize, offset: i32) -> bool {
    (FIRST_COLUMN[position] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[position] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[position] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[position] && matches!(offset, -15 | -6 | 10 | 17))
}

fn king_wraps(position: usize, offset: i32) -> bool {
    (FIRST_COLUMN[position] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[position] && matches!(offset, -7 | 1 | 9))
}

fn ray_wraps(position: usize, direction: i32) -> bool {
    (FIRST_COLUMN[position] && matches!(direction, -9 | -1 | 7))
        || (EIGHTH_COLUMN[position] && matches!(direction, -7 | 1 | 9))
}

fn pawn_capture_wraps(position: usize, offset: i32, color: Color) -> bool {
    match offset {
        7 => {
            (FIRST_COLUMN[position] && color.is_black())
                || (EIGHTH_COLUMN[position] && color.is_white())
        }
        9 => {
            (FIRST_COLUMN[position] && color.is_white())
                || (EIGHTH_COLUMN[position] && color.is_black())
        }
        _ => false,
    }
}

/// Moves in `moves` whose destination is `square`. Used for check detection
/// and castling safety.
pub(crate) fn attacks_on_square(square: Square, moves: &[Move]) -> impl Iterator<Item = &Move> {
    moves.iter().filter(move |mv| mv.destination() == square)
}
