//! Board building, tile views and display.

use super::{kings_board, piece, sq};
use crate::board::types::{Color, PieceType};
use crate::board::{Board, BoardBuilder};

#[test]
fn test_standard_position_layout() {
    let board = Board::standard();
    assert_eq!(board.active_pieces(Color::White).len(), 16);
    assert_eq!(board.active_pieces(Color::Black).len(), 16);
    assert_eq!(board.to_move(), Color::White);
    assert!(board.en_passant_pawn().is_none());

    let e1 = board.piece_at(sq("e1")).unwrap();
    assert_eq!(e1.kind(), PieceType::King);
    assert_eq!(e1.color(), Color::White);
    let d8 = board.piece_at(sq("d8")).unwrap();
    assert_eq!(d8.kind(), PieceType::Queen);
    assert_eq!(d8.color(), Color::Black);
    assert!(board.piece_at(sq("e4")).is_none());
}

#[test]
fn test_tiles_agree_with_active_pieces() {
    let board = Board::standard();
    for sq in crate::board::Square::all() {
        let tile = board.tile(sq);
        assert_eq!(tile.square(), sq);
        assert_eq!(tile.piece(), board.piece_at(sq));
        assert_eq!(tile.is_occupied(), board.piece_at(sq).is_some());
    }
    for p in board.all_pieces() {
        assert_eq!(board.piece_at(p.square()), Some(p));
    }
}

#[test]
fn test_every_standard_opening_move_counted() {
    let board = Board::standard();
    // 16 pawn moves plus 4 knight moves; no castles from the start.
    assert_eq!(board.current_player().legal_moves().len(), 20);
    assert_eq!(board.black_player().legal_moves().len(), 20);
}

#[test]
fn test_display_grid() {
    let rendered = Board::standard().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec![
        "r", "n", "b", "q", "k", "b", "n", "r"
    ]);
    assert_eq!(lines[4].split_whitespace().collect::<Vec<_>>(), vec![
        "-", "-", "-", "-", "-", "-", "-", "-"
    ]);
    assert_eq!(lines[6].split_whitespace().collect::<Vec<_>>(), vec![
        "P", "P", "P", "P", "P", "P", "P", "P"
    ]);
}

#[test]
#[should_panic(expected = "king")]
fn test_builder_rejects_missing_king() {
    let _ = BoardBuilder::new()
        .piece(piece(PieceType::King, "e1", Color::White))
        .piece(piece(PieceType::Queen, "d8", Color::Black))
        .move_maker(Color::White)
        .build();
}

#[test]
fn test_builder_replaces_occupant() {
    let board = kings_board(
        &[
            piece(PieceType::Queen, "d4", Color::White),
            piece(PieceType::Rook, "d4", Color::White),
        ],
        Color::White,
    );
    // Last placement wins.
    assert_eq!(board.piece_at(sq("d4")).unwrap().kind(), PieceType::Rook);
    assert_eq!(board.active_pieces(Color::White).len(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_piece_serde_round_trip() {
    let knight = piece(PieceType::Knight, "g1", Color::White);
    let json = serde_json::to_string(&knight).unwrap();
    let back: crate::board::Piece = serde_json::from_str(&json).unwrap();
    assert_eq!(back, knight);

    let square = sq("e4");
    let json = serde_json::to_string(&square).unwrap();
    let back: crate::board::Square = serde_json::from_str(&json).unwrap();
    assert_eq!(back, square);
}

#[test]
fn test_castle_capability_tracks_first_move_flags() {
    let board = kings_board(
        &[
            piece(PieceType::Rook, "h1", Color::White),
            piece(PieceType::Rook, "a1", Color::White),
        ],
        Color::White,
    );
    let white = board.white_player();
    assert!(white.is_king_side_castle_capable(&board));
    assert!(white.is_queen_side_castle_capable(&board));
    // No rook in either corner.
    assert!(!board.black_player().is_king_side_castle_capable(&board));
    assert!(!board.black_player().is_queen_side_castle_capable(&board));

    // Moving the king-side rook forfeits that side only.
    let mv = crate::board::Move::from_squares(&board, sq("h1"), sq("h4"));
    let board = board.make_move(&mv).into_board();
    let white = board.white_player();
    assert!(!white.is_king_side_castle_capable(&board));
    assert!(white.is_queen_side_castle_capable(&board));
}
