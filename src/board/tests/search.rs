//! Minimax and alpha-beta strategies.

use super::{kings_board, piece, play, sq};
use crate::board::search::{ordered_moves, AlphaBeta, Minimax, MoveStrategy};
use crate::board::types::{Color, PieceType};
use crate::board::Board;

#[test]
fn test_white_finds_mate_in_one() {
    // Scholar's mate, one ply before delivery.
    let board = play(&[
        ("e2", "e4"),
        ("e7", "e5"),
        ("d1", "h5"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ]);
    let mut strategy = Minimax::new();
    let mv = strategy.execute(&board, 1);
    assert_eq!(mv.source(), sq("h5"));
    assert_eq!(mv.destination(), sq("f7"));
    assert!(strategy.best_score().unwrap() >= 1_000_000);
}

#[test]
fn test_black_finds_mate_in_one() {
    // Fool's mate, one ply before delivery.
    let board = play(&[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    let mut strategy = AlphaBeta::new();
    let mv = strategy.execute(&board, 1);
    assert_eq!(mv.source(), sq("d8"));
    assert_eq!(mv.destination(), sq("h4"));
    assert!(strategy.best_score().unwrap() <= -1_000_000);
}

#[test]
fn test_strategies_agree_on_a_hanging_queen() {
    let board = kings_board(
        &[
            piece(PieceType::Rook, "d4", Color::White),
            piece(PieceType::Queen, "d7", Color::Black),
        ],
        Color::White,
    );
    let mut minimax = Minimax::new();
    let mut alphabeta = AlphaBeta::new();
    let plain = minimax.execute(&board, 2);
    let pruned = alphabeta.execute(&board, 2);

    assert_eq!(plain.destination(), sq("d7"));
    assert_eq!(plain, pruned);
    assert_eq!(minimax.best_score(), alphabeta.best_score());
}

#[test]
fn test_pruning_never_evaluates_more_boards() {
    let board = Board::standard();
    let mut minimax = Minimax::new();
    let mut alphabeta = AlphaBeta::new();
    let _ = minimax.execute(&board, 2);
    let _ = alphabeta.execute(&board, 2);
    assert!(alphabeta.boards_evaluated() <= minimax.boards_evaluated());
    assert!(alphabeta.boards_evaluated() > 0);
}

#[test]
fn test_minimax_board_count_from_start() {
    // Twenty openings times twenty replies.
    let mut strategy = Minimax::new();
    let _ = strategy.execute(&Board::standard(), 2);
    assert_eq!(strategy.boards_evaluated(), 400);
}

#[test]
fn test_leaf_counts_sum_to_board_total() {
    let board = Board::standard();

    let mut minimax = Minimax::new();
    let _ = minimax.execute(&board, 2);
    let sum: u64 = minimax.leaf_counts().iter().map(|(_, n)| n).sum();
    assert_eq!(sum, minimax.boards_evaluated());
    assert_eq!(minimax.leaf_counts().len(), 20);

    let mut alphabeta = AlphaBeta::new();
    let _ = alphabeta.execute(&board, 2);
    let sum: u64 = alphabeta.leaf_counts().iter().map(|(_, n)| n).sum();
    assert_eq!(sum, alphabeta.boards_evaluated());
}

#[test]
fn test_search_on_a_finished_game_returns_null() {
    let board = play(&[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
    assert!(board.current_player().is_in_checkmate(&board));
    let mut strategy = Minimax::new();
    let mv = strategy.execute(&board, 2);
    assert!(mv.is_null());
    assert!(strategy.best_score().is_none());
    assert_eq!(strategy.boards_evaluated(), 0);
}

#[test]
fn test_capture_ordering_comes_first() {
    let board = play(&[("e2", "e4"), ("d7", "d5")]);
    let ordered = ordered_moves(board.current_player().legal_moves());
    assert!(ordered[0].is_attack());
    assert_eq!(ordered[0].destination(), sq("d5"));
    assert!(ordered.iter().skip(1).all(|mv| !mv.is_attack()));
}

#[test]
fn test_deeper_search_still_finds_the_mate() {
    let board = play(&[
        ("e2", "e4"),
        ("e7", "e5"),
        ("d1", "h5"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ]);
    let mut strategy = AlphaBeta::new();
    let mv = strategy.execute(&board, 3);
    assert_eq!(mv.destination(), sq("f7"));
    // Mates nearer the root score higher than deeper ones.
    assert!(strategy.best_score().unwrap() >= 1_000_000 + 2);
}
