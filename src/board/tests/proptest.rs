//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng as _;

use crate::board::types::{Color, Move};
use crate::board::Board;

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play one random playable move, or return `None` at the end of the game.
fn random_move(board: &Board, rng: &mut StdRng) -> Option<Move> {
    let mut playable: Vec<Move> = board
        .current_player()
        .legal_moves()
        .iter()
        .filter(|mv| board.make_move(mv).status().is_done())
        .cloned()
        .collect();
    if playable.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..playable.len());
    Some(playable.swap_remove(index))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Every board reached by legal play satisfies the structural
    /// invariants: at most sixteen pieces per side, tiles and active-piece
    /// lists agree, and the en-passant pawn (when present) belongs to the
    /// side that just moved.
    #[test]
    fn prop_playout_preserves_invariants(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = Board::standard();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some(mv) = random_move(&board, &mut rng) else {
                break;
            };
            board = board.make_move(&mv).into_board();

            for color in Color::BOTH {
                let pieces = board.active_pieces(color);
                prop_assert!(pieces.len() <= 16);
                prop_assert_eq!(
                    pieces.iter().filter(|p| p.kind().is_king()).count(),
                    1
                );
            }
            for p in board.all_pieces() {
                prop_assert_eq!(board.piece_at(p.square()), Some(p));
            }
            let occupied = crate::board::Square::all()
                .filter(|&s| board.piece_at(s).is_some())
                .count();
            prop_assert_eq!(occupied, board.all_pieces().count());

            if let Some(ep) = board.en_passant_pawn() {
                prop_assert_eq!(ep.color(), board.to_move().opponent());
                prop_assert!(
                    matches!(mv, Move::PawnJump { .. }),
                    "en-passant pawn present but last move was not a pawn jump"
                );
            }
        }
    }

    /// Executing a random move and undoing it restores the piece layout
    /// and the side to move.
    #[test]
    fn prop_execute_undo_restores_layout(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = Board::standard();
        let mut rng = StdRng::seed_from_u64(seed);

        // Walk to a random position, then probe every playable move there.
        for _ in 0..num_moves {
            let Some(mv) = random_move(&board, &mut rng) else {
                break;
            };
            board = board.make_move(&mv).into_board();
        }

        let mover = board.to_move();
        for mv in board.current_player().legal_moves() {
            if !board.make_move(mv).status().is_done() {
                continue;
            }
            let next = mv.execute(&board);
            let restored = mv.undo(&next);
            prop_assert_eq!(restored.piece_layout(), board.piece_layout());
            prop_assert_eq!(restored.to_move(), mover);
        }
    }

    /// The turn strictly alternates along any legal line of play.
    #[test]
    fn prop_turn_alternates(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::standard();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut expected = Color::White;

        for _ in 0..num_moves {
            prop_assert_eq!(board.to_move(), expected);
            let Some(mv) = random_move(&board, &mut rng) else {
                break;
            };
            prop_assert_eq!(mv.moved_piece().color(), expected);
            board = board.make_move(&mv).into_board();
            expected = expected.opponent();
        }
    }
}

#[test]
fn test_seeded_playout_is_reproducible() {
    let mut rng_a = StdRng::seed_from_u64(0xC0FFEE);
    let mut rng_b = StdRng::seed_from_u64(0xC0FFEE);
    let mut board_a = Board::standard();
    let mut board_b = Board::standard();

    for _ in 0..30 {
        let (Some(a), Some(b)) = (
            random_move(&board_a, &mut rng_a),
            random_move(&board_b, &mut rng_b),
        ) else {
            break;
        };
        assert_eq!(a, b);
        board_a = board_a.make_move(&a).into_board();
        board_b = board_b.make_move(&b).into_board();
    }
    assert_eq!(board_a.piece_layout(), board_b.piece_layout());
}
