//! Adversarial tree search over board successors.
//!
//! Strategies walk the game tree by trial-executing legal moves through
//! [`Board::make_move`], so they see exactly the legality rules the rest of
//! the engine enforces. White maximizes and Black minimizes the evaluator's
//! absolute score. The only termination control is the depth bound; search
//! never fails — a position with no playable move is a terminal game state
//! the caller should detect before searching.

mod alphabeta;
mod minimax;

pub use super::eval::{BoardEvaluator, StandardEvaluator};
pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

use std::cmp::Reverse;
use std::time::Duration;

use super::types::{Color, Move, PieceType};
use super::Board;

/// A pluggable move-selection strategy.
pub trait MoveStrategy {
    /// Pick a move for the side to move on `board`, exploring `depth` plies.
    ///
    /// Returns [`Move::Null`] when no legal move transitions to done; a
    /// caller should surface checkmate/stalemate before invoking search.
    fn execute(&mut self, board: &Board, depth: u32) -> Move;

    /// How many boards the static evaluator scored during the last
    /// [`MoveStrategy::execute`] call.
    fn boards_evaluated(&self) -> u64;
}

/// Diagnostic summary of one completed search.
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub mover: Color,
    pub depth: u32,
    pub chosen: Move,
    pub score: i32,
    pub boards_evaluated: u64,
    pub elapsed: Duration,
}

impl SearchInfo {
    /// Boards evaluated per second.
    #[must_use]
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.boards_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}

/// Sink for search progress reports.
pub trait SearchLogger {
    /// Called once per root move analyzed.
    fn analyzing(&self, mv: &Move, index: usize, total: usize, score: i32);

    /// Called when the search completes.
    fn selected(&self, info: &SearchInfo);
}

/// Logger that prints to stdout.
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn analyzing(&self, mv: &Move, index: usize, total: usize, score: i32) {
        println!("\tanalyzing move ({index}/{total}) {mv} scores {score}");
    }

    fn selected(&self, info: &SearchInfo) {
        println!(
            "{} selects {} [depth = {}, #boards = {}, time = {}ms, rate = {:.1}/s]",
            info.mover,
            info.chosen,
            info.depth,
            info.boards_evaluated,
            info.elapsed.as_millis(),
            info.rate()
        );
    }
}

/// Terminal-state check shared by both strategies.
pub(crate) fn is_end_game(board: &Board) -> bool {
    let player = board.current_player();
    player.is_in_checkmate(board) || player.is_in_stalemate(board)
}

/// Move ordering for alpha-beta: tactical moves first, ties keeping
/// generation order (the sort is stable).
pub(crate) fn ordered_moves(moves: &[Move]) -> Vec<Move> {
    let mut ordered = moves.to_vec();
    ordered.sort_by_key(|mv| Reverse(order_score(mv)));
    ordered
}

fn order_score(mv: &Move) -> i32 {
    let mut score = 0;
    if let Some(captured) = mv.captured_piece() {
        score += captured.kind().value();
    }
    if mv.is_promotion() {
        score += PieceType::Queen.value();
    }
    if mv.is_castle() {
        score += 50;
    }
    score
}
