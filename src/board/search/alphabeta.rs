//! Alpha-beta pruning with tactical move ordering.

use std::time::Instant;

use super::{
    is_end_game, ordered_moves, BoardEvaluator, MoveStrategy, SearchInfo, SearchLogger,
    StandardEvaluator,
};
use crate::board::types::Move;
use crate::board::Board;

/// Minimax with alpha-beta thresholds: alpha is the best score the
/// maximizer can already guarantee, beta the minimizer's counterpart, and a
/// branch is abandoned once they cross. Moves are explored captures-first
/// to tighten the window early. Terminal handling and evaluation follow the
/// same contract as [`super::Minimax`], so both strategies agree on the
/// root score.
pub struct AlphaBeta {
    evaluator: StandardEvaluator,
    boards_evaluated: u64,
    leaf_counts: Vec<(Move, u64)>,
    best_score: Option<i32>,
    logger: Option<Box<dyn SearchLogger>>,
}

impl AlphaBeta {
    #[must_use]
    pub fn new() -> Self {
        AlphaBeta {
            evaluator: StandardEvaluator,
            boards_evaluated: 0,
            leaf_counts: Vec::new(),
            best_score: None,
            logger: None,
        }
    }

    #[must_use]
    pub fn with_logger(logger: Box<dyn SearchLogger>) -> Self {
        AlphaBeta {
            logger: Some(logger),
            ..Self::new()
        }
    }

    /// Leaf boards scored under each root move during the last search.
    /// Pruned subtrees make these counts smaller than minimax's, but they
    /// still sum to the total board count.
    #[must_use]
    pub fn leaf_counts(&self) -> &[(Move, u64)] {
        &self.leaf_counts
    }

    /// Root score of the selected move, if the last search found one.
    #[must_use]
    pub fn best_score(&self) -> Option<i32> {
        self.best_score
    }

    fn min(&mut self, board: &Board, depth: u32, alpha: i32, beta: i32, leaves: &mut u64) -> i32 {
        if depth == 0 || is_end_game(board) {
            self.boards_evaluated += 1;
            *leaves += 1;
            return self.evaluator.evaluate(board, depth);
        }
        let mut lowest = beta;
        for mv in ordered_moves(board.current_player().legal_moves()) {
            let transition = board.make_move(&mv);
            if !transition.status().is_done() {
                continue;
            }
            let value = self.max(transition.board(), depth - 1, alpha, lowest, leaves);
            if value < lowest {
                lowest = value;
            }
            if lowest <= alpha {
                break;
            }
        }
        lowest
    }

    fn max(&mut self, board: &Board, depth: u32, alpha: i32, beta: i32, leaves: &mut u64) -> i32 {
        if depth == 0 || is_end_game(board) {
            self.boards_evaluated += 1;
            *leaves += 1;
            return self.evaluator.evaluate(board, depth);
        }
        let mut highest = alpha;
        for mv in ordered_moves(board.current_player().legal_moves()) {
            let transition = board.make_move(&mv);
            if !transition.status().is_done() {
                continue;
            }
            let value = self.min(transition.board(), depth - 1, highest, beta, leaves);
            if value > highest {
                highest = value;
            }
            if highest >= beta {
                break;
            }
        }
        highest
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for AlphaBeta {
    fn execute(&mut self, board: &Board, depth: u32) -> Move {
        assert!(depth > 0, "search depth must be at least one ply");
        let start = Instant::now();
        self.boards_evaluated = 0;
        self.leaf_counts.clear();
        self.best_score = None;

        let mover = board.to_move();
        let moves = ordered_moves(board.current_player().legal_moves());
        let total = moves.len();
        let mut best_move = Move::Null;
        let mut highest = i32::MIN;
        let mut lowest = i32::MAX;

        for (index, mv) in moves.iter().enumerate() {
            let transition = board.make_move(mv);
            if !transition.status().is_done() {
                continue;
            }
            let mut leaves = 0;
            let value = if mover.is_white() {
                self.min(transition.board(), depth - 1, highest, i32::MAX, &mut leaves)
            } else {
                self.max(transition.board(), depth - 1, i32::MIN, lowest, &mut leaves)
            };
            self.leaf_counts.push((mv.clone(), leaves));
            if let Some(logger) = &self.logger {
                logger.analyzing(mv, index + 1, total, value);
            }
            if mover.is_white() && value > highest {
                highest = value;
                best_move = mv.clone();
            } else if mover.is_black() && value < lowest {
                lowest = value;
                best_move = mv.clone();
            }
        }

        if !best_move.is_null() {
            let score = if mover.is_white() { highest } else { lowest };
            self.best_score = Some(score);
            if let Some(logger) = &self.logger {
                logger.selected(&SearchInfo {
                    mover,
                    depth,
                    chosen: best_move.clone(),
                    score,
                    boards_evaluated: self.boards_evaluated,
                    elapsed: start.elapsed(),
                });
            }
        }
        best_move
    }

    fn boards_evaluated(&self) -> u64 {
        self.boards_evaluated
    }
}
