//! Plain minimax without pruning.

use std::time::Instant;

use super::{is_end_game, BoardEvaluator, MoveStrategy, SearchInfo, SearchLogger, StandardEvaluator};
use crate::board::types::Move;
use crate::board::Board;

/// Exhaustive minimax: tries every playable move to the depth bound and
/// scores leaves with [`StandardEvaluator`]. Ties are broken by generation
/// order — the first move seen with the best score wins.
///
/// Alongside the total board counter, the search keeps a per-root-move
/// count of scored leaves; the counts must sum to the total, which the
/// tests use to pin reproducibility.
pub struct Minimax {
    evaluator: StandardEvaluator,
    boards_evaluated: u64,
    leaf_counts: Vec<(Move, u64)>,
    best_score: Option<i32>,
    logger: Option<Box<dyn SearchLogger>>,
}

impl Minimax {
    #[must_use]
    pub fn new() -> Self {
        Minimax {
            evaluator: StandardEvaluator,
            boards_evaluated: 0,
            leaf_counts: Vec::new(),
            best_score: None,
            logger: None,
        }
    }

    #[must_use]
    pub fn with_logger(logger: Box<dyn SearchLogger>) -> Self {
        Minimax {
            logger: Some(logger),
            ..Self::new()
        }
    }

    /// Leaf boards scored under each root move during the last search.
    #[must_use]
    pub fn leaf_counts(&self) -> &[(Move, u64)] {
        &self.leaf_counts
    }

    /// Root score of the selected move, if the last search found one.
    #[must_use]
    pub fn best_score(&self) -> Option<i32> {
        self.best_score
    }

    fn min(&mut self, board: &Board, depth: u32, leaves: &mut u64) -> i32 {
        if depth == 0 || is_end_game(board) {
            self.boards_evaluated += 1;
            *leaves += 1;
            return self.evaluator.evaluate(board, depth);
        }
        let mut lowest = i32::MAX;
        for mv in board.current_player().legal_moves() {
            let transition = board.make_move(mv);
            if transition.status().is_done() {
                lowest = lowest.min(self.max(transition.board(), depth - 1, leaves));
            }
        }
        lowest
    }

    fn max(&mut self, board: &Board, depth: u32, leaves: &mut u64) -> i32 {
        if depth == 0 || is_end_game(board) {
            self.boards_evaluated += 1;
            *leaves += 1;
            return self.evaluator.evaluate(board, depth);
        }
        let mut highest = i32::MIN;
        for mv in board.current_player().legal_moves() {
            let transition = board.make_move(mv);
            if transition.status().is_done() {
                highest = highest.max(self.min(transition.board(), depth - 1, leaves));
            }
        }
        highest
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for Minimax {
    fn execute(&mut self, board: &Board, depth: u32) -> Move {
        assert!(depth > 0, "search depth must be at least one ply");
        let start = Instant::now();
        self.boards_evaluated = 0;
        self.leaf_counts.clear();
        self.best_score = None;

        let mover = board.to_move();
        let moves: Vec<Move> = board.current_player().legal_moves().to_vec();
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
                self.min(transition.board(), depth - 1, &mut leaves)
            } else {
                self.max(transition.board(), depth - 1, &mut leaves)
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
