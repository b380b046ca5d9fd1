//! Exhaustive minimax search over 3x3 boards.
//!
//! Scores are depth-agnostic: a win in one ply and a win in five plies both
//! score `+10`. That affects which of several winning replies is chosen (the
//! first in row-major order), and is kept intentionally.
//!
//! The search recurses over owned board copies; no branch ever observes
//! another branch's placements.

use serde::{Deserialize, Serialize};

use crate::core::Position;

use super::board::{Board, Symbol};
use super::eval::evaluate;

/// Counters collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions scored (every call into the recursive step).
    pub nodes: u64,

    /// Positions that ended in a completed line or a full board.
    pub terminals: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,
}

/// Minimax searcher for a fixed AI symbol.
#[derive(Clone, Debug)]
pub struct Minimax {
    ai: Symbol,
    stats: SearchStats,
}

impl Minimax {
    #[must_use]
    pub fn new(ai: Symbol) -> Self {
        Self {
            ai,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn ai(&self) -> Symbol {
        self.ai
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Minimax value of `board` with `maximizing` telling whether the AI is
    /// to move.
    pub fn score(&mut self, board: Board, maximizing: bool) -> i32 {
        self.search(board, maximizing, 0)
    }

    /// Score of every empty cell for an AI move, in row-major order.
    pub fn score_moves(&mut self, board: Board) -> Vec<(Position, i32)> {
        board
            .empty_cells()
            .into_iter()
            .map(|pos| {
                let score = self.search(board.with_mark(pos, self.ai), false, 1);
                (pos, score)
            })
            .collect()
    }

    /// The AI's best reply: strictly greatest score, first seen in row-major
    /// order wins ties. `None` when the board has no empty cell.
    pub fn best_move(&mut self, board: Board) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.score_moves(board) {
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos)
    }

    fn search(&mut self, board: Board, maximizing: bool, depth: u32) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let score = evaluate(&board, self.ai);
        if score != 0 {
            self.stats.terminals += 1;
            return score;
        }
        if board.is_full() {
            self.stats.terminals += 1;
            return 0;
        }

        let mover = if maximizing { self.ai } else { self.ai.opponent() };
        let children = board
            .empty_cells()
            .into_iter()
            .map(|pos| board.with_mark(pos, mover));

        if maximizing {
            children.fold(i32::MIN, |best, child| {
                best.max(self.search(child, false, depth + 1))
            })
        } else {
            children.fold(i32::MAX, |best, child| {
                best.min(self.search(child, true, depth + 1))
            })
        }
    }
}
