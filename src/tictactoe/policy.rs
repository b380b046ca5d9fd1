//! AI move policies and difficulty selection.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `RandomPolicy`: uniform among empty cells (easy)
//! - `MinimaxPolicy`: exhaustive search (hard)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{GameError, GameRng, Position};

use super::board::{Board, Symbol};
use super::minimax::{Minimax, SearchStats};

/// Policy for choosing the AI's reply.
pub trait MovePolicy: Send + Sync {
    /// Choose a cell for `ai` to mark. `None` when no empty cell exists.
    fn choose(&self, board: &Board, ai: Symbol, rng: &mut GameRng) -> Option<Position>;
}

/// Uniform random choice among empty cells.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, board: &Board, _ai: Symbol, rng: &mut GameRng) -> Option<Position> {
        rng.choose(&board.empty_cells()).copied()
    }
}

/// Exhaustive minimax; deterministic, ignores the RNG.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy;

impl MinimaxPolicy {
    /// Best move together with the search counters.
    pub fn choose_with_stats(&self, board: &Board, ai: Symbol) -> (Option<Position>, SearchStats) {
        let mut search = Minimax::new(ai);
        let best = search.best_move(*board);
        (best, search.stats().clone())
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose(&self, board: &Board, ai: Symbol, _rng: &mut GameRng) -> Option<Position> {
        let (best, stats) = self.choose_with_stats(board, ai);
        tracing::trace!(nodes = stats.nodes, max_depth = stats.max_depth, "minimax search");
        best
    }
}

/// AI strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
}

impl Difficulty {
    /// The policy implementing this difficulty.
    #[must_use]
    pub fn policy(self) -> &'static dyn MovePolicy {
        match self {
            Difficulty::Easy => &RandomPolicy,
            Difficulty::Hard => &MinimaxPolicy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Pick the AI's reply for `difficulty`.
pub fn select_move(
    board: &Board,
    ai: Symbol,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<Position> {
    difficulty.policy().choose(board, ai, rng)
}
