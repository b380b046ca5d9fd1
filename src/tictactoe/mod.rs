//! Tic-tac-toe against a minimax or random opponent.
//!
//! - `board`: 3x3 storage, symbols and cells
//! - `eval`: completed-line detection and ±10 scoring
//! - `minimax`: exhaustive adversarial search
//! - `policy`: difficulty-gated move selection
//! - `game`: one caller's game (options, scores, turn flow)

pub mod board;
pub mod eval;
pub mod game;
pub mod minimax;
pub mod policy;

pub use board::{Board, Cell, Symbol};
pub use eval::{evaluate, winner, LINES, WIN_SCORE};
pub use game::{MoveReport, MoveStatus, TicTacToe, TicTacToeOptions, TicTacToeSnapshot, TurnOutcome};
pub use minimax::{Minimax, SearchStats};
pub use policy::{select_move, Difficulty, MinimaxPolicy, MovePolicy, RandomPolicy};
