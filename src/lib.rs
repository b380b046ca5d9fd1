//! # grid-arcade
//!
//! Two small turn-based game engines behind a request/response API:
//!
//! - **Tic-tac-toe** against an AI that plays either uniformly at random
//!   (easy) or by exhaustive minimax (hard, never loses).
//! - **Wumpus world**, an 8x8 hidden-information cave explored through
//!   breeze and stench percepts, with one arrow to shoot the wumpus.
//!
//! ## Design Principles
//!
//! 1. **Caller-owned sessions**: No global state. Each caller owns a
//!    `Session` and passes it to every operation.
//!
//! 2. **Deterministic**: All randomness comes from a seeded `GameRng`, so a
//!    session replays exactly from its seed.
//!
//! 3. **No faults for game events**: Malformed input is a `GameError`;
//!    commands after an episode ends, or a shot with no arrows, are tagged
//!    outcomes that leave state unchanged.
//!
//! ## Modules
//!
//! - `core`: Grid positions, directions, RNG, errors
//! - `tictactoe`: Board, win evaluation, minimax, move policies, game flow
//! - `wumpus`: World, generation, movement, arrows, percepts, snapshots
//! - `session`: Per-caller session combining both games
//!
//! ```
//! use grid_arcade::{Direction, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(7)).unwrap();
//!
//! let report = session.apply_player_move(1, 1).unwrap();
//! assert_eq!(report.snapshot.board.count(grid_arcade::Symbol::O), 1);
//!
//! let status = session.wumpus_move(Direction::Down).game;
//! assert!(status.pits.is_empty() || status.game_over);
//! ```

pub mod core;
pub mod session;
pub mod tictactoe;
pub mod wumpus;

// Re-export commonly used types
pub use crate::core::{Direction, GameError, GameRng, Position};

pub use crate::session::{Session, SessionConfig};

pub use crate::tictactoe::{
    Board, Cell, Difficulty, Minimax, MoveReport, MoveStatus, SearchStats, Symbol, TicTacToe,
    TicTacToeOptions, TicTacToeSnapshot, TurnOutcome,
};

pub use crate::wumpus::{
    Percepts, ShotOutcome, ShotReport, StepOutcome, StepReport, WorldEvent, WorldGenerator,
    WorldStatus, WumpusConfig, WumpusGame, WumpusWorld,
};
