//! Per-caller session holding both games.
//!
//! A host serving several callers gives each one its own `Session` and
//! serializes access to it (one lock per session, or a single owning task).
//! Both games draw randomness from independent streams of the session seed,
//! so a session replays exactly from its seed and command sequence.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameError, GameRng};
use crate::tictactoe::{MoveReport, TicTacToe, TicTacToeOptions, TicTacToeSnapshot};
use crate::wumpus::{ShotReport, StepReport, WorldStatus, WumpusConfig, WumpusGame};

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for every random decision in the session.
    pub seed: u64,
    pub tictactoe: TicTacToeOptions,
    pub wumpus: WumpusConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tictactoe: TicTacToeOptions::default(),
            wumpus: WumpusConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_tictactoe(mut self, options: TicTacToeOptions) -> Self {
        self.tictactoe = options;
        self
    }

    pub fn with_wumpus(mut self, config: WumpusConfig) -> Self {
        self.wumpus = config;
        self
    }
}

/// One caller's tic-tac-toe game and Wumpus game.
#[derive(Clone, Debug)]
pub struct Session {
    tictactoe: TicTacToe,
    wumpus: WumpusGame,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        let root = GameRng::new(config.seed);
        Ok(Self {
            tictactoe: TicTacToe::new(config.tictactoe, root.for_context("tictactoe")),
            wumpus: WumpusGame::new(config.wumpus, root.for_context("wumpus"))?,
        })
    }

    #[must_use]
    pub fn tictactoe(&self) -> &TicTacToe {
        &self.tictactoe
    }

    #[must_use]
    pub fn wumpus(&self) -> &WumpusGame {
        &self.wumpus
    }

    /// Clear the board and zero both scores.
    pub fn reset_tictactoe(&mut self) -> TicTacToeSnapshot {
        self.tictactoe.reset()
    }

    /// Set the player's symbol and the difficulty; clears the board.
    pub fn set_options(&mut self, options: TicTacToeOptions) {
        self.tictactoe.set_options(options);
    }

    pub fn apply_player_move(&mut self, row: usize, col: usize) -> Result<MoveReport, GameError> {
        self.tictactoe.apply_player_move(row, col)
    }

    pub fn wumpus_start(&mut self) -> WorldStatus {
        self.wumpus.start()
    }

    pub fn wumpus_move(&mut self, direction: Direction) -> StepReport {
        self.wumpus.move_player(direction)
    }

    pub fn wumpus_shoot(&mut self, direction: Direction) -> ShotReport {
        self.wumpus.shoot(direction)
    }

    #[must_use]
    pub fn wumpus_status(&self) -> WorldStatus {
        self.wumpus.status()
    }
}
