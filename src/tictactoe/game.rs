//! Tic-tac-toe session: board, options, running score and turn flow.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{GameError, GameRng, Position};

use super::board::{Board, Cell, Symbol, SIZE};
use super::eval::winner;
use super::policy::{select_move, Difficulty};

/// Player-selected options. The AI always plays the other symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeOptions {
    pub player_symbol: Symbol,
    pub difficulty: Difficulty,
}

impl TicTacToeOptions {
    /// Parse request strings; a missing value falls back to the default
    /// (player X, hard).
    pub fn parse(player_symbol: Option<&str>, difficulty: Option<&str>) -> Result<Self, GameError> {
        let mut options = Self::default();
        if let Some(s) = player_symbol {
            options.player_symbol = s.parse()?;
        }
        if let Some(d) = difficulty {
            options.difficulty = d.parse()?;
        }
        Ok(options)
    }

    pub fn with_player_symbol(mut self, symbol: Symbol) -> Self {
        self.player_symbol = symbol;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn ai_symbol(&self) -> Symbol {
        self.player_symbol.opponent()
    }
}

/// Result of a player move, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveStatus {
    Win,
    Lose,
    Draw,
    Continue,
}

/// What happened to the submitted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The player's mark was placed (and possibly an AI reply).
    Played,
    /// The round was already decided; nothing changed.
    AlreadyOver,
}

/// Board and running score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSnapshot {
    pub board: Board,
    pub player_score: u32,
    pub ai_score: u32,
}

/// Response to `apply_player_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub status: MoveStatus,
    #[serde(flatten)]
    pub snapshot: TicTacToeSnapshot,
    /// Cell the AI marked in reply, if it moved.
    pub ai_move: Option<Position>,
    pub outcome: TurnOutcome,
}

/// One caller's tic-tac-toe game.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    board: Board,
    options: TicTacToeOptions,
    player_score: u32,
    ai_score: u32,
    rng: GameRng,
}

impl TicTacToe {
    /// New game with an empty board and zero scores.
    #[must_use]
    pub fn new(options: TicTacToeOptions, rng: GameRng) -> Self {
        Self {
            board: Board::new(),
            options,
            player_score: 0,
            ai_score: 0,
            rng,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> TicTacToeOptions {
        self.options
    }

    #[must_use]
    pub fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeSnapshot {
            board: self.board,
            player_score: self.player_score,
            ai_score: self.ai_score,
        }
    }

    /// Clear the board and zero both scores.
    pub fn reset(&mut self) -> TicTacToeSnapshot {
        self.board = Board::new();
        self.player_score = 0;
        self.ai_score = 0;
        debug!("tic-tac-toe reset");
        self.snapshot()
    }

    /// Clear the board, keeping scores and options.
    pub fn new_round(&mut self) -> TicTacToeSnapshot {
        self.board = Board::new();
        self.snapshot()
    }

    /// Replace the options and clear the board. Scores are kept.
    pub fn set_options(&mut self, options: TicTacToeOptions) {
        self.options = options;
        self.board = Board::new();
        debug!(
            player = %options.player_symbol,
            ai = %options.ai_symbol(),
            difficulty = %options.difficulty,
            "tic-tac-toe options set"
        );
    }

    /// Status of the current board if the round is decided.
    #[must_use]
    pub fn settled_status(&self) -> Option<MoveStatus> {
        match winner(&self.board) {
            Some(s) if s == self.options.player_symbol => Some(MoveStatus::Win),
            Some(_) => Some(MoveStatus::Lose),
            None if self.board.is_full() => Some(MoveStatus::Draw),
            None => None,
        }
    }

    /// Place the player's mark at (`row`, `col`) and let the AI reply.
    ///
    /// Off-board and occupied cells are rejected without changing anything.
    /// On a board that is already decided the move is ignored and the settled
    /// status is reported again (scores are not counted twice).
    #[instrument(skip(self), fields(player = %self.options.player_symbol))]
    pub fn apply_player_move(&mut self, row: usize, col: usize) -> Result<MoveReport, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        if let Some(status) = self.settled_status() {
            debug!(?status, "move after round ended ignored");
            return Ok(self.report(status, None, TurnOutcome::AlreadyOver));
        }

        let pos = Position::new(row, col);
        if !self.board.get(pos).is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }

        let player = self.options.player_symbol;
        let ai = self.options.ai_symbol();

        self.board.set(pos, Cell::Mark(player));
        if winner(&self.board) == Some(player) {
            self.player_score += 1;
            info!(player_score = self.player_score, "player wins");
            return Ok(self.report(MoveStatus::Win, None, TurnOutcome::Played));
        }
        if self.board.is_full() {
            info!("draw");
            return Ok(self.report(MoveStatus::Draw, None, TurnOutcome::Played));
        }

        let ai_move = select_move(&self.board, ai, self.options.difficulty, &mut self.rng);
        if let Some(reply) = ai_move {
            self.board.set(reply, Cell::Mark(ai));
            debug!(%reply, difficulty = %self.options.difficulty, "ai replied");
        }

        let status = if winner(&self.board) == Some(ai) {
            self.ai_score += 1;
            info!(ai_score = self.ai_score, "ai wins");
            MoveStatus::Lose
        } else if self.board.is_full() {
            info!("draw");
            MoveStatus::Draw
        } else {
            MoveStatus::Continue
        };
        Ok(self.report(status, ai_move, TurnOutcome::Played))
    }

    fn report(&self, status: MoveStatus, ai_move: Option<Position>, outcome: TurnOutcome) -> MoveReport {
        MoveReport {
            status,
            snapshot: self.snapshot(),
            ai_move,
            outcome,
        }
    }
}
