//! Error types for game operations.
//!
//! Only malformed input is an error. Commands that arrive after an episode
//! has ended, or a shot with no arrows left, are ordinary tagged outcomes
//! (`TurnOutcome`, `StepOutcome`, `ShotOutcome`) rather than errors.

use thiserror::Error;

/// Errors that can occur in game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GameError {
    /// Direction string is not one of up/down/left/right.
    #[error("invalid direction '{0}' (expected up, down, left or right)")]
    InvalidDirection(String),

    /// Symbol string is not X or O.
    #[error("invalid symbol '{0}' (expected 'X' or 'O')")]
    InvalidSymbol(String),

    /// Difficulty string is not easy or hard.
    #[error("invalid difficulty '{0}' (expected 'easy' or 'hard')")]
    InvalidDifficulty(String),

    /// Board coordinates outside the 3x3 grid.
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Target cell already holds a mark.
    #[error("position ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Rejected configuration values.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}
