//! Square-grid coordinates shared by both games.
//!
//! Positions are `(row, col)` with `(0, 0)` in the top-left corner.
//! `Up`/`Down` move along rows, `Left`/`Right` along columns.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::error::GameError;

/// A cell on a square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The top-left corner.
    pub const ORIGIN: Position = Position::new(0, 0);

    /// Whether the position lies on a `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The neighboring cell in `dir`, or `None` if it would leave the grid.
    #[must_use]
    pub fn step(self, dir: Direction, size: usize) -> Option<Position> {
        let next = match dir {
            Direction::Up => Position::new(self.row.checked_sub(1)?, self.col),
            Direction::Down => Position::new(self.row + 1, self.col),
            Direction::Left => Position::new(self.row, self.col.checked_sub(1)?),
            Direction::Right => Position::new(self.row, self.col + 1),
        };
        next.in_bounds(size).then_some(next)
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// 4-connected neighbors clipped to the grid, in `Direction::ALL` order.
    #[must_use]
    pub fn neighbors(self, size: usize) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(dir, size))
            .collect()
    }

    /// Cells strictly beyond `self` in `dir`, up to the grid edge.
    pub fn ray(self, dir: Direction, size: usize) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(dir, size), move |p| p.step(dir, size))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four axis directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}
