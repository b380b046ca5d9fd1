//! 3x3 tic-tac-toe board.
//!
//! The board is `Copy` (nine bytes), so search code works on owned copies
//! instead of mutating and undoing a shared board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::core::{GameError, Position};

/// Board side length.
pub const SIZE: usize = 3;

/// A player's mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[default]
    X,
    O,
}

impl Symbol {
    /// The other symbol.
    #[must_use]
    pub const fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => f.write_str("X"),
            Symbol::O => f.write_str("O"),
        }
    }
}

impl FromStr for Symbol {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            _ => Err(GameError::InvalidSymbol(s.to_string())),
        }
    }
}

/// Contents of one cell.
///
/// Serializes as `null` or the symbol string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Symbol>", into = "Option<Symbol>")]
pub enum Cell {
    #[default]
    Empty,
    Mark(Symbol),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Mark(s) => Some(s),
        }
    }
}

impl From<Option<Symbol>> for Cell {
    fn from(value: Option<Symbol>) -> Self {
        value.map_or(Cell::Empty, Cell::Mark)
    }
}

impl From<Cell> for Option<Symbol> {
    fn from(cell: Cell) -> Self {
        cell.symbol()
    }
}

/// A 3x3 grid of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rows of `Option<Symbol>`, mainly for tests.
    #[must_use]
    pub fn from_rows(rows: [[Option<Symbol>; SIZE]; SIZE]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Cell::from)),
        }
    }

    /// Cell at `pos`. `pos` must be on the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Cell at `pos`, or `None` off the board.
    #[must_use]
    pub fn try_get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrite the cell at `pos`. Callers validate emptiness first.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// A copy of this board with `symbol` placed at `pos`.
    #[must_use]
    pub fn with_mark(mut self, pos: Position, symbol: Symbol) -> Self {
        self.set(pos, Cell::Mark(symbol));
        self
    }

    /// Rows in order, for rendering and line checks.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Position; 9]> {
        let mut out = SmallVec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    out.push(Position::new(row, col));
                }
            }
        }
        out
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_empty())
    }

    /// Number of cells holding `symbol`.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.symbol() == Some(symbol))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Mark(s) => write!(f, "{s}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
