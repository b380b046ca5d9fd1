//! Wumpus world configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Parameters for world generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WumpusConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Number of distinct pits to place.
    pub pit_count: usize,

    /// Arrows the player starts with.
    pub arrows: u32,
}

impl Default for WumpusConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            pit_count: 3,
            arrows: 1,
        }
    }
}

impl WumpusConfig {
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    pub fn with_pit_count(mut self, count: usize) -> Self {
        self.pit_count = count;
        self
    }

    pub fn with_arrows(mut self, arrows: u32) -> Self {
        self.arrows = arrows;
        self
    }

    /// Check that generation can place every entity on its own cell.
    ///
    /// The player start, the wumpus and the gold each need a cell, so the
    /// pits may use at most `grid_size² - 3` cells.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_size < 2 {
            return Err(GameError::InvalidConfig {
                message: format!("grid size must be at least 2, got {}", self.grid_size),
            });
        }
        let cells = self.grid_size.saturating_mul(self.grid_size);
        if self.pit_count.saturating_add(3) > cells {
            return Err(GameError::InvalidConfig {
                message: format!(
                    "{} pits do not fit on a {}x{} grid",
                    self.pit_count, self.grid_size, self.grid_size
                ),
            });
        }
        Ok(())
    }
}
