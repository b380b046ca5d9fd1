//! Wumpus world state.
//!
//! The world is mutated only through `movement::resolve_move` and
//! `arrow::resolve_shot`; once `game_over` is set neither changes anything.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{GameError, Position};

/// Full (unfiltered) world state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WumpusWorld {
    pub(crate) size: usize,
    pub(crate) player: Position,
    pub(crate) wumpus: Position,
    pub(crate) pits: FxHashSet<Position>,
    pub(crate) gold: Position,
    pub(crate) has_gold: bool,
    pub(crate) wumpus_alive: bool,
    pub(crate) player_alive: bool,
    pub(crate) arrows: u32,
    pub(crate) game_over: bool,
}

impl WumpusWorld {
    /// Build a fresh world from explicit positions.
    ///
    /// Enforces the same layout rules as generation: everything on the grid,
    /// and the player start, wumpus, pits and gold pairwise distinct.
    pub fn with_layout(
        size: usize,
        player: Position,
        wumpus: Position,
        pits: impl IntoIterator<Item = Position>,
        gold: Position,
        arrows: u32,
    ) -> Result<Self, GameError> {
        let pits: FxHashSet<Position> = pits.into_iter().collect();
        let invalid = |message: String| -> Result<Self, GameError> {
            Err(GameError::InvalidConfig { message })
        };

        if size == 0 {
            return invalid("grid size must be positive".into());
        }
        for (name, pos) in [("player", player), ("wumpus", wumpus), ("gold", gold)] {
            if !pos.in_bounds(size) {
                return invalid(format!("{name} at {pos} is off the {size}x{size} grid"));
            }
        }
        if let Some(pit) = pits.iter().find(|p| !p.in_bounds(size)) {
            return invalid(format!("pit at {pit} is off the {size}x{size} grid"));
        }
        if wumpus == player {
            return invalid(format!("wumpus shares the player start {player}"));
        }
        if pits.contains(&player) || pits.contains(&wumpus) {
            return invalid("a pit overlaps the player start or the wumpus".into());
        }
        if gold == player || gold == wumpus || pits.contains(&gold) {
            return invalid(format!("gold at {gold} overlaps another entity"));
        }

        Ok(Self {
            size,
            player,
            wumpus,
            pits,
            gold,
            has_gold: false,
            wumpus_alive: true,
            player_alive: true,
            arrows,
            game_over: false,
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn player(&self) -> Position {
        self.player
    }

    #[must_use]
    pub fn wumpus(&self) -> Position {
        self.wumpus
    }

    #[must_use]
    pub fn gold(&self) -> Position {
        self.gold
    }

    #[must_use]
    pub fn pits(&self) -> &FxHashSet<Position> {
        &self.pits
    }

    /// Pits in row-major order.
    #[must_use]
    pub fn sorted_pits(&self) -> Vec<Position> {
        let mut pits: Vec<_> = self.pits.iter().copied().collect();
        pits.sort_unstable();
        pits
    }

    #[must_use]
    pub fn has_pit(&self, pos: Position) -> bool {
        self.pits.contains(&pos)
    }

    #[must_use]
    pub fn has_gold(&self) -> bool {
        self.has_gold
    }

    #[must_use]
    pub fn wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    #[must_use]
    pub fn player_alive(&self) -> bool {
        self.player_alive
    }

    #[must_use]
    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Whether the episode has ended (death, gold, or a dead wumpus).
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// ASCII map. Hidden entities are drawn only when `reveal` is set.
    ///
    /// `P` player, `W` live wumpus, `w` dead wumpus, `o` pit, `G` gold.
    #[must_use]
    pub fn render(&self, reveal: bool) -> String {
        let mut out = String::with_capacity(self.size * (self.size * 2 + 1));
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Position::new(row, col);
                let glyph = if pos == self.player {
                    'P'
                } else if !reveal {
                    '.'
                } else if pos == self.wumpus {
                    if self.wumpus_alive { 'W' } else { 'w' }
                } else if self.pits.contains(&pos) {
                    'o'
                } else if pos == self.gold && !self.has_gold {
                    'G'
                } else {
                    '.'
                };
                out.push(glyph);
                out.push(if col + 1 == self.size { '\n' } else { ' ' });
            }
        }
        out
    }
}

impl fmt::Display for WumpusWorld {
    /// Shows the hidden layout only once the episode is over.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.game_over))?;
        writeln!(f, "arrows: {}", self.arrows)
    }
}
