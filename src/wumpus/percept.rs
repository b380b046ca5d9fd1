//! Percepts: what the player can sense from the current cell.

use serde::{Deserialize, Serialize};

use super::world::WumpusWorld;

/// Signals derived from the cells 4-adjacent to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percepts {
    /// A pit is adjacent.
    pub breeze: bool,
    /// The live wumpus is adjacent.
    pub stench: bool,
}

/// Compute percepts for the player's current cell.
#[must_use]
pub fn sense(world: &WumpusWorld) -> Percepts {
    let mut percepts = Percepts::default();
    for cell in world.player().neighbors(world.size()) {
        percepts.breeze |= world.has_pit(cell);
        percepts.stench |= world.wumpus_alive() && cell == world.wumpus();
    }
    percepts
}
