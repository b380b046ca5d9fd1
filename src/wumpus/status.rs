//! Fog-of-war snapshot returned to callers.
//!
//! While the episode is running only the player's own state and percepts are
//! exposed. Once it is over the full layout is revealed: wumpus, gold and
//! every pit.

use serde::{Deserialize, Serialize};

use crate::core::Position;

use super::percept::sense;
use super::world::WumpusWorld;

/// Caller-visible world state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldStatus {
    pub grid_size: usize,
    pub player_pos: Position,
    pub arrows: u32,
    pub is_alive: bool,
    pub is_wumpus_alive: bool,
    pub has_gold: bool,
    pub game_over: bool,
    pub breeze: bool,
    pub stench: bool,
    /// Revealed once the episode is over.
    pub wumpus_pos: Option<Position>,
    /// Revealed once the episode is over.
    pub gold_pos: Option<Position>,
    /// Revealed once the episode is over, row-major; empty before.
    pub pits: Vec<Position>,
}

impl WorldStatus {
    /// Snapshot `world`, hiding entity positions until it is over.
    #[must_use]
    pub fn of(world: &WumpusWorld) -> Self {
        let percepts = sense(world);
        let reveal = world.is_game_over();
        Self {
            grid_size: world.size(),
            player_pos: world.player(),
            arrows: world.arrows(),
            is_alive: world.player_alive(),
            is_wumpus_alive: world.wumpus_alive(),
            has_gold: world.has_gold(),
            game_over: reveal,
            breeze: percepts.breeze,
            stench: percepts.stench,
            wumpus_pos: reveal.then(|| world.wumpus()),
            gold_pos: reveal.then(|| world.gold()),
            pits: if reveal { world.sorted_pits() } else { Vec::new() },
        }
    }
}
