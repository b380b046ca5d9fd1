//! Arrow shots along a grid axis.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::Direction;

use super::world::WumpusWorld;

/// What a shoot command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    /// The arrow killed the wumpus.
    Hit,
    /// The arrow was spent without hitting anything.
    Miss,
    /// No arrows left; nothing changed.
    NoArrows,
    /// Episode already over; nothing changed.
    Ignored,
}

impl ShotOutcome {
    #[must_use]
    pub fn is_hit(self) -> bool {
        self == ShotOutcome::Hit
    }
}

/// Fire one arrow from the player's cell in `dir`.
///
/// A valid shot always spends an arrow. It hits if the live wumpus is on any
/// cell beyond the player up to the grid edge; a hit ends the episode.
pub fn resolve_shot(world: &mut WumpusWorld, dir: Direction) -> ShotOutcome {
    if world.game_over {
        return ShotOutcome::Ignored;
    }
    if world.arrows == 0 {
        debug!(direction = %dir, "no arrows left");
        return ShotOutcome::NoArrows;
    }

    world.arrows -= 1;
    let hit = world.wumpus_alive && world.player.ray(dir, world.size).any(|p| p == world.wumpus);

    if hit {
        world.wumpus_alive = false;
        world.game_over = true;
        info!(direction = %dir, wumpus = %world.wumpus, "wumpus killed");
        ShotOutcome::Hit
    } else {
        debug!(direction = %dir, arrows = world.arrows, "arrow missed");
        ShotOutcome::Miss
    }
}
