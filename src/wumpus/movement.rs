//! Player movement and collision resolution.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::Direction;

use super::world::WumpusWorld;

/// What a move command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// Moved onto a safe cell.
    Moved,
    /// Walked into the grid edge; position unchanged.
    Bumped,
    /// Entered the live wumpus's cell.
    EatenByWumpus,
    /// Entered a pit.
    FellIntoPit,
    /// Entered the gold cell and picked it up.
    FoundGold,
    /// Episode already over; nothing changed.
    Ignored,
}

impl StepOutcome {
    /// Whether this move ended the episode.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StepOutcome::EatenByWumpus | StepOutcome::FellIntoPit | StepOutcome::FoundGold
        )
    }
}

/// Move the player one cell in `dir`, clamped to the grid, then resolve
/// what is on the new cell: live wumpus, then pit, then gold.
pub fn resolve_move(world: &mut WumpusWorld, dir: Direction) -> StepOutcome {
    if world.game_over {
        return StepOutcome::Ignored;
    }

    let next = world.player.step(dir, world.size);
    if let Some(pos) = next {
        world.player = pos;
    }
    let here = world.player;

    let outcome = if here == world.wumpus && world.wumpus_alive {
        world.player_alive = false;
        StepOutcome::EatenByWumpus
    } else if world.pits.contains(&here) {
        world.player_alive = false;
        StepOutcome::FellIntoPit
    } else if here == world.gold && !world.has_gold {
        world.has_gold = true;
        StepOutcome::FoundGold
    } else if next.is_none() {
        StepOutcome::Bumped
    } else {
        StepOutcome::Moved
    };

    if outcome.is_terminal() {
        world.game_over = true;
        info!(?outcome, position = %here, "episode over");
    } else {
        debug!(direction = %dir, position = %here, ?outcome, "player moved");
    }
    outcome
}
