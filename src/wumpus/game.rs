//! One caller's Wumpus game: current world, generator, RNG and episode log.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Direction, GameError, GameRng};

use super::arrow::{resolve_shot, ShotOutcome};
use super::config::WumpusConfig;
use super::generator::WorldGenerator;
use super::movement::{resolve_move, StepOutcome};
use super::status::WorldStatus;
use super::world::WumpusWorld;

/// A command applied during the current episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorldEvent {
    Move { direction: Direction, outcome: StepOutcome },
    Shoot { direction: Direction, outcome: ShotOutcome },
}

/// Response to a move command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub outcome: StepOutcome,
    pub game: WorldStatus,
}

/// Response to a shoot command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotReport {
    pub hit: bool,
    pub outcome: ShotOutcome,
    pub game: WorldStatus,
}

/// Wumpus game session.
#[derive(Clone, Debug)]
pub struct WumpusGame {
    generator: WorldGenerator,
    world: WumpusWorld,
    rng: GameRng,
    log: Vector<WorldEvent>,
}

impl WumpusGame {
    /// Create a game and generate its first world.
    pub fn new(config: WumpusConfig, mut rng: GameRng) -> Result<Self, GameError> {
        let generator = WorldGenerator::new(config)?;
        let world = generator.generate(&mut rng.fork());
        Ok(Self {
            generator,
            world,
            rng,
            log: Vector::new(),
        })
    }

    /// Create a game around a prepared world. Later `start` calls generate
    /// from `config` as usual.
    pub fn with_world(config: WumpusConfig, world: WumpusWorld, rng: GameRng) -> Result<Self, GameError> {
        Ok(Self {
            generator: WorldGenerator::new(config)?,
            world,
            rng,
            log: Vector::new(),
        })
    }

    #[must_use]
    pub fn world(&self) -> &WumpusWorld {
        &self.world
    }

    #[must_use]
    pub fn config(&self) -> &WumpusConfig {
        self.generator.config()
    }

    /// Commands that changed the world since the last `start`. Ignored
    /// commands and shots without arrows are not recorded.
    #[must_use]
    pub fn log(&self) -> &Vector<WorldEvent> {
        &self.log
    }

    #[must_use]
    pub fn status(&self) -> WorldStatus {
        WorldStatus::of(&self.world)
    }

    /// Discard the current world and generate a new one from a fresh fork
    /// of the game stream.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> WorldStatus {
        self.world = self.generator.generate(&mut self.rng.fork());
        self.log.clear();
        debug!("wumpus episode started");
        self.status()
    }

    /// Move the player one cell.
    #[instrument(skip(self))]
    pub fn move_player(&mut self, direction: Direction) -> StepReport {
        let outcome = resolve_move(&mut self.world, direction);
        if outcome != StepOutcome::Ignored {
            self.log.push_back(WorldEvent::Move { direction, outcome });
        }
        StepReport {
            outcome,
            game: self.status(),
        }
    }

    /// Shoot an arrow.
    #[instrument(skip(self))]
    pub fn shoot(&mut self, direction: Direction) -> ShotReport {
        let outcome = resolve_shot(&mut self.world, direction);
        if !matches!(outcome, ShotOutcome::Ignored | ShotOutcome::NoArrows) {
            self.log.push_back(WorldEvent::Shoot { direction, outcome });
        }
        ShotReport {
            hit: outcome.is_hit(),
            outcome,
            game: self.status(),
        }
    }
}
