//! Randomized world generation by rejection sampling.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{GameError, GameRng, Position};

use super::config::WumpusConfig;
use super::world::WumpusWorld;

/// Builds worlds from a validated config.
#[derive(Clone, Debug)]
pub struct WorldGenerator {
    config: WumpusConfig,
}

impl WorldGenerator {
    /// Create a generator. Fails if the config cannot fit every entity.
    pub fn new(config: WumpusConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &WumpusConfig {
        &self.config
    }

    /// Generate a world with the player at the origin.
    ///
    /// Wumpus, pits and gold are drawn uniformly and redrawn on collision,
    /// in that order, so every entity lands on its own cell.
    pub fn generate(&self, rng: &mut GameRng) -> WumpusWorld {
        let size = self.config.grid_size;
        let player = Position::ORIGIN;

        let wumpus = draw_until(rng, size, |p| p != player);

        let mut pits = FxHashSet::default();
        while pits.len() < self.config.pit_count {
            let pit = rng.gen_position(size);
            if pit != player && pit != wumpus {
                pits.insert(pit);
            }
        }

        let gold = draw_until(rng, size, |p| p != player && p != wumpus && !pits.contains(&p));

        debug!(size, pits = pits.len(), "generated wumpus world");

        WumpusWorld {
            size,
            player,
            wumpus,
            pits,
            gold,
            has_gold: false,
            wumpus_alive: true,
            player_alive: true,
            arrows: self.config.arrows,
            game_over: false,
        }
    }
}

fn draw_until(rng: &mut GameRng, size: usize, accept: impl Fn(Position) -> bool) -> Position {
    loop {
        let pos = rng.gen_position(size);
        if accept(pos) {
            return pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_world_is_fresh() {
        let generator = WorldGenerator::new(WumpusConfig::default()).unwrap();
        let world = generator.generate(&mut GameRng::new(42));

        assert_eq!(world.player(), Position::ORIGIN);
        assert_eq!(world.pits().len(), 3);
        assert_eq!(world.arrows(), 1);
        assert!(world.player_alive());
        assert!(world.wumpus_alive());
        assert!(!world.has_gold());
        assert!(!world.is_game_over());
    }

    #[test]
    fn test_entities_never_overlap() {
        let generator =
            WorldGenerator::new(WumpusConfig::default().with_pit_count(10)).unwrap();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let world = generator.generate(&mut rng);
            let start = Position::ORIGIN;
            assert_ne!(world.wumpus(), start);
            assert_eq!(world.pits().len(), 10);
            assert!(!world.has_pit(start));
            assert!(!world.has_pit(world.wumpus()));
            assert_ne!(world.gold(), start);
            assert_ne!(world.gold(), world.wumpus());
            assert!(!world.has_pit(world.gold()));
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let generator = WorldGenerator::new(WumpusConfig::default()).unwrap();
        let a = generator.generate(&mut GameRng::new(99));
        let b = generator.generate(&mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tightly_packed_grid_terminates() {
        // 3x3 grid: 9 cells, 6 pits + player + wumpus + gold.
        let config = WumpusConfig::default().with_grid_size(3).with_pit_count(6);
        let generator = WorldGenerator::new(config).unwrap();
        let world = generator.generate(&mut GameRng::new(5));
        assert_eq!(world.pits().len(), 6);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = WumpusConfig::default().with_grid_size(3).with_pit_count(7);
        assert!(WorldGenerator::new(config).is_err());
    }
}
