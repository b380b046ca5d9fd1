//! Wumpus world: a hidden-information grid exploration game.
//!
//! The player starts in the top-left corner of an 8x8 cave holding one
//! wumpus, a few pits and one pile of gold, none of which are visible. Each
//! turn the player moves one cell or shoots an arrow along a row or column.
//! Stepping on the live wumpus or a pit is fatal; reaching the gold or killing
//! the wumpus wins. Adjacent pits are felt as a breeze, an adjacent wumpus as
//! a stench.
//!
//! - `config`: generation parameters
//! - `world`: full world state
//! - `generator`: randomized placement
//! - `movement`: moves and collisions
//! - `arrow`: shots
//! - `percept`: breeze and stench
//! - `status`: fog-of-war snapshot
//! - `game`: one caller's game session

pub mod arrow;
pub mod config;
pub mod game;
pub mod generator;
pub mod movement;
pub mod percept;
pub mod status;
pub mod world;

pub use arrow::{resolve_shot, ShotOutcome};
pub use config::WumpusConfig;
pub use game::{ShotReport, StepReport, WorldEvent, WumpusGame};
pub use generator::WorldGenerator;
pub use movement::{resolve_move, StepOutcome};
pub use percept::{sense, Percepts};
pub use status::WorldStatus;
pub use world::WumpusWorld;
