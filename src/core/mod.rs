//! Core building blocks shared by both games: grid coordinates, RNG, errors.

pub mod error;
pub mod grid;
pub mod rng;

pub use error::GameError;
pub use grid::{Direction, Position};
pub use rng::GameRng;
