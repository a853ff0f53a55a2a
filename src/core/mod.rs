//! Core engine types: RNG, configuration, invariant errors.
//!
//! These are the pieces every other module builds on and that hosts
//! configure before dealing a game.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::{KlondikeConfig, DEFAULT_DRAW_COUNT};
pub use error::InvariantViolation;
