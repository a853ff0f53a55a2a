//! Playable games built on the engine.

pub mod klondike;

pub use klondike::{Klondike, KlondikeBuilder, Status, VISIBLE_WASTE};
