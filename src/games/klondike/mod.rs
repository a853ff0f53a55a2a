//! Single-player Klondike.
//!
//! - Draw from the stock one or three at a time, recycle the waste without limit
//! - Build tableau columns down in alternating colors, kings into empty columns
//! - Build foundations up by suit from the ace
//! - Every tap that relocates cards and every draw counts as one move

mod game;

pub use game::{Klondike, KlondikeBuilder, Status, VISIBLE_WASTE};
