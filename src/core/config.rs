//! Game configuration.
//!
//! Klondike has two knobs:
//! - `draw_count`: cards moved from stock to waste per draw (default 3)
//! - `show_face_down`: whether observers may label face-down cards
//!
//! Neither changes the legality rules.

use serde::{Deserialize, Serialize};

/// Cards moved from stock to waste per draw unless configured otherwise.
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Configuration for a Klondike session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards moved from stock to waste per draw (at least 1).
    pub draw_count: usize,

    /// Initial state of the display-only face-down visibility flag.
    ///
    /// A new game always turns the flag off again.
    pub show_face_down: bool,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            draw_count: DEFAULT_DRAW_COUNT,
            show_face_down: false,
        }
    }
}

impl KlondikeConfig {
    /// Create the default configuration (draw three, face-down cards masked).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards per draw.
    ///
    /// Panics if `count` is zero.
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Draw count must be at least 1");
        self.draw_count = count;
        self
    }

    /// Start with face-down cards unmasked.
    #[must_use]
    pub fn with_face_down_shown(mut self) -> Self {
        self.show_face_down = true;
        self
    }
}
