//! # klondike-engine
//!
//! Rule engine for single-player Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine owns the layout and the rules. Rendering,
//!    animation and input capture belong to the host, which reads the
//!    layout back after every call.
//!
//! 2. **Cards Are Owned**: A `Card` lives in exactly one pile. Moving it
//!    transfers ownership, so a card can never sit in two places.
//!
//! 3. **Deterministic**: Shuffles go through a seeded `GameRng`. The same
//!    seed deals the same game.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, invariant errors
//! - `cards`: Suits, ranks, cards, deck building and dealing
//! - `zones`: Piles and the thirteen-pile layout
//! - `rules`: Drawing, move legality, move execution, the selection gesture
//! - `games`: The `Klondike` aggregate hosts drive
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{KlondikeBuilder, DrawOutcome};
//!
//! let mut game = KlondikeBuilder::new().draw_count(3).build(42);
//! assert_eq!(game.stock().len(), 24);
//!
//! assert_eq!(game.draw_cards(), DrawOutcome::Drew(3));
//! assert_eq!(game.stock().len(), 21);
//! assert_eq!(game.moves(), 1);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, InvariantViolation, KlondikeConfig, DEFAULT_DRAW_COUNT};

pub use crate::cards::{build_deck, deal, shuffle, Card, CardId, Color, Rank, Suit, DECK_SIZE};

pub use crate::zones::{CardLocation, Layout, Pile, PileId, PileKind, FOUNDATION_COUNT, TABLEAU_COUNT};

pub use crate::rules::{CompletedMove, DrawOutcome, Selection, SelectionMachine, TapOutcome};

pub use crate::games::{Klondike, KlondikeBuilder, Status};
