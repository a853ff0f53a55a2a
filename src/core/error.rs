//! Invariant violations.
//!
//! Gameplay never produces errors: an illegal tap is simply ignored. The
//! only failure class is a broken layout invariant, which `Layout::verify`
//! reports with this type. Inside the engine such a violation is a bug and
//! halts the game.

use thiserror::Error;

use crate::cards::CardId;
use crate::zones::{PileId, PileKind};

/// A broken layout invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The same card is held by two pile positions.
    #[error("card {0} appears more than once across the piles")]
    DuplicateCard(CardId),

    /// The piles do not hold exactly one full deck.
    #[error("expected 52 cards across all piles, found {found}")]
    CardCount { found: usize },

    /// A foundation is not an ascending same-suit run starting at the ace.
    #[error("{pile} is not an ascending same-suit run from the ace")]
    FoundationOutOfSequence { pile: PileId },

    /// A tableau column has a face-down card above a face-up one.
    #[error("{pile} has a face-down card above a face-up card")]
    FaceDownAboveFaceUp { pile: PileId },

    /// A stock card is face-up, or a waste/foundation card is face-down.
    #[error("{pile} holds {card} with the wrong facing")]
    WrongFacing { pile: PileId, card: CardId },

    /// A pile was supplied under the wrong kind.
    #[error("expected a {expected} pile, found a {found} pile")]
    WrongPileKind { expected: PileKind, found: PileKind },
}
