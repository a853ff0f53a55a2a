//! Move legality.
//!
//! Pure predicates over card identities and the layout. Nothing here
//! mutates state.

use crate::cards::{CardId, Rank};
use crate::zones::{CardLocation, Layout, PileKind};

use super::selection::Selection;

/// Can `moving` be placed on `target`, the top of a tableau column?
///
/// One rank lower and the opposite color.
#[must_use]
pub fn can_stack_on_tableau(moving: CardId, target: CardId) -> bool {
    moving.rank.is_one_below(target.rank) && moving.color() != target.color()
}

/// Can `moving` be placed on `target`, the top of a foundation?
///
/// One rank higher and the same suit.
#[must_use]
pub fn can_build_on_foundation(moving: CardId, target: CardId) -> bool {
    target.rank.is_one_below(moving.rank) && moving.suit == target.suit
}

/// Only a king may start an empty tableau column.
#[must_use]
pub fn can_start_tableau(moving: CardId) -> bool {
    moving.rank == Rank::KING
}

/// Only an ace may start an empty foundation.
#[must_use]
pub fn can_start_foundation(moving: CardId) -> bool {
    moving.rank == Rank::ACE
}

/// May the card at `location` be picked up as the first half of a move?
///
/// Face-down cards, foundation cards and any waste card but the top are
/// not sources. Any face-up tableau card is, together with the cards above
/// it.
#[must_use]
pub fn is_selectable(layout: &Layout, location: CardLocation) -> bool {
    let Some(card) = layout.card_at(location) else {
        return false;
    };
    if !card.is_face_up() {
        return false;
    }
    match location.pile.kind {
        PileKind::Tableau => true,
        PileKind::Waste => layout.is_top(location),
        PileKind::Stock | PileKind::Foundation => false,
    }
}

/// Does the selection still name the card it was captured with?
///
/// Guards against a stale selection, e.g. a waste pick followed by a draw
/// that buried it.
#[must_use]
pub fn selection_is_current(layout: &Layout, selection: &Selection) -> bool {
    let location = match selection.source.kind {
        PileKind::Waste => match layout.waste().top_depth() {
            Some(depth) => CardLocation { pile: selection.source, depth },
            None => return false,
        },
        PileKind::Tableau => CardLocation {
            pile: selection.source,
            depth: selection.depth,
        },
        PileKind::Stock | PileKind::Foundation => return false,
    };

    layout
        .card_at(location)
        .is_some_and(|card| card.id() == selection.card && card.is_face_up())
}
