//! The two-tap selection state machine.
//!
//! ## States
//!
//! - **Idle**: nothing selected. A tap on a selectable card records it.
//! - **Awaiting second**: a card is selected. The next tap either cancels
//!   (same card), moves (legal destination), or leaves the selection as it
//!   is (no rule matched). A selection that no longer matches the layout,
//!   e.g. a waste card buried by a draw, is dropped by whatever tap comes
//!   next.
//!
//! There is no terminal state. Legality comes from `validator`, the actual
//! relocation from `executor`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::zones::{Layout, PileId, PileKind};

use super::executor::{execute, CompletedMove};
use super::validator::{
    can_build_on_foundation, can_stack_on_tableau, can_start_foundation, can_start_tableau,
    is_selectable, selection_is_current,
};

/// The first half of a move, captured when the card was tapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub card: CardId,
    /// Tableau column or the waste.
    pub source: PileId,
    /// Position in the source column; always 0 for the waste.
    pub depth: usize,
}

/// Result of a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapOutcome {
    /// Nothing happened and nothing was selected.
    Ignored,
    /// The card became the selection.
    Selected(Selection),
    /// The selected card was tapped again; selection cleared.
    Cancelled,
    /// A move was carried out; selection cleared.
    Moved(CompletedMove),
    /// No rule matched; the selection stands.
    NoMatch,
    /// The selection no longer matched the layout and was dropped.
    Discarded,
}

impl TapOutcome {
    /// True if this tap counts as a move.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, TapOutcome::Moved(_))
    }
}

/// Tracks the pending first selection between taps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMachine {
    current: Option<Selection>,
}

impl SelectionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending selection, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Drop any pending selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Handle a tap on a card.
    pub fn tap_card(&mut self, layout: &mut Layout, card: CardId) -> TapOutcome {
        match self.current {
            None => self.select(layout, card),
            Some(first) => self.resolve(layout, first, card),
        }
    }

    /// Handle a tap on an empty tableau or foundation placeholder.
    ///
    /// Kings start empty columns, aces start empty foundations. A tap while
    /// idle, or on a pile that is not empty, does nothing.
    pub fn tap_empty_pile(&mut self, layout: &mut Layout, pile: PileId) -> TapOutcome {
        let Some(first) = self.current else {
            return TapOutcome::Ignored;
        };
        if !selection_is_current(layout, &first) {
            return self.discard();
        }
        if !layout.pile(pile).is_some_and(|p| p.is_empty()) {
            return TapOutcome::NoMatch;
        }

        let allowed = match pile.kind {
            PileKind::Tableau => can_start_tableau(first.card),
            PileKind::Foundation => can_start_foundation(first.card),
            PileKind::Stock | PileKind::Waste => false,
        };
        if !allowed {
            return TapOutcome::NoMatch;
        }

        self.complete(layout, first, pile)
    }

    /// The selected card plus every card above it in its column.
    ///
    /// Empty when idle or when the selection has gone stale.
    #[must_use]
    pub fn highlighted<'a>(&self, layout: &'a Layout) -> &'a [Card] {
        let Some(selection) = self.current.as_ref() else {
            return &[];
        };
        if !selection_is_current(layout, selection) {
            return &[];
        }

        match selection.source.kind {
            PileKind::Tableau => layout
                .pile(selection.source)
                .and_then(|pile| pile.cards().get(selection.depth..))
                .unwrap_or(&[]),
            _ => layout
                .pile(selection.source)
                .and_then(|pile| pile.cards().last())
                .map(std::slice::from_ref)
                .unwrap_or(&[]),
        }
    }

    fn select(&mut self, layout: &Layout, card: CardId) -> TapOutcome {
        let Some(location) = layout.locate(card) else {
            return TapOutcome::Ignored;
        };
        if !is_selectable(layout, location) {
            return TapOutcome::Ignored;
        }

        let depth = match location.pile.kind {
            PileKind::Tableau => location.depth,
            _ => 0,
        };
        let selection = Selection {
            card,
            source: location.pile,
            depth,
        };
        self.current = Some(selection);
        TapOutcome::Selected(selection)
    }

    fn resolve(&mut self, layout: &mut Layout, first: Selection, tapped: CardId) -> TapOutcome {
        if !selection_is_current(layout, &first) {
            return self.discard();
        }
        if tapped == first.card {
            self.current = None;
            return TapOutcome::Cancelled;
        }

        let Some(location) = layout.locate(tapped) else {
            return TapOutcome::NoMatch;
        };
        if !layout.is_top(location) {
            return TapOutcome::NoMatch;
        }

        let matched = match location.pile.kind {
            PileKind::Tableau => can_stack_on_tableau(first.card, tapped),
            PileKind::Foundation => can_build_on_foundation(first.card, tapped),
            PileKind::Stock | PileKind::Waste => false,
        };
        if !matched {
            return TapOutcome::NoMatch;
        }

        self.complete(layout, first, location.pile)
    }

    fn discard(&mut self) -> TapOutcome {
        self.current = None;
        TapOutcome::Discarded
    }

    fn complete(&mut self, layout: &mut Layout, first: Selection, to: PileId) -> TapOutcome {
        if !selection_is_current(layout, &first) {
            return self.discard();
        }

        match execute(layout, &first, to) {
            Some(done) => {
                self.current = None;
                TapOutcome::Moved(done)
            }
            None => TapOutcome::NoMatch,
        }
    }
}
