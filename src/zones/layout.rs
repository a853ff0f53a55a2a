//! The full set of piles on the table.
//!
//! `Layout` owns the stock, the waste, the four foundations and the seven
//! tableau columns. It answers "where is this card" and checks the layout
//! invariants:
//! - exactly the 52 canonical cards, each once
//! - foundations are ascending same-suit runs from the ace
//! - tableau columns have a face-down prefix and a face-up suffix
//! - stock cards are face-down, waste and foundation cards face-up

use std::array;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileId, PileKind, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::cards::{Card, CardId, Rank, DECK_SIZE};
use crate::core::InvariantViolation;

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardLocation {
    pub pile: PileId,
    /// Position within the pile, 0 = bottom.
    pub depth: usize,
}

/// All thirteen piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_COUNT],
    tableau: [Pile; TABLEAU_COUNT],
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    /// Create a layout with every pile empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stock: Pile::new(PileKind::Stock),
            waste: Pile::new(PileKind::Waste),
            foundations: array::from_fn(|_| Pile::new(PileKind::Foundation)),
            tableau: array::from_fn(|_| Pile::new(PileKind::Tableau)),
        }
    }

    /// A freshly dealt layout: stock and tableau only.
    pub(crate) fn opening(stock: Pile, tableau: [Pile; TABLEAU_COUNT]) -> Self {
        Self {
            stock,
            tableau,
            ..Self::new()
        }
    }

    /// Build a layout from explicit piles and verify it.
    ///
    /// Lets hosts and tests set up arbitrary positions. Every pile must be of
    /// the kind its slot expects, and the result must satisfy all layout
    /// invariants.
    pub fn from_piles(
        stock: Pile,
        waste: Pile,
        foundations: [Pile; FOUNDATION_COUNT],
        tableau: [Pile; TABLEAU_COUNT],
    ) -> Result<Self, InvariantViolation> {
        let layout = Self {
            stock,
            waste,
            foundations,
            tableau,
        };

        for id in Self::pile_ids() {
            let found = layout.pile(id).map(Pile::kind).unwrap_or(id.kind);
            if found != id.kind {
                return Err(InvariantViolation::WrongPileKind {
                    expected: id.kind,
                    found,
                });
            }
        }

        layout.verify()?;
        Ok(layout)
    }

    /// Every pile address, stock first and tableau last.
    pub fn pile_ids() -> impl Iterator<Item = PileId> {
        [PileId::stock(), PileId::waste()]
            .into_iter()
            .chain((0..FOUNDATION_COUNT).map(PileId::foundation))
            .chain((0..TABLEAU_COUNT).map(PileId::tableau))
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Foundation `index`. Panics if out of range.
    #[must_use]
    pub fn foundation(&self, index: usize) -> &Pile {
        &self.foundations[index]
    }

    /// Tableau column `index`. Panics if out of range.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &Pile {
        &self.tableau[index]
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau_columns(&self) -> &[Pile] {
        &self.tableau
    }

    /// Look up a pile by address. `None` if the index is out of range.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        if !id.is_valid() {
            return None;
        }
        Some(match id.kind {
            PileKind::Stock => &self.stock,
            PileKind::Waste => &self.waste,
            PileKind::Foundation => &self.foundations[id.index],
            PileKind::Tableau => &self.tableau[id.index],
        })
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Pile {
        &mut self.waste
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        if !id.is_valid() {
            return None;
        }
        Some(match id.kind {
            PileKind::Stock => &mut self.stock,
            PileKind::Waste => &mut self.waste,
            PileKind::Foundation => &mut self.foundations[id.index],
            PileKind::Tableau => &mut self.tableau[id.index],
        })
    }

    /// Find the pile and depth holding `card`.
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<CardLocation> {
        Self::pile_ids().find_map(|pile| {
            let depth = self.pile(pile)?.iter().position(|c| c.id() == card)?;
            Some(CardLocation { pile, depth })
        })
    }

    /// The card at a location, if it is still there.
    #[must_use]
    pub fn card_at(&self, location: CardLocation) -> Option<&Card> {
        self.pile(location.pile)?.get(location.depth)
    }

    /// True if the location is the top card of its pile.
    #[must_use]
    pub fn is_top(&self, location: CardLocation) -> bool {
        self.pile(location.pile)
            .and_then(Pile::top_depth)
            .is_some_and(|top| top == location.depth)
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Self::pile_ids()
            .filter_map(|id| self.pile(id))
            .map(Pile::len)
            .sum()
    }

    /// Turn the top of tableau column `index` face-up if it is face-down.
    ///
    /// Returns true if a card was revealed.
    pub(crate) fn reveal_top(&mut self, index: usize) -> bool {
        match self.tableau.get_mut(index).and_then(Pile::top_mut) {
            Some(card) if !card.is_face_up() => {
                card.turn_face_up();
                true
            }
            _ => false,
        }
    }

    /// Check every layout invariant, reporting the first violation.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut seen = FxHashSet::default();
        for id in Self::pile_ids() {
            let Some(pile) = self.pile(id) else { continue };
            for card in pile.iter() {
                if !seen.insert(card.id()) {
                    return Err(InvariantViolation::DuplicateCard(card.id()));
                }
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(InvariantViolation::CardCount { found: seen.len() });
        }

        if let Some(card) = self.stock.iter().find(|c| c.is_face_up()) {
            return Err(InvariantViolation::WrongFacing {
                pile: PileId::stock(),
                card: card.id(),
            });
        }
        if let Some(card) = self.waste.iter().find(|c| !c.is_face_up()) {
            return Err(InvariantViolation::WrongFacing {
                pile: PileId::waste(),
                card: card.id(),
            });
        }

        for (index, pile) in self.foundations.iter().enumerate() {
            let id = PileId::foundation(index);
            if let Some(card) = pile.iter().find(|c| !c.is_face_up()) {
                return Err(InvariantViolation::WrongFacing { pile: id, card: card.id() });
            }
            if !is_foundation_run(pile) {
                return Err(InvariantViolation::FoundationOutOfSequence { pile: id });
            }
        }

        for (index, pile) in self.tableau.iter().enumerate() {
            let face_down = pile.iter().take_while(|c| !c.is_face_up()).count();
            if pile.iter().skip(face_down).any(|c| !c.is_face_up()) {
                return Err(InvariantViolation::FaceDownAboveFaceUp {
                    pile: PileId::tableau(index),
                });
            }
        }

        Ok(())
    }
}

/// Ace first, then each card the same suit and one rank higher.
fn is_foundation_run(pile: &Pile) -> bool {
    let Some(first) = pile.get(0) else { return true };
    first.rank() == Rank::ACE
        && pile
            .cards()
            .windows(2)
            .all(|w| w[0].suit() == w[1].suit() && w[0].rank().is_one_below(w[1].rank()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_deck, Suit};

    fn id(suit: Suit, rank: u8) -> CardId {
        CardId::new(suit, Rank::new(rank).unwrap())
    }

    /// Every card in the stock, face-down.
    fn all_in_stock() -> Layout {
        let mut layout = Layout::new();
        layout.stock = Pile::from_cards(PileKind::Stock, build_deck());
        layout
    }

    /// Move `card` out of the stock onto `to` with the given facing.
    fn place(layout: &mut Layout, card: CardId, to: PileId, face_up: bool) {
        let depth = layout.stock.iter().position(|c| c.id() == card).unwrap();
        let mut taken = layout.stock.split_off(depth);
        let moved = taken.remove(0);
        layout.stock.extend(taken);
        let moved = if face_up { Card::face_up(moved.id()) } else { moved };
        layout.pile_mut(to).unwrap().push(moved);
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::new();
        assert_eq!(layout.total_cards(), 0);
        assert_eq!(layout.verify(), Err(InvariantViolation::CardCount { found: 0 }));
        assert_eq!(Layout::pile_ids().count(), 13);
    }

    #[test]
    fn test_full_stock_is_valid() {
        let layout = all_in_stock();
        assert_eq!(layout.total_cards(), 52);
        assert_eq!(layout.verify(), Ok(()));
    }

    #[test]
    fn test_locate() {
        let mut layout = all_in_stock();
        let ace = id(Suit::Spades, 1);
        place(&mut layout, ace, PileId::tableau(3), true);

        assert_eq!(
            layout.locate(ace),
            Some(CardLocation { pile: PileId::tableau(3), depth: 0 })
        );
        assert!(layout.is_top(CardLocation { pile: PileId::tableau(3), depth: 0 }));
        assert_eq!(layout.locate(id(Suit::Hearts, 1)).map(|l| l.pile), Some(PileId::stock()));
    }

    #[test]
    fn test_pile_lookup_bounds() {
        let mut layout = all_in_stock();
        assert_eq!(layout.pile(PileId::stock()).map(Pile::len), Some(52));
        assert!(layout.pile(PileId::foundation(3)).is_some());
        assert!(layout.pile(PileId::foundation(4)).is_none());
        assert!(layout.pile(PileId::tableau(7)).is_none());
        assert!(layout.pile(PileId { kind: PileKind::Waste, index: 1 }).is_none());
        assert!(layout.pile_mut(PileId { kind: PileKind::Stock, index: 1 }).is_none());
    }

    #[test]
    fn test_duplicate_detected() {
        let mut layout = all_in_stock();
        let dup = id(Suit::Clubs, 9);
        layout.waste.push(Card::face_up(dup));

        assert_eq!(layout.verify(), Err(InvariantViolation::DuplicateCard(dup)));
    }

    #[test]
    fn test_missing_detected() {
        let mut layout = all_in_stock();
        layout.stock.pop();

        assert_eq!(layout.verify(), Err(InvariantViolation::CardCount { found: 51 }));
    }

    #[test]
    fn test_foundation_sequence() {
        let mut layout = all_in_stock();
        place(&mut layout, id(Suit::Hearts, 1), PileId::foundation(0), true);
        place(&mut layout, id(Suit::Hearts, 2), PileId::foundation(0), true);
        assert_eq!(layout.verify(), Ok(()));

        place(&mut layout, id(Suit::Diamonds, 3), PileId::foundation(0), true);
        assert_eq!(
            layout.verify(),
            Err(InvariantViolation::FoundationOutOfSequence { pile: PileId::foundation(0) })
        );
    }

    #[test]
    fn test_foundation_must_start_with_ace() {
        let mut layout = all_in_stock();
        place(&mut layout, id(Suit::Hearts, 2), PileId::foundation(1), true);

        assert_eq!(
            layout.verify(),
            Err(InvariantViolation::FoundationOutOfSequence { pile: PileId::foundation(1) })
        );
    }

    #[test]
    fn test_tableau_facing() {
        let mut layout = all_in_stock();
        place(&mut layout, id(Suit::Hearts, 9), PileId::tableau(0), false);
        place(&mut layout, id(Suit::Clubs, 8), PileId::tableau(0), true);
        assert_eq!(layout.verify(), Ok(()));

        place(&mut layout, id(Suit::Spades, 4), PileId::tableau(0), false);
        assert_eq!(
            layout.verify(),
            Err(InvariantViolation::FaceDownAboveFaceUp { pile: PileId::tableau(0) })
        );
    }

    #[test]
    fn test_wrong_facing() {
        let mut layout = all_in_stock();
        place(&mut layout, id(Suit::Hearts, 5), PileId::waste(), false);

        assert_eq!(
            layout.verify(),
            Err(InvariantViolation::WrongFacing {
                pile: PileId::waste(),
                card: id(Suit::Hearts, 5),
            })
        );
    }

    #[test]
    fn test_reveal_top() {
        let mut layout = all_in_stock();
        place(&mut layout, id(Suit::Hearts, 9), PileId::tableau(2), false);

        assert!(layout.reveal_top(2));
        assert!(!layout.reveal_top(2));
        assert!(!layout.reveal_top(5));
        assert!(layout.tableau(2).top().unwrap().is_face_up());
    }

    #[test]
    fn test_from_piles_rejects_wrong_kind() {
        let result = Layout::from_piles(
            Pile::from_cards(PileKind::Stock, build_deck()),
            Pile::new(PileKind::Tableau),
            array::from_fn(|_| Pile::new(PileKind::Foundation)),
            array::from_fn(|_| Pile::new(PileKind::Tableau)),
        );

        assert_eq!(
            result,
            Err(InvariantViolation::WrongPileKind {
                expected: PileKind::Waste,
                found: PileKind::Tableau,
            })
        );
    }
}
