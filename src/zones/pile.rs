//! Piles: ordered card containers.
//!
//! Every pile is a sequence whose last element is the top. Piles hold no
//! rules; legality lives in `rules`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Cards lifted off a pile in one piece, bottom first.
pub type CardRun = SmallVec<[Card; 13]>;

/// The four kinds of pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

impl PileKind {
    /// Number of piles of this kind in a layout.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            PileKind::Stock | PileKind::Waste => 1,
            PileKind::Foundation => FOUNDATION_COUNT,
            PileKind::Tableau => TABLEAU_COUNT,
        }
    }
}

impl fmt::Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PileKind::Stock => "stock",
            PileKind::Waste => "waste",
            PileKind::Foundation => "foundation",
            PileKind::Tableau => "tableau",
        })
    }
}

/// Address of a pile: kind plus index within that kind.
///
/// Stock and waste always use index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId {
    pub kind: PileKind,
    pub index: usize,
}

impl PileId {
    #[must_use]
    pub const fn stock() -> Self {
        Self { kind: PileKind::Stock, index: 0 }
    }

    #[must_use]
    pub const fn waste() -> Self {
        Self { kind: PileKind::Waste, index: 0 }
    }

    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        Self { kind: PileKind::Foundation, index }
    }

    #[must_use]
    pub const fn tableau(index: usize) -> Self {
        Self { kind: PileKind::Tableau, index }
    }

    /// Check the index is in range for the kind.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index < self.kind.count()
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PileKind::Stock | PileKind::Waste => write!(f, "{}", self.kind),
            PileKind::Foundation | PileKind::Tableau => write!(f, "{} {}", self.kind, self.index),
        }
    }
}

/// An ordered pile of cards. Index 0 is the bottom, the last card the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    kind: PileKind,
    cards: SmallVec<[Card; 20]>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: SmallVec::new(),
        }
    }

    /// Create a pile holding `cards`, bottom first.
    #[must_use]
    pub fn from_cards(kind: PileKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            kind,
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `depth` (0 = bottom).
    #[must_use]
    pub fn get(&self, depth: usize) -> Option<&Card> {
        self.cards.get(depth)
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Mutable access to the top card.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Depth of the top card, if any.
    #[must_use]
    pub fn top_depth(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return every card from `depth` upward, bottom first.
    ///
    /// Returns an empty run if `depth` is past the top.
    pub fn split_off(&mut self, depth: usize) -> CardRun {
        if depth >= self.cards.len() {
            return CardRun::new();
        }
        self.cards.drain(depth..).collect()
    }

    /// Place a run on top, preserving its order.
    pub fn extend(&mut self, run: impl IntoIterator<Item = Card>) {
        self.cards.extend(run);
    }

    /// Remove every card, bottom first.
    pub fn take_all(&mut self) -> CardRun {
        self.split_off(0)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.cards.iter()
    }
}
