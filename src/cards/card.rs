//! Cards: suit, rank, color, and the face-up flag.
//!
//! A `CardId` is the immutable identity of one of the 52 cards. A `Card` is
//! that identity plus its current facing. Cards are created once by the
//! dealer and afterwards only move between piles.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of suits in the deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// The four suits, in deck-building order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    /// Derived card color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (Ace) through 13 (King).
///
/// Deserializes through [`Rank::new`], so an out-of-range value is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

/// A rank value outside 1..=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("rank {0} is outside 1..=13")]
pub struct InvalidRank(pub u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank from its value, `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= RANK_COUNT as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw value in 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ranks, Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANK_COUNT as u8).map(Rank)
    }

    /// True if this rank is exactly one below `other`.
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self.0 + 1 == other.0
    }

    /// Short label: A, 2..10, J, Q, K.
    #[must_use]
    pub fn label(self) -> &'static str {
        const LABELS: [&str; RANK_COUNT] =
            ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
        LABELS[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or(InvalidRank(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable identity of a card: one of the 52 (suit, rank) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Iterate over all 52 identities in deck-building order.
    pub fn all() -> impl Iterator<Item = CardId> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::all().map(move |rank| CardId::new(suit, rank)))
    }

    /// The identity at `index` (0..52) in deck-building order.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        let suit = *Suit::ALL.get(index / RANK_COUNT)?;
        let rank = Rank::new((index % RANK_COUNT) as u8 + 1)?;
        Some(Self::new(suit, rank))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

/// A card in play: identity plus facing.
///
/// Not `Copy`: a card is owned by exactly one pile and moves between piles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face_up: bool,
}

impl Card {
    /// A face-down card.
    #[must_use]
    pub const fn face_down(id: CardId) -> Self {
        Self { id, face_up: false }
    }

    /// A face-up card.
    #[must_use]
    pub const fn face_up(id: CardId) -> Self {
        Self { id, face_up: true }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.id.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.id.rank
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color()
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    pub fn turn_face_down(&mut self) {
        self.face_up = false;
    }
}
