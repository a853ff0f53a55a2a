//! Cards and the deck.
//!
//! - `CardId`: immutable (suit, rank) identity
//! - `Card`: identity plus face-up flag
//! - `deck`: building, shuffling and dealing the 52 cards

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Color, InvalidRank, Rank, Suit, RANK_COUNT, SUIT_COUNT};
pub use deck::{build_deck, deal, shuffle, DECK_SIZE, STOCK_SIZE};
