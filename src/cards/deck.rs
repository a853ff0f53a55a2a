//! Building, shuffling and dealing the deck.

use super::card::{Card, CardId, RANK_COUNT, SUIT_COUNT};
use crate::core::GameRng;
use crate::zones::{Layout, Pile, PileKind, TABLEAU_COUNT};

/// Cards in a full deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Cards dealt to the tableau: 1 + 2 + ... + 7.
const TABLEAU_DEAL: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// Cards left in the stock after dealing.
pub const STOCK_SIZE: usize = DECK_SIZE - TABLEAU_DEAL;

/// Build the 52 cards in suit-then-rank order, all face-down.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let deck: Vec<Card> = CardId::all().map(Card::face_down).collect();
    assert_eq!(deck.len(), DECK_SIZE, "Deck must hold {DECK_SIZE} cards");
    deck
}

/// Apply a uniform random permutation to the deck.
pub fn shuffle(deck: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(deck);
}

/// Deal a deck into the opening layout.
///
/// Column `c` receives `c + 1` cards from the front of the deck, column by
/// column; only the last card of each column is face-up. The remaining cards
/// become the stock in deck order, so the deck's last card is the stock top.
///
/// Panics if `deck` does not hold exactly 52 cards.
#[must_use]
pub fn deal(deck: Vec<Card>) -> Layout {
    assert_eq!(deck.len(), DECK_SIZE, "Can only deal a full deck");

    let mut cards = deck.into_iter();
    let mut tableau: [Pile; TABLEAU_COUNT] = std::array::from_fn(|_| Pile::new(PileKind::Tableau));

    for (column, pile) in tableau.iter_mut().enumerate() {
        for row in 0..=column {
            let Some(mut card) = cards.next() else { break };
            if row == column {
                card.turn_face_up();
            } else {
                card.turn_face_down();
            }
            pile.push(card);
        }
    }

    let stock = Pile::from_cards(
        PileKind::Stock,
        cards.map(|mut card| {
            card.turn_face_down();
            card
        }),
    );

    Layout::opening(stock, tableau)
}
