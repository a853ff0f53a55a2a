//! Layout invariant tests.
//!
//! Random sequences of gestures must never break the layout:
//! - 52 distinct cards across the piles
//! - Stock face-down, waste and foundations face-up
//! - Foundations ascend by suit from the ace
//! - No face-down tableau card above a face-up one

use proptest::prelude::*;

use klondike_engine::cards::{Card, CardId, Rank, Suit};
use klondike_engine::core::InvariantViolation;
use klondike_engine::games::KlondikeBuilder;
use klondike_engine::zones::{Layout, Pile, PileId, PileKind, FOUNDATION_COUNT, TABLEAU_COUNT};

#[derive(Clone, Debug)]
enum Gesture {
    Draw,
    TapCard(usize),
    TapEmpty(PileId),
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        2 => Just(Gesture::Draw),
        6 => (0..52usize).prop_map(Gesture::TapCard),
        1 => (0..FOUNDATION_COUNT).prop_map(|i| Gesture::TapEmpty(PileId::foundation(i))),
        1 => (0..TABLEAU_COUNT).prop_map(|i| Gesture::TapEmpty(PileId::tableau(i))),
    ]
}

proptest! {
    #[test]
    fn test_random_play_keeps_invariants(
        seed in any::<u64>(),
        draw_count in 1..=3usize,
        gestures in prop::collection::vec(gesture(), 0..200),
    ) {
        let mut game = KlondikeBuilder::new().draw_count(draw_count).build(seed);

        for gesture in gestures {
            let moves_before = game.moves();
            let counted = match gesture {
                Gesture::Draw => {
                    game.draw_cards();
                    true
                }
                Gesture::TapCard(index) => {
                    let card = CardId::from_index(index).unwrap();
                    game.tap_card(card).is_move()
                }
                Gesture::TapEmpty(pile) => game.tap_empty_pile(pile).is_move(),
            };

            prop_assert_eq!(game.moves(), moves_before + u32::from(counted));
            prop_assert_eq!(game.layout().verify(), Ok(()));
            prop_assert_eq!(game.layout().total_cards(), 52);
        }
    }

    #[test]
    fn test_selection_is_always_selectable(
        seed in any::<u64>(),
        taps in prop::collection::vec(0..52usize, 1..60),
    ) {
        let mut game = KlondikeBuilder::new().build(seed);

        for (step, index) in taps.into_iter().enumerate() {
            if step % 5 == 4 {
                game.draw_cards();
            }
            game.tap_card(CardId::from_index(index).unwrap());

            if let Some(selection) = game.selection().copied() {
                prop_assert!(matches!(selection.source.kind, PileKind::Tableau | PileKind::Waste));
                let highlighted = game.selected_cards();
                if let Some(first) = highlighted.first() {
                    prop_assert_eq!(first.id(), selection.card);
                    prop_assert!(highlighted.iter().all(Card::is_face_up));
                }
            }
        }
    }
}

fn stock_with_everything() -> Pile {
    Pile::from_cards(PileKind::Stock, CardId::all().map(Card::face_down))
}

fn empty(kind: PileKind) -> Pile {
    Pile::new(kind)
}

/// Test that a valid position is accepted.
#[test]
fn test_from_piles_accepts_full_stock() {
    let layout = Layout::from_piles(
        stock_with_everything(),
        empty(PileKind::Waste),
        std::array::from_fn(|_| empty(PileKind::Foundation)),
        std::array::from_fn(|_| empty(PileKind::Tableau)),
    );
    assert!(layout.is_ok());
}

/// Test a short deck is rejected.
#[test]
fn test_from_piles_rejects_missing_card() {
    let stock = Pile::from_cards(PileKind::Stock, CardId::all().skip(1).map(Card::face_down));
    let result = Layout::from_piles(
        stock,
        empty(PileKind::Waste),
        std::array::from_fn(|_| empty(PileKind::Foundation)),
        std::array::from_fn(|_| empty(PileKind::Tableau)),
    );
    assert_eq!(result, Err(InvariantViolation::CardCount { found: 51 }));
}

/// Test a card held twice is rejected.
#[test]
fn test_from_piles_rejects_duplicate() {
    let ace = CardId::new(Suit::Hearts, Rank::ACE);
    let result = Layout::from_piles(
        stock_with_everything(),
        Pile::from_cards(PileKind::Waste, [Card::face_up(ace)]),
        std::array::from_fn(|_| empty(PileKind::Foundation)),
        std::array::from_fn(|_| empty(PileKind::Tableau)),
    );
    assert_eq!(result, Err(InvariantViolation::DuplicateCard(ace)));
}

/// Test a foundation that does not start at the ace is rejected.
#[test]
fn test_from_piles_rejects_bad_foundation() {
    let two = CardId::new(Suit::Clubs, Rank::new(2).unwrap());
    let stock = Pile::from_cards(
        PileKind::Stock,
        CardId::all().filter(|c| *c != two).map(Card::face_down),
    );
    let mut foundations: [Pile; FOUNDATION_COUNT] = std::array::from_fn(|_| empty(PileKind::Foundation));
    foundations[2] = Pile::from_cards(PileKind::Foundation, [Card::face_up(two)]);

    let result = Layout::from_piles(
        stock,
        empty(PileKind::Waste),
        foundations,
        std::array::from_fn(|_| empty(PileKind::Tableau)),
    );
    assert_eq!(
        result,
        Err(InvariantViolation::FoundationOutOfSequence { pile: PileId::foundation(2) })
    );
}

/// Test a pile supplied in the wrong slot is rejected.
#[test]
fn test_from_piles_rejects_wrong_kind() {
    let result = Layout::from_piles(
        stock_with_everything(),
        empty(PileKind::Tableau),
        std::array::from_fn(|_| empty(PileKind::Foundation)),
        std::array::from_fn(|_| empty(PileKind::Tableau)),
    );
    assert_eq!(
        result,
        Err(InvariantViolation::WrongPileKind {
            expected: PileKind::Waste,
            found: PileKind::Tableau,
        })
    );
}

/// Test a snapshot with a forged rank does not load.
#[test]
fn test_snapshot_with_bad_rank_rejected() {
    let layout = Layout::from_piles(
        stock_with_everything(),
        empty(PileKind::Waste),
        std::array::from_fn(|_| empty(PileKind::Foundation)),
        std::array::from_fn(|_| empty(PileKind::Tableau)),
    )
    .unwrap();
    let json = serde_json::to_string(&layout).unwrap();
    let restored: Layout = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, layout);

    // The stock top is the king of clubs
    let at = json.rfind("\"rank\":13").unwrap();
    let forged = format!("{}\"rank\":14{}", &json[..at], &json[at + "\"rank\":13".len()..]);
    assert!(serde_json::from_str::<Layout>(&forged).is_err());
}
