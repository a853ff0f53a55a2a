//! Klondike game aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace};

use crate::cards::{build_deck, deal, shuffle, Card, CardId, RANK_COUNT};
use crate::core::{GameRng, KlondikeConfig};
use crate::rules::{draw_or_recycle, DrawOutcome, Selection, SelectionMachine, TapOutcome};
use crate::zones::{Layout, Pile, PileId};

/// Waste cards an observer fans out.
pub const VISIBLE_WASTE: usize = 3;

/// Pile counts and the move counter, for a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub moves: u32,
    pub stock: usize,
    pub waste: usize,
    pub foundation: usize,
    pub tableau: usize,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moves: {}   Stock: {}   Waste: {}   Foundation: {}   Tableau: {}",
            self.moves, self.stock, self.waste, self.foundation, self.tableau
        )
    }
}

/// A Klondike session: the layout, the pending selection and the move
/// counter.
///
/// Every operation takes `&mut self`; one gesture is fully applied before
/// the next. After each change the layout invariants are verified, and a
/// violation halts the game with a panic.
#[derive(Clone, Debug)]
pub struct Klondike {
    config: KlondikeConfig,
    layout: Layout,
    selection: SelectionMachine,
    moves: u32,
    show_face_down: bool,
}

impl Klondike {
    /// Shuffle and deal a new game.
    ///
    /// Panics if `config.draw_count` is zero.
    #[must_use]
    pub fn new(config: KlondikeConfig, rng: &mut GameRng) -> Self {
        check_config(&config);
        let show_face_down = config.show_face_down;
        let mut game = Self {
            config,
            layout: Layout::new(),
            selection: SelectionMachine::new(),
            moves: 0,
            show_face_down,
        };
        game.deal_from(rng);
        game
    }

    /// Start from a prepared position with the move counter at zero.
    ///
    /// Panics if `config.draw_count` is zero or the layout breaks an invariant.
    #[must_use]
    pub fn from_layout(config: KlondikeConfig, layout: Layout) -> Self {
        check_config(&config);
        let show_face_down = config.show_face_down;
        let game = Self {
            config,
            layout,
            selection: SelectionMachine::new(),
            moves: 0,
            show_face_down,
        };
        game.check_invariants();
        game
    }

    /// Throw away the current game and deal a fresh one.
    ///
    /// Resets the move counter, drops any selection and masks face-down
    /// cards again.
    pub fn new_game(&mut self, rng: &mut GameRng) {
        self.moves = 0;
        self.show_face_down = false;
        self.selection.clear();
        self.deal_from(rng);
    }

    fn deal_from(&mut self, rng: &mut GameRng) {
        let mut deck = build_deck();
        shuffle(&mut deck, rng);
        self.layout = deal(deck);
        info!(seed = rng.seed(), draw_count = self.config.draw_count, "new game dealt");
        self.check_invariants();
    }

    /// Tap a card: select it, cancel the selection, or complete a move.
    pub fn tap_card(&mut self, card: CardId) -> TapOutcome {
        let outcome = self.selection.tap_card(&mut self.layout, card);
        self.record(&outcome, card);
        outcome
    }

    /// Tap an empty tableau or foundation placeholder.
    pub fn tap_empty_pile(&mut self, pile: PileId) -> TapOutcome {
        let outcome = self.selection.tap_empty_pile(&mut self.layout, pile);
        match outcome {
            TapOutcome::Moved(done) => {
                self.moves += 1;
                debug!(moves = self.moves, from = %done.from, to = %done.to, count = done.count, "move onto empty pile");
                self.check_invariants();
            }
            _ => trace!(pile = %pile, ?outcome, "empty pile tap"),
        }
        outcome
    }

    fn record(&mut self, outcome: &TapOutcome, card: CardId) {
        match outcome {
            TapOutcome::Moved(done) => {
                self.moves += 1;
                debug!(
                    moves = self.moves,
                    card = %card,
                    from = %done.from,
                    to = %done.to,
                    count = done.count,
                    revealed = done.revealed,
                    "move executed"
                );
                self.check_invariants();
            }
            TapOutcome::Selected(selection) => {
                debug!(card = %selection.card, source = %selection.source, depth = selection.depth, "card selected");
            }
            TapOutcome::Cancelled => debug!(card = %card, "selection cancelled"),
            TapOutcome::Discarded => debug!(card = %card, "stale selection discarded"),
            TapOutcome::Ignored | TapOutcome::NoMatch => trace!(card = %card, ?outcome, "tap had no effect"),
        }
    }

    /// Draw from the stock, or recycle the waste when the stock is empty.
    ///
    /// Always counts as one move.
    pub fn draw_cards(&mut self) -> DrawOutcome {
        let outcome = draw_or_recycle(&mut self.layout, self.config.draw_count);
        self.moves += 1;
        match outcome {
            DrawOutcome::Drew(count) => debug!(moves = self.moves, count, "drew from stock"),
            DrawOutcome::Recycled(count) => debug!(moves = self.moves, count, "recycled waste"),
        }
        self.check_invariants();
        outcome
    }

    /// Flip the display-only face-down visibility flag. Returns the new value.
    pub fn toggle_face_down_visibility(&mut self) -> bool {
        self.show_face_down = !self.show_face_down;
        self.show_face_down
    }

    fn check_invariants(&self) {
        if let Err(violation) = self.layout.verify() {
            error!(%violation, moves = self.moves, "layout invariant violated");
            panic!("layout invariant violated: {violation}");
        }
    }

    // === Read accessors ===

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        self.layout.stock()
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        self.layout.waste()
    }

    /// Foundation `index` (0..4). Panics if out of range.
    #[must_use]
    pub fn foundation(&self, index: usize) -> &Pile {
        self.layout.foundation(index)
    }

    /// Tableau column `index` (0..7). Panics if out of range.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &Pile {
        self.layout.tableau(index)
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn show_face_down(&self) -> bool {
        self.show_face_down
    }

    /// The pending selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.current()
    }

    /// Cards to highlight: the selection and, for a column, the group above it.
    #[must_use]
    pub fn selected_cards(&self) -> &[Card] {
        self.selection.highlighted(&self.layout)
    }

    #[must_use]
    pub fn is_highlighted(&self, card: CardId) -> bool {
        self.selected_cards().iter().any(|c| c.id() == card)
    }

    /// The top waste cards an observer shows, bottom to top.
    #[must_use]
    pub fn visible_waste(&self) -> &[Card] {
        let cards = self.layout.waste().cards();
        &cards[cards.len().saturating_sub(VISIBLE_WASTE)..]
    }

    /// The label an observer may draw on `card`.
    ///
    /// Face-up cards always show their identity; face-down cards only while
    /// face-down visibility is on.
    #[must_use]
    pub fn card_label(&self, card: &Card) -> Option<String> {
        (card.is_face_up() || self.show_face_down).then(|| card.id().to_string())
    }

    /// Counts for a status line.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            moves: self.moves,
            stock: self.layout.stock().len(),
            waste: self.layout.waste().len(),
            foundation: self.layout.foundations().iter().map(Pile::len).sum(),
            tableau: self.layout.tableau_columns().iter().map(Pile::len).sum(),
        }
    }

    /// All four foundations complete, ace to king.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.layout
            .foundations()
            .iter()
            .all(|pile| pile.len() == RANK_COUNT)
    }
}

/// Reject a config the `with_*` builders would have refused.
fn check_config(config: &KlondikeConfig) {
    assert!(config.draw_count > 0, "Draw count must be at least 1");
}

/// Builder for creating a seeded `Klondike` game.
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    config: KlondikeConfig,
}

impl KlondikeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards per draw. Panics if zero.
    #[must_use]
    pub fn draw_count(mut self, count: usize) -> Self {
        self.config = self.config.with_draw_count(count);
        self
    }

    /// Start with face-down cards unmasked.
    #[must_use]
    pub fn show_face_down(mut self, show: bool) -> Self {
        self.config.show_face_down = show;
        self
    }

    /// Deal a game from `seed`. The same seed always deals the same layout.
    #[must_use]
    pub fn build(self, seed: u64) -> Klondike {
        Klondike::new(self.config, &mut GameRng::new(seed))
    }
}
