//! The stock and waste cycle.
//!
//! A draw moves up to `draw_count` cards from the stock top onto the waste,
//! turning each face-up. When the stock is empty the same action recycles
//! the waste back into the stock face-down instead. Either way it is one
//! move.

use serde::{Deserialize, Serialize};

use crate::zones::Layout;

/// What a draw action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// Cards moved from stock to waste.
    Drew(usize),
    /// Stock was empty; this many waste cards went back to the stock.
    Recycled(usize),
}

/// Draw from the stock, or recycle the waste if the stock is empty.
pub fn draw_or_recycle(layout: &mut Layout, draw_count: usize) -> DrawOutcome {
    if layout.stock().is_empty() {
        DrawOutcome::Recycled(recycle(layout))
    } else {
        DrawOutcome::Drew(draw_cards(layout, draw_count))
    }
}

/// Move up to `draw_count` cards from stock to waste, one at a time.
///
/// The first card popped from the stock ends up buried under the cards
/// drawn after it. Returns the number of cards moved.
pub fn draw_cards(layout: &mut Layout, draw_count: usize) -> usize {
    let mut drawn = 0;
    while drawn < draw_count {
        let Some(mut card) = layout.stock_mut().pop() else {
            break;
        };
        card.turn_face_up();
        layout.waste_mut().push(card);
        drawn += 1;
    }
    drawn
}

/// Move every waste card back to the stock, face-down.
///
/// The waste top goes in first and so becomes the stock bottom; drawing
/// through the recycled stock replays the original draw order. Returns the
/// number of cards moved.
pub fn recycle(layout: &mut Layout) -> usize {
    let waste = layout.waste_mut().take_all();
    let recycled = waste.len();
    layout.stock_mut().extend(waste.into_iter().rev().map(|mut card| {
        card.turn_face_down();
        card
    }));
    recycled
}
