//! Move execution.
//!
//! The executor assumes the caller has already checked the rank/color/suit
//! rule. It only re-checks that the selection is still where it was
//! captured and that the move is structurally sound, then relocates the
//! cards and applies the reveal rule.

use serde::{Deserialize, Serialize};

use crate::zones::{CardLocation, CardRun, Layout, PileId, PileKind};

use super::selection::Selection;
use super::validator::selection_is_current;

/// A move that was carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMove {
    pub from: PileId,
    pub to: PileId,
    /// Cards relocated: more than one only for a tableau group move.
    pub count: usize,
    /// The source column's new top was turned face-up.
    pub revealed: bool,
}

/// Move the selected card (and, tableau to tableau, every card above it)
/// onto `to`.
///
/// Returns `None` without touching the layout if the selection is stale,
/// `to` is the source pile or out of range, or the pairing of pile kinds is
/// not a move. A tableau card can only go to a foundation when it is the
/// column top.
pub fn execute(layout: &mut Layout, selection: &Selection, to: PileId) -> Option<CompletedMove> {
    let from = selection.source;
    if to == from || layout.pile(to).is_none() || !selection_is_current(layout, selection) {
        return None;
    }

    let run: CardRun = match (from.kind, to.kind) {
        (PileKind::Tableau, PileKind::Tableau) => layout.pile_mut(from)?.split_off(selection.depth),
        (PileKind::Tableau, PileKind::Foundation) => {
            if !layout.is_top(CardLocation { pile: from, depth: selection.depth }) {
                return None;
            }
            layout.pile_mut(from)?.split_off(selection.depth)
        }
        (PileKind::Waste, PileKind::Tableau | PileKind::Foundation) => {
            layout.waste_mut().pop().into_iter().collect()
        }
        _ => return None,
    };

    let count = run.len();
    let Some(destination) = layout.pile_mut(to) else {
        unreachable!("destination {to} was checked before lifting cards");
    };
    destination.extend(run);

    let revealed = from.kind == PileKind::Tableau && layout.reveal_top(from.index);

    Some(CompletedMove {
        from,
        to,
        count,
        revealed,
    })
}
