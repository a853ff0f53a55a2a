//! Piles and the table layout.
//!
//! ## Key Types
//!
//! - `PileKind`, `PileId`: pile addressing (stock, waste, foundation n, tableau n)
//! - `Pile`: ordered card container, top is the last card
//! - `Layout`: all thirteen piles plus the layout invariants

pub mod pile;
pub mod layout;

pub use pile::{CardRun, Pile, PileId, PileKind, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use layout::{CardLocation, Layout};
