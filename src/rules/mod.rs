//! Klondike rules.
//!
//! - `draw`: stock to waste, and recycling the waste
//! - `validator`: what may move where
//! - `executor`: carrying out a validated move
//! - `selection`: the two-tap gesture that drives validator and executor

pub mod draw;
pub mod validator;
pub mod executor;
pub mod selection;

pub use draw::{draw_or_recycle, DrawOutcome};
pub use executor::{execute, CompletedMove};
pub use selection::{Selection, SelectionMachine, TapOutcome};
