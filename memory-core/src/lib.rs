//! Core logic for a browser memory-matching game.
//!
//! The [`Game`] controller owns the board, the two-pick selection, the
//! per-level counters and the elapsed-time clock. The presentation layer
//! feeds discrete input events in (`select_tile`, `restart`, `play_again`,
//! `tick`, plus the two delayed resolutions) and applies the returned
//! outcomes to its visuals; nothing in this crate touches the DOM, so the
//! whole state machine runs deterministically under host tests.

pub mod board;
pub mod clock;
pub mod constants;
mod game;

pub use board::{Tile, TileFace};
pub use clock::LevelClock;
pub use game::{Game, Phase, SelectOutcome};
