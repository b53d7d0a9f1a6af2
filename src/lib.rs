//! Terminal falling-block puzzle game.
//!
//! `core` holds the whole rule set (pieces, board, engine); `input` and
//! `term` are thin adapters that own no game logic.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
