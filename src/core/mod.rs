//! Core module - pure game logic with no terminal or I/O dependencies
//!
//! Everything here is deterministic and synchronous: the application
//! loop feeds commands and timestamps in, the presenter reads state out.

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use engine::Engine;
pub use pieces::{get_shape, spawn_x, Piece};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ms, line_clear_score};
