//! Terminal presenter - reads engine state, renders it, owns no rules

pub mod game_view;
pub mod renderer;

pub use game_view::{Frame, GameView, Glyph};
pub use renderer::TerminalRenderer;
