//! GameView: maps engine state into a grid of colored glyphs.
//!
//! This module is pure (no I/O), so the layout can be unit-tested.
//! Each board cell is drawn two terminal columns wide to compensate for
//! the glyph aspect ratio. Sidebars show the held piece, the preview,
//! the score and the high score; a banner line reports pause/game over.

use crate::core::{get_shape, Engine};
use crate::types::{ColorTag, PieceKind, Rotation};

/// One terminal cell: a character and an optional color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Option<ColorTag>,
}

impl Glyph {
    const BLANK: Glyph = Glyph {
        ch: ' ',
        color: None,
    };
}

/// A rendered frame: rows of glyphs, all the same width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    rows: Vec<Vec<Glyph>>,
}

impl Frame {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Glyph::BLANK; width]; height],
        }
    }

    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    fn put(&mut self, x: usize, y: usize, ch: char, color: Option<ColorTag>) {
        if y < self.height && x < self.width {
            self.rows[y][x] = Glyph { ch, color };
        }
    }

    fn put_str(&mut self, x: usize, y: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i, y, ch, None);
        }
    }

    /// One board cell, two columns wide
    fn put_block(&mut self, x: usize, y: usize, color: ColorTag) {
        self.put(x, y, '█', Some(color));
        self.put(x + 1, y, '█', Some(color));
    }

    /// Landing-ghost cell, drawn hollow in the default color
    fn put_ghost(&mut self, x: usize, y: usize) {
        self.put(x, y, '░', None);
        self.put(x + 1, y, '░', None);
    }

    #[cfg(test)]
    pub fn row_text(&self, y: usize) -> String {
        self.rows[y].iter().map(|g| g.ch).collect()
    }
}

const SIDEBAR_W: usize = 12;
const CELL_W: usize = 2;

/// Read-only presenter over the engine
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current engine state into a frame
    pub fn render(&self, engine: &Engine) -> Frame {
        let board = engine.board();
        let bw = board.width() as usize;
        let bh = board.height() as usize;

        let board_px_w = bw * CELL_W;
        let frame_w = SIDEBAR_W + board_px_w + 2 + SIDEBAR_W;
        let frame_h = bh + 3;
        let mut frame = Frame::new(frame_w, frame_h);

        let board_x = SIDEBAR_W + 1;
        self.draw_border(&mut frame, SIDEBAR_W, 0, board_px_w + 2, bh + 2);

        // Settled cells.
        for y in 0..bh {
            for x in 0..bw {
                if let Some(Some(kind)) = board.get(x as i8, y as i8) {
                    frame.put_block(board_x + x * CELL_W, y + 1, kind.color());
                }
            }
        }

        // Landing ghost, drawn under the active piece while it is alive.
        if !engine.game_over() {
            for (x, y) in engine.drop_target().cells() {
                if x >= 0 && y >= 0 {
                    frame.put_ghost(board_x + x as usize * CELL_W, y as usize + 1);
                }
            }
        }

        // Active piece (kept visible on game over, where it overlaps).
        let active = engine.active();
        for (x, y) in active.cells() {
            if x >= 0 && y >= 0 {
                frame.put_block(board_x + x as usize * CELL_W, y as usize + 1, active.color());
            }
        }

        // Left sidebar: held piece.
        frame.put_str(1, 1, "HOLD");
        if let Some(kind) = engine.held_kind() {
            self.draw_preview(&mut frame, 1, 3, kind);
        }

        // Right sidebar: preview, score, high score.
        let right_x = SIDEBAR_W + board_px_w + 3;
        frame.put_str(right_x, 1, "NEXT");
        self.draw_preview(&mut frame, right_x, 3, engine.next_kind());
        frame.put_str(right_x, 8, "SCORE");
        frame.put_str(right_x, 9, &engine.score().to_string());
        frame.put_str(right_x, 11, "HIGH");
        frame.put_str(right_x, 12, &engine.high_score().to_string());

        // Banner line under the board.
        let banner = if engine.game_over() {
            "GAME OVER - R RESTART, Q QUIT"
        } else if engine.paused() {
            "PAUSED - ESC RESUME, R RESTART"
        } else {
            ""
        };
        frame.put_str(board_x, bh + 2, banner);

        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: usize, y: usize, w: usize, h: usize) {
        for dx in 1..w - 1 {
            frame.put(x + dx, y, '─', None);
            frame.put(x + dx, y + h - 1, '─', None);
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, '│', None);
            frame.put(x + w - 1, y + dy, '│', None);
        }
        frame.put(x, y, '┌', None);
        frame.put(x + w - 1, y, '┐', None);
        frame.put(x, y + h - 1, '└', None);
        frame.put(x + w - 1, y + h - 1, '┘', None);
    }

    /// Draw a kind in its spawn orientation inside a sidebar box
    fn draw_preview(&self, frame: &mut Frame, x: usize, y: usize, kind: PieceKind) {
        for (dx, dy) in get_shape(kind, Rotation::North) {
            frame.put_block(x + dx as usize * CELL_W, y + dy as usize, kind.color());
        }
    }
}
