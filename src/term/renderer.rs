//! TerminalRenderer: flushes rendered frames to a real terminal.
//!
//! Full redraw every frame; the play field is small enough that diffing
//! would not pay for itself here.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::game_view::Frame;
use crate::types::ColorTag;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        for (y, row) in frame.rows().iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            let mut current: Option<ColorTag> = None;
            for glyph in row {
                if glyph.color != current {
                    current = glyph.color;
                    match current {
                        Some(tag) => {
                            self.stdout.queue(SetForegroundColor(to_color(tag)))?;
                        }
                        None => {
                            self.stdout.queue(ResetColor)?;
                        }
                    }
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
            self.stdout.queue(ResetColor)?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::Red,
        ColorTag::Purple => Color::Magenta,
        ColorTag::Green => Color::Green,
        ColorTag::Aqua => Color::Cyan,
        ColorTag::Blue => Color::Blue,
        ColorTag::Orange => Color::Rgb {
            r: 255,
            g: 140,
            b: 0,
        },
        ColorTag::Yellow => Color::Yellow,
    }
}
