//! Engine module - orchestrates the piece/grid state machine
//!
//! The engine owns the board, the active piece, the preview and held
//! kinds, the score, and every timer. All time-gated operations take an
//! explicit monotonic timestamp in milliseconds; nothing here reads a
//! clock. Invalid moves, redundant holds, and input after game over are
//! no-ops, never errors.

use crate::core::scoring::{drop_interval_ms, line_clear_score};
use crate::core::{Board, Piece, SimpleRng};
use crate::types::{
    ConfigError, GameAction, GameConfig, PieceKind, Spin, HARD_DROP_COOLDOWN_MS, MOVE_COOLDOWN_MS,
    ROTATE_COOLDOWN_MS,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Piece,
    next: PieceKind,
    held: Option<PieceKind>,
    rng: SimpleRng,
    score: u32,
    /// Running max of score, kept across restarts
    high_score: u32,
    /// Whether the current active piece already went through a hold swap
    has_held: bool,
    paused: bool,
    game_over: bool,
    /// Timestamp of the last gravity drop (re-based on resume/restart)
    last_drop_ms: u64,
    // Per-command "time of last application" for input debouncing.
    last_left_ms: Option<u64>,
    last_right_ms: Option<u64>,
    last_down_ms: Option<u64>,
    last_rotate_ms: Option<u64>,
    last_hard_drop_ms: Option<u64>,
}

impl Engine {
    /// Create a new game. The first active piece is a fresh random draw
    /// (there is no preview yet); the preview gets its own draw. Gravity
    /// is based at timestamp 0, so callers should measure time from the
    /// moment of construction.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let board = Board::new(config.width, config.height)?;
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(rng.next_kind(), config.width);
        let next = rng.next_kind();
        Ok(Self {
            board,
            active,
            next,
            held: None,
            rng,
            score: 0,
            high_score: 0,
            has_held: false,
            paused: false,
            game_over: false,
            last_drop_ms: 0,
            last_left_ms: None,
            last_right_ms: None,
            last_down_ms: None,
            last_rotate_ms: None,
            last_hard_drop_ms: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn held_kind(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn can_hold(&self) -> bool {
        !self.has_held
    }

    /// Current gravity interval, shrinking as the score grows
    pub fn drop_interval_ms(&self) -> u64 {
        drop_interval_ms(self.score)
    }

    /// Promote the preview to active and draw a fresh preview kind.
    /// If the new piece overlaps settled cells the game is over; the
    /// board is left untouched and the overlapping piece stays visible.
    pub fn spawn_next(&mut self) {
        if self.game_over {
            return;
        }
        self.active = Piece::spawn(self.next, self.board.width());
        self.next = self.rng.next_kind();
        self.has_held = false;
        if self.board.overlaps(&self.active.cells()) {
            self.game_over = true;
        }
    }

    /// Try to translate the active piece. A rejected purely-downward
    /// move means the piece has landed: it locks into the board, full
    /// rows clear and score, and the next piece spawns. Rejected
    /// horizontal moves are simply discarded.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.active.translated(dx, dy);
        if self.board.fits(&candidate.cells()) {
            self.active = candidate;
            return true;
        }
        if dx == 0 && dy > 0 {
            self.lock_active();
        }
        false
    }

    /// Try to rotate the active piece: build the rotated candidate,
    /// commit it if it fits, discard it otherwise. Rotation never locks.
    pub fn rotate(&mut self, spin: Spin) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.active.rotated(spin);
        if self.board.fits(&candidate.cells()) {
            self.active = candidate;
            return true;
        }
        false
    }

    /// Where the active piece would land if dropped straight down:
    /// the lowest translation of the piece that still fits. Used by the
    /// presenter to draw the landing ghost.
    pub fn drop_target(&self) -> Piece {
        let mut landed = self.active;
        loop {
            let below = landed.translated(0, 1);
            if !self.board.fits(&below.cells()) {
                return landed;
            }
            landed = below;
        }
    }

    /// Drive the active piece straight down until it locks
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        while self.move_piece(0, 1) {}
    }

    /// Set the active piece aside, at most once per spawned piece.
    ///
    /// First hold: the active kind goes to the hold slot and the
    /// existing preview spawns (the spawn draws the replacement
    /// preview). Later holds: active and held kinds swap, the active
    /// respawns at the start position, and the preview is untouched.
    pub fn hold_swap(&mut self) -> bool {
        if self.game_over || self.has_held {
            return false;
        }
        match self.held {
            None => {
                self.held = Some(self.active.kind);
                self.spawn_next();
            }
            Some(kind) => {
                self.held = Some(self.active.kind);
                self.active = Piece::spawn(kind, self.board.width());
            }
        }
        self.has_held = true;
        true
    }

    /// Time-driven downward step. Drops the piece once whenever the
    /// gravity interval for the current score has elapsed since the
    /// last drop. Returns true if a drop (or lock) was evaluated.
    pub fn gravity_tick(&mut self, now_ms: u64) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        if now_ms.saturating_sub(self.last_drop_ms) < self.drop_interval_ms() {
            return false;
        }
        self.last_drop_ms = now_ms;
        self.move_piece(0, 1);
        true
    }

    /// Toggle pause. Resuming re-bases the gravity timestamp to the
    /// resume instant so queued-up time never bursts into extra drops.
    pub fn toggle_pause(&mut self, now_ms: u64) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        if !self.paused {
            self.last_drop_ms = now_ms;
        }
    }

    /// Reset everything except the high score and the RNG stream
    pub fn restart(&mut self, now_ms: u64) {
        self.board.clear();
        self.score = 0;
        self.held = None;
        self.has_held = false;
        self.paused = false;
        self.game_over = false;
        self.active = Piece::spawn(self.rng.next_kind(), self.board.width());
        self.next = self.rng.next_kind();
        self.last_drop_ms = now_ms;
        self.last_left_ms = None;
        self.last_right_ms = None;
        self.last_down_ms = None;
        self.last_rotate_ms = None;
        self.last_hard_drop_ms = None;
    }

    /// Apply a player command, debounced by that command's cooldown.
    /// Each command type keeps its own last-applied timestamp, so a held
    /// key re-applies only once per cooldown window. Hold is gated by
    /// the once-per-piece rule instead; pause and restart are un-gated.
    pub fn apply(&mut self, action: GameAction, now_ms: u64) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }
        if self.paused && !matches!(action, GameAction::Pause | GameAction::Restart) {
            return false;
        }
        match action {
            GameAction::MoveLeft => {
                if Self::gate(&mut self.last_left_ms, now_ms, MOVE_COOLDOWN_MS) {
                    self.move_piece(-1, 0)
                } else {
                    false
                }
            }
            GameAction::MoveRight => {
                if Self::gate(&mut self.last_right_ms, now_ms, MOVE_COOLDOWN_MS) {
                    self.move_piece(1, 0)
                } else {
                    false
                }
            }
            GameAction::SoftDrop => {
                if Self::gate(&mut self.last_down_ms, now_ms, MOVE_COOLDOWN_MS) {
                    self.move_piece(0, 1)
                } else {
                    false
                }
            }
            GameAction::HardDrop => {
                if Self::gate(&mut self.last_hard_drop_ms, now_ms, HARD_DROP_COOLDOWN_MS) {
                    self.hard_drop();
                    true
                } else {
                    false
                }
            }
            GameAction::RotateCw => {
                if Self::gate(&mut self.last_rotate_ms, now_ms, ROTATE_COOLDOWN_MS) {
                    self.rotate(Spin::Cw)
                } else {
                    false
                }
            }
            GameAction::RotateCcw => {
                if Self::gate(&mut self.last_rotate_ms, now_ms, ROTATE_COOLDOWN_MS) {
                    self.rotate(Spin::Ccw)
                } else {
                    false
                }
            }
            GameAction::Hold => self.hold_swap(),
            GameAction::Pause => {
                self.toggle_pause(now_ms);
                true
            }
            GameAction::Restart => {
                self.restart(now_ms);
                true
            }
        }
    }

    /// Cooldown check. The timestamp only advances when the command is
    /// let through, so a held key re-fires at a steady cadence.
    fn gate(last: &mut Option<u64>, now_ms: u64, cooldown_ms: u64) -> bool {
        if matches!(*last, Some(t) if now_ms.saturating_sub(t) < cooldown_ms) {
            return false;
        }
        *last = Some(now_ms);
        true
    }

    fn lock_active(&mut self) {
        self.board.lock(&self.active.cells(), self.active.kind);
        let cleared = self.board.clear_full_rows();
        self.add_score(line_clear_score(cleared));
        self.spawn_next();
    }

    fn add_score(&mut self, points: u32) {
        self.score += points;
        self.high_score = self.high_score.max(self.score);
    }
}
