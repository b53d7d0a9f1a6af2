//! Scoring module - row-clear rewards and the gravity speed curve
//!
//! Scoring uses a fixed per-count table: multi-line clears pay a growing
//! per-line bonus (1.25x for a double, 1.5x for a triple, 2x for a
//! quad). The gravity interval decays exponentially with score and is
//! clamped to a floor, so the game strictly speeds up but never becomes
//! instantaneous.

use crate::types::{BASE_DROP_MS, DROP_FLOOR_MS, GRAVITY_DECAY_SCORE, LINE_SCORES};

/// Points awarded for clearing `rows` rows in a single lock (0-4)
pub fn line_clear_score(rows: usize) -> u32 {
    if rows > 4 {
        return 0;
    }
    LINE_SCORES[rows]
}

/// Gravity interval in milliseconds at the given score:
/// `base * e^(-score / decay)`, clamped to the floor.
pub fn drop_interval_ms(score: u32) -> u64 {
    let decayed = BASE_DROP_MS as f64 * (-(score as f64) / GRAVITY_DECAY_SCORE).exp();
    (decayed as u64).max(DROP_FLOOR_MS)
}
