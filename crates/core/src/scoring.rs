//! Scoring module - score, level, and gravity pacing derivations
//!
//! All three are pure functions; the session stores nothing beyond the raw
//! score. Multi-line clears are rewarded superlinearly (`k^2 * 100`), and
//! the gravity interval falls as the level rises, capped at level 15.

use blockfall_types::{BASE_GRAVITY_STEPS_PER_SEC, LEVEL_SCORE_STEP, LINE_SCORE_UNIT, MAX_LEVEL};

/// Score awarded for clearing `lines` rows at once.
pub fn line_clear_score(lines: u32) -> u32 {
    lines * lines * LINE_SCORE_UNIT
}

/// Level for a given score: `min(score / 1000 + 1, 15)`.
pub fn level_for_score(score: u32) -> u32 {
    (score / LEVEL_SCORE_STEP + 1).min(MAX_LEVEL)
}

/// Milliseconds between gravity descents at a given level.
pub fn gravity_interval_ms(level: u32) -> u32 {
    1000 / (BASE_GRAVITY_STEPS_PER_SEC + level)
}
