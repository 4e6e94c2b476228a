//! Input gate for held keys.
//!
//! A fresh press always fires. While the key stays held, the action fires
//! once every [`HOLD_DELAY`] ticks, so a held movement key walks the piece
//! at a steady cadence instead of every frame.

use crate::types::HOLD_DELAY;

/// Per-state gate shared by the repeatable actions (move and rotate).
#[derive(Debug, Clone, Default)]
pub struct HoldGate {
    timer: u32,
}

impl HoldGate {
    /// Decide whether a (possibly held) action fires this tick.
    pub fn should_repeat(&mut self, held: bool) -> bool {
        if !held {
            self.timer = 0;
            return true;
        }
        self.timer += 1;
        if self.timer < HOLD_DELAY {
            false
        } else {
            self.timer = 0;
            true
        }
    }

    /// Forget any accumulated hold time.
    pub fn reset(&mut self) {
        self.timer = 0;
    }
}
