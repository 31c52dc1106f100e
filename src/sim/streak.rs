//! Kill-streak callouts
//!
//! One message at a time. A new callout always replaces the current one, and
//! an expired callout is cleared lazily the next time it is looked at.

use crate::consts::STREAK_MESSAGE_DURATION_MS;

/// Callout for a consecutive-point count. Empty below 2.
pub fn streak_message(streak: u32) -> &'static str {
    match streak {
        2 => "Double Kill!",
        3 => "Triple Kill!",
        4 => "Ultra Kill!",
        n if n >= 5 => "Holy Shit!",
        _ => "",
    }
}

/// The single on-screen streak message and when it went up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakDisplay {
    message: &'static str,
    activated_ms: u64,
}

impl StreakDisplay {
    /// Make `message` the active callout, restarting its timer.
    /// Empty messages are ignored. Returns whether anything changed.
    pub fn announce(&mut self, message: &'static str, now_ms: u64) -> bool {
        if message.is_empty() {
            return false;
        }
        self.message = message;
        self.activated_ms = now_ms;
        true
    }

    /// Message to draw this frame, clearing it once it has been up longer
    /// than the display duration.
    pub fn refresh(&mut self, now_ms: u64) -> Option<&'static str> {
        if self.message.is_empty() {
            return None;
        }
        if now_ms.saturating_sub(self.activated_ms) <= STREAK_MESSAGE_DURATION_MS {
            Some(self.message)
        } else {
            self.message = "";
            None
        }
    }

    /// Current message without expiry check ("" when none)
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn activated_ms(&self) -> u64 {
        self.activated_ms
    }
}
