//! Host-controlled countdown
//!
//! The countdown never runs on its own: an external trigger calls
//! [`Countdown::tick`] once per second. It stops itself at zero and never
//! moves the slide; the host proceeds manually after the buzzer.

use serde::{Deserialize, Serialize};

/// Countdown state: whether it runs and how many seconds remain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    active: bool,
    remaining: u32,
}

impl Countdown {
    /// Creates a stopped countdown holding `seconds`
    pub const fn new(seconds: u32) -> Self {
        Self {
            active: false,
            remaining: seconds,
        }
    }

    /// Whether the countdown is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left on the countdown
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Starts a stopped countdown or stops a running one
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// Stores `seconds` as the remaining time, leaving the active flag alone
    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    /// Advances the countdown by one second
    ///
    /// A running countdown with time left loses one second. Anything else
    /// (a countdown already at zero, or a stopped one) ends up stopped.
    ///
    /// # Returns
    ///
    /// `true` if the countdown changed
    pub fn tick(&mut self) -> bool {
        if self.active && self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            std::mem::replace(&mut self.active, false)
        }
    }

    /// Whether the countdown is running with no time left (the buzzer state)
    pub fn is_expired(&self) -> bool {
        self.active && self.remaining == 0
    }
}
