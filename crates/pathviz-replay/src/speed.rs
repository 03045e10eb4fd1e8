//! The five-level animation [`Speed`] and its fixed delay table.

use std::time::Duration;

/// Per-level tick delays, level 1 (slowest) through 5 (fastest).
const DELAYS_MS: [u64; 5] = [300, 150, 75, 25, 5];

const LABELS: [&str; 5] = ["Very Slow", "Slow", "Medium", "Fast", "Very Fast"];

/// A user-selected playback speed, one of five discrete levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed(u8);

impl Default for Speed {
    /// Medium.
    fn default() -> Self {
        Self(3)
    }
}

impl Speed {
    /// Create a speed, clamping the level into `1..=5`.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(1, 5))
    }

    /// The level, in `1..=5`.
    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// The delay between scheduled ticks at this speed.
    pub fn delay(self) -> Duration {
        Duration::from_millis(DELAYS_MS[(self.0 - 1) as usize])
    }

    /// Human-readable label for the speed control.
    pub fn label(self) -> &'static str {
        LABELS[(self.0 - 1) as usize]
    }

    /// One level faster, saturating at 5.
    pub fn faster(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// One level slower, saturating at 1.
    pub fn slower(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}
