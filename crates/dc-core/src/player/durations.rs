//! Timed player effects
//!
//! Durations are counted in time units (turns times the baseline delay) and
//! are decremented by the turn loop, never by the effect code that sets them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

/// A timed effect on the player
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum Duration {
    Transformation = 0,
    Flight,
    IcyArmour,
    /// Countdown to a pending teleport
    Teleport,
    /// Lycanthropic rage
    Wereblood,
    DeathsDoor,
    Flayed,
    Invisibility,
    WaterWalk,
    Berserk,
}

/// Remaining time of every timed effect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    remaining: [i32; Duration::COUNT],
}

impl Durations {
    pub const fn get(&self, duration: Duration) -> i32 {
        self.remaining[duration as usize]
    }

    /// Set a duration; negative values clamp to zero
    pub fn set(&mut self, duration: Duration, value: i32) {
        self.remaining[duration as usize] = value.max(0);
    }

    pub fn clear(&mut self, duration: Duration) {
        self.remaining[duration as usize] = 0;
    }

    pub const fn is_active(&self, duration: Duration) -> bool {
        self.remaining[duration as usize] > 0
    }

    /// Subtract elapsed time; returns true when the effect just ran out
    pub fn decrement(&mut self, duration: Duration, elapsed: i32) -> bool {
        let slot = &mut self.remaining[duration as usize];
        if *slot <= 0 {
            return false;
        }
        *slot = (*slot - elapsed).max(0);
        *slot == 0
    }
}
