//! Thresholds and pacing shared by every actor in a hunt.

use std::time::Duration;

/// Default boredom at which an actor gives up.
pub const BOREDOM_MAX: u32 = 100;
/// Default fear at which a hunter flees.
pub const FEAR_MAX: u32 = 10;
/// Default pause between hunter ticks.
pub const HUNTER_WAIT: Duration = Duration::from_micros(5000);
/// Default pause between ghost ticks.
pub const GHOST_WAIT: Duration = Duration::from_micros(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuntRules {
    pub boredom_max: u32,
    pub fear_max: u32,
    pub hunter_pause: Duration,
    pub ghost_pause: Duration,
}

impl Default for HuntRules {
    fn default() -> Self {
        Self {
            boredom_max: BOREDOM_MAX,
            fear_max: FEAR_MAX,
            hunter_pause: HUNTER_WAIT,
            ghost_pause: GHOST_WAIT,
        }
    }
}

impl HuntRules {
    /// No pauses, for tests and benchmarks.
    pub fn unpaced(boredom_max: u32, fear_max: u32) -> Self {
        Self {
            boredom_max,
            fear_max,
            hunter_pause: Duration::ZERO,
            ghost_pause: Duration::ZERO,
        }
    }

    pub fn with_boredom_max(mut self, boredom_max: u32) -> Self {
        self.boredom_max = boredom_max;
        self
    }

    pub fn with_fear_max(mut self, fear_max: u32) -> Self {
        self.fear_max = fear_max;
        self
    }

    pub fn with_pauses(mut self, hunter: Duration, ghost: Duration) -> Self {
        self.hunter_pause = hunter;
        self.ghost_pause = ghost;
        self
    }
}
