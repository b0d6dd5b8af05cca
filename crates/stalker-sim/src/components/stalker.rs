//! Stalker-side components.
//!
//! Every timer a stalker owns lives in one of these components, so
//! despawning the entity cancels all of its pending waits at once.

use bevy_ecs::prelude::*;
use std::path::PathBuf;

/// Seconds a freshly created stalker takes to settle into the world before
/// any chase delay or movement applies.
pub const SETTLE_SECONDS: f32 = 0.8;

/// Seconds between room-illumination polls. Staleness up to this long is
/// accepted between polls.
pub const ROOM_POLL_SECONDS: f32 = 5.0;

/// Core stalker state: who it hunts and when it appeared.
#[derive(Component, Debug, Clone, Copy)]
pub struct Stalker {
    /// The one victim this instance hunts for its entire lifecycle.
    pub victim: Entity,
    /// Tick at which the instance was created.
    pub spawned_tick: u64,
    /// Whether the victim has already come within nickname view range.
    pub sighted: bool,
}

/// Lifecycle phase. Terminal outcomes are despawn reasons, not phases.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum StalkerPhase {
    /// Settling into the world; inert.
    Spawning { remaining: f32 },
    /// Configured chase delay; still unable to move or kill.
    DelayedChase { remaining: f32 },
    /// Actively evaluating distance, exposure, and illumination every tick.
    Chasing,
}

impl StalkerPhase {
    pub fn is_chasing(&self) -> bool {
        matches!(self, StalkerPhase::Chasing)
    }
}

/// Accumulated flashlight exposure. Monotonically non-decreasing; only
/// instance destruction resets it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LightExposure {
    pub points: u32,
}

impl LightExposure {
    /// Records one qualifying hit and returns the new total.
    pub fn record_hit(&mut self) -> u32 {
        self.points += 1;
        self.points
    }
}

/// Remaining lifetime in seconds; expiry despawns the instance.
#[derive(Component, Debug, Clone, Copy)]
pub struct Lifetime {
    pub remaining: f32,
}

/// Cached result of the periodic room-illumination poll.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoomLightCache {
    /// Whether the stalker's room was lit at the last poll.
    pub illuminated: bool,
    /// Seconds until the next poll.
    pub poll_timer: f32,
}

impl Default for RoomLightCache {
    fn default() -> Self {
        Self {
            illuminated: false,
            poll_timer: ROOM_POLL_SECONDS,
        }
    }
}

/// Collision body for the flashlight ray test.
#[derive(Component, Debug, Clone, Copy)]
pub struct StalkerBody {
    pub radius: f32,
}

impl Default for StalkerBody {
    fn default() -> Self {
        Self { radius: 0.6 }
    }
}

/// The movement tier selected by the last chase tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementTier {
    /// Not moving (inert phase, or inside the min/kill dead band).
    #[default]
    Idle,
    Normal,
    Fast,
    /// Fast-tier range against a sprinting victim, when configured.
    Running,
}

/// Audio track assigned to this instance at spawn.
#[derive(Component, Debug, Clone)]
pub struct StalkerAudio {
    pub track: PathBuf,
    pub looped: bool,
    pub volume: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_is_monotonic() {
        let mut exposure = LightExposure::default();
        let mut last = 0;
        for _ in 0..100 {
            let now = exposure.record_hit();
            assert!(now > last);
            last = now;
        }
        assert_eq!(exposure.points, 100);
    }

    #[test]
    fn test_room_light_cache_defaults_dark() {
        let cache = RoomLightCache::default();
        assert!(!cache.illuminated);
        assert_eq!(cache.poll_timer, ROOM_POLL_SECONDS);
    }
}
