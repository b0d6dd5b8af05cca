//! Simulation clock and round state.

use bevy_ecs::prelude::Resource;

/// Fixed timestep of the simulation, in seconds.
pub const TICK_SECONDS: f32 = 0.1;

/// Monotonic tick counter for the whole round.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SimClock {
    pub tick: u64,
}

impl SimClock {
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Seconds elapsed since the round began.
    pub fn elapsed_seconds(&self) -> f32 {
        self.tick as f32 * TICK_SECONDS
    }
}

/// Whether the round has started. The admin command and the blackout cycle
/// both refuse to act before it has.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct RoundState {
    pub started: bool,
}
