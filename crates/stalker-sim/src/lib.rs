//! SCP-575 blackout-stalker simulation.
//!
//! A deterministic, tick-driven rendition of the blackout antagonist: a
//! scheduler plunges facility zones into darkness on a randomized cycle, and
//! each blackout spawns a stalker that hunts one chosen victim until it
//! kills them, is driven off by flashlight exposure or room lighting, or
//! runs out the blackout's duration.
//!
//! All gameplay state lives in a `bevy_ecs` [`World`] advanced by a fixed
//! 100 ms tick; every stochastic decision draws from the seeded [`SimRng`],
//! so a whole round replays identically for the same seed.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod audio;
pub mod clock;
pub mod command;
pub mod components;
pub mod config;
pub mod events;
pub mod los;
pub mod registry;
pub mod setup;
pub mod spawn;
pub mod systems;
pub mod victim;

pub use clock::{RoundState, SimClock, TICK_SECONDS};
pub use components::*;
pub use config::Config;
pub use events::{DespawnQueue, TickEvents};
pub use registry::StalkerRegistry;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
