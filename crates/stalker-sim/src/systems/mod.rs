//! Tick Systems
//!
//! One schedule run per 100 ms tick, in a fixed chain: phase advancement,
//! the room-illumination poll, light exposure, chase movement and kills,
//! lifetime expiry, despawn processing, and finally the blackout cycle.

pub mod blackout;
pub mod chase;
pub mod exposure;
pub mod illumination;
pub mod lifecycle;

pub use blackout::{run_blackout_cycle, BlackoutControl};
pub use chase::chase_tick;
pub use exposure::accumulate_light_exposure;
pub use illumination::poll_room_light;
pub use lifecycle::{advance_stalker_phase, end_round, process_despawns, tick_lifetimes};
