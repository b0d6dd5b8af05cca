//! World Setup
//!
//! Builds the facility room registry and the round's player roster.

pub mod facility;
pub mod players;

pub use facility::create_facility;
pub use players::{spawn_players, SpawnSummary};
