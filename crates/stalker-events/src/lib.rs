//! Shared vocabulary and event types for the SCP-575 simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod event;
pub mod facility;
pub mod logger;

// Re-export event types
pub use event::{generate_event_id, DespawnReason, Event, EventKind, EventType};

// Re-export facility vocabulary
pub use facility::{FacilityZone, RoomName};

// Re-export logger types
pub use logger::{EventLogger, LoggerError};
