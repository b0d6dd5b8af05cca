//! ECS Components
//!
//! Player-side and stalker-side component types, plus the facility room
//! registry.

pub mod facility;
pub mod player;
pub mod stalker;

pub use facility::{Room, RoomRegistry};
pub use player::{AimDirection, Health, LightSource, MovementState, PlayerProfile, Position, Role};
pub use stalker::{
    LightExposure, Lifetime, MovementTier, RoomLightCache, Stalker, StalkerAudio, StalkerBody,
    StalkerPhase, ROOM_POLL_SECONDS, SETTLE_SECONDS,
};
