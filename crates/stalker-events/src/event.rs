//! Event Types
//!
//! Everything observable the simulation does is recorded as an [`Event`] on
//! an append-only stream: announcements, blackout boundaries, stalker
//! lifecycle, kills, and the messages players would see in game.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::facility::{FacilityZone, RoomName};

/// Generates a unique event id.
pub fn generate_event_id() -> String {
    format!("evt_{}", Uuid::new_v4().simple())
}

/// Coarse event categories, useful for filtering the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Announcement,
    Blackout,
    Stalker,
    Kill,
    Message,
    Audio,
}

/// Why a stalker instance was destroyed.
///
/// Every reason is terminal; there is no way back from any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DespawnReason {
    /// The stalker reached its victim and killed them.
    Killed,
    /// The victim escaped beyond the maximum chase distance.
    Escaped,
    /// The victim's flashlight accumulated enough light points.
    Exposed,
    /// The stalker's current room had its lights on.
    Illuminated,
    /// The victim died to something else before the stalker arrived.
    VictimDead,
    /// The configured lifetime elapsed.
    Expired,
    /// The round ended and all instances were force-destroyed.
    RoundEnded,
}

/// Event payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EventKind {
    /// Facility-wide audio announcement before a blackout.
    Announcement { message: String },
    /// Lights went out in the listed zones.
    BlackoutStarted {
        zones: Vec<FacilityZone>,
        duration_seconds: f32,
    },
    /// Lighting restored everywhere.
    BlackoutEnded,
    /// A stalker instance was created to hunt a victim.
    StalkerSpawned {
        nickname: String,
        victim_id: u32,
        room: RoomName,
    },
    /// A stalker instance was destroyed.
    StalkerDespawned { reason: DespawnReason },
    /// The victim got close enough to read the stalker's nickname.
    StalkerSighted { player_id: u32, nickname: String },
    /// A stalker began playing its chosen audio track.
    AudioTrackStarted {
        track: String,
        volume: f32,
        looped: bool,
    },
    /// The track stopped with its stalker.
    AudioTrackStopped { track: String },
    /// The stalker killed its victim.
    VictimKilled { victim_id: u32, kill_feed: String },
    /// A broadcast shown to one player.
    Broadcast {
        player_id: u32,
        message: String,
        duration_seconds: u16,
    },
    /// A short on-screen hint shown to one player.
    Hint { player_id: u32, message: String },
}

impl EventKind {
    /// The coarse category of this payload.
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Announcement { .. } => EventType::Announcement,
            EventKind::BlackoutStarted { .. } | EventKind::BlackoutEnded => EventType::Blackout,
            EventKind::StalkerSpawned { .. }
            | EventKind::StalkerDespawned { .. }
            | EventKind::StalkerSighted { .. } => EventType::Stalker,
            EventKind::VictimKilled { .. } => EventType::Kill,
            EventKind::Broadcast { .. } | EventKind::Hint { .. } => EventType::Message,
            EventKind::AudioTrackStarted { .. } | EventKind::AudioTrackStopped { .. } => {
                EventType::Audio
            }
        }
    }
}

/// A single entry in the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event id.
    pub event_id: String,
    /// Simulation tick at which the event occurred.
    pub tick: u64,
    /// Payload.
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    /// Creates a new event at the given tick with a fresh id.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self {
            event_id: generate_event_id(),
            tick,
            kind,
        }
    }

    /// The coarse category of this event.
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_unique() {
        let a = generate_event_id();
        let b = generate_event_id();
        assert_ne!(a, b);
        assert!(a.starts_with("evt_"));
    }

    #[test]
    fn test_event_type_mapping() {
        let kill = EventKind::VictimKilled {
            victim_id: 4,
            kill_feed: "Devoured by SCP-575".into(),
        };
        assert_eq!(kill.event_type(), EventType::Kill);

        let despawn = EventKind::StalkerDespawned {
            reason: DespawnReason::Exposed,
        };
        assert_eq!(despawn.event_type(), EventType::Stalker);

        let sighted = EventKind::StalkerSighted {
            player_id: 4,
            nickname: "SCP-575-B".into(),
        };
        assert_eq!(sighted.event_type(), EventType::Stalker);

        let audio = EventKind::AudioTrackStarted {
            track: "audio/scp575/howl.ogg".into(),
            volume: 85.0,
            looped: false,
        };
        assert_eq!(audio.event_type(), EventType::Audio);
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = Event::new(
            120,
            EventKind::BlackoutStarted {
                zones: vec![FacilityZone::LightContainment, FacilityZone::Entrance],
                duration_seconds: 45.5,
            },
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""kind":"blackout_started""#));

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_despawn_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&DespawnReason::RoundEnded).unwrap(),
            r#""round_ended""#
        );
        assert_eq!(
            serde_json::to_string(&DespawnReason::Illuminated).unwrap(),
            r#""illuminated""#
        );
    }
}
