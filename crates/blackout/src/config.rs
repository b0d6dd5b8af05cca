//! Configuration for the blackout scheduler.
//!
//! All timing bounds and the zone/room policy live here. Defaults match the
//! tuning the plugin shipped with; a config file only needs to name the
//! values it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use stalker_events::{FacilityZone, RoomName};

/// The pre-blackout facility announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementConfig {
    /// The message to be reproduced.
    pub message: String,
    /// Whether the announcement system holds the message before playing it.
    pub is_held: bool,
    /// Whether background noise plays during the message.
    pub is_noisy: bool,
    /// Whether subtitles are displayed.
    pub is_subtitle: bool,
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            message: "facility power system failure in 3 . pitch_.80 2 . pitch_.60 1 . \
                      pitch_.49 . .g1 pitch_.42  .g2 pitch_.31  .g5"
                .to_string(),
            is_held: false,
            is_noisy: true,
            is_subtitle: false,
        }
    }
}

/// All blackout-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackoutConfig {
    /// Facility zones where a blackout can occur.
    pub active_zones: Vec<FacilityZone>,
    /// Seconds before the first blackout cycle begins.
    pub initial_delay: f32,
    /// When true, `initial_delay` is ignored and the delay is rolled in
    /// `[initial_min_delay, initial_max_delay)`.
    pub random_initial_delay: bool,
    /// Lower bound for the randomized initial delay.
    pub initial_min_delay: f32,
    /// Upper bound for the randomized initial delay.
    pub initial_max_delay: f32,
    /// Minimum duration of a blackout, in seconds.
    pub min_duration: f32,
    /// Maximum duration of a blackout, in seconds.
    pub max_duration: f32,
    /// Minimum delay after a blackout before the next cycle, in seconds.
    pub min_cooldown: u32,
    /// Maximum delay after a blackout before the next cycle, in seconds.
    pub max_cooldown: u32,
    /// When the stalker disappears before the blackout duration elapses,
    /// should the blackout end with it?
    pub end_blackout_when_disappearing: bool,
    /// The announcement played before lights go out.
    pub announcement: AnnouncementConfig,
    /// Seconds between the announcement and the lights actually going out,
    /// tuned so the lights cut just as the announcement ends.
    pub announcement_lead_time: f32,
    /// Rooms whose lights never turn off. A stalker standing in one of these
    /// despawns on the next illumination poll.
    pub blacklist_rooms: Vec<RoomName>,
}

impl Default for BlackoutConfig {
    fn default() -> Self {
        Self {
            active_zones: vec![
                FacilityZone::LightContainment,
                FacilityZone::HeavyContainment,
                FacilityZone::Entrance,
            ],
            initial_delay: 300.0,
            random_initial_delay: false,
            initial_min_delay: 190.0,
            initial_max_delay: 250.0,
            min_duration: 30.0,
            max_duration: 90.0,
            min_cooldown: 180,
            max_cooldown: 400,
            end_blackout_when_disappearing: false,
            announcement: AnnouncementConfig::default(),
            announcement_lead_time: 8.5,
            blacklist_rooms: vec![
                RoomName::Lcz914,
                RoomName::LczArmory,
                RoomName::LczCheckpointA,
                RoomName::LczCheckpointB,
                RoomName::HczArmory,
                RoomName::HczCheckpointA,
                RoomName::HczCheckpointB,
                RoomName::EzGateA,
                RoomName::EzGateB,
            ],
        }
    }
}

impl BlackoutConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Whether lights in `room` stay on during a blackout.
    pub fn is_room_blacklisted(&self, room: RoomName) -> bool {
        self.blacklist_rooms.contains(&room)
    }

    /// Whether `zone` participates in blackouts at all.
    pub fn is_zone_active(&self, zone: FacilityZone) -> bool {
        self.active_zones.contains(&zone)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
