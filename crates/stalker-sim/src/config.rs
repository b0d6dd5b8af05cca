//! Configuration System
//!
//! One immutable [`Config`] is loaded at startup and treated as read-only
//! for the rest of the round. Defaults carry the tuning the plugin shipped
//! with; a config file only needs to name the values it changes.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::Role;
use blackout::BlackoutConfig;

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "scp575.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// When false the simulation loads nothing and spawns nothing.
    pub enabled: bool,
    /// Enables debug-level logging throughout the stalker code paths.
    pub debug: bool,
    /// Folder scanned for the stalker's audio tracks.
    pub audio_path: PathBuf,
    /// Per-round probability (0-100) that the blackout cycle runs at all.
    pub spawn_chance: u32,
    /// When true, zones containing an SCP-173 keep their lights on.
    pub disable_for_scp173: bool,
    /// All blackout-related configuration.
    pub blackout: BlackoutConfig,
    /// All configuration related to the stalker itself.
    pub stalker: StalkerConfig,
    /// User-facing responses of the admin command.
    pub command_responses: CommandResponses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            audio_path: PathBuf::from("audio/scp575"),
            spawn_chance: 40,
            disable_for_scp173: false,
            blackout: BlackoutConfig::default(),
            stalker: StalkerConfig::default(),
            command_responses: CommandResponses::default(),
        }
    }
}

/// All configuration related to the stalker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StalkerConfig {
    /// The name shown to nearby players.
    pub nickname: String,
    /// Distance at which players can read the nickname. Game default is 10.
    pub view_range: u32,
    /// The role the stalker's body presents as.
    pub role: Role,
    /// Death message shown when the stalker kills a player.
    pub kill_feed: String,
    /// Broadcast sent to the victim on death.
    pub broadcast_kill: String,
    /// Broadcast duration in seconds; 0 disables the broadcast.
    pub broadcast_duration: u16,
    /// Whether the stalker plays audio tracks from `audio_path`.
    pub play_sounds: bool,
    /// Whether the chosen track loops until the stalker despawns.
    pub audio_is_looped: bool,
    /// Playback volume of the chosen track.
    pub sound_volume: f32,
    /// Whether a freshly spawned stalker waits before it can move or kill.
    pub delay_on_chase: bool,
    /// Seconds the stalker stays inert when `delay_on_chase` is set.
    pub delay_chase: f32,
    /// Beyond this distance the victim has escaped. Keep it above
    /// `medium_distance`.
    pub max_distance: f32,
    /// At or beyond this distance the fast movement tier applies.
    pub medium_distance: f32,
    /// Above this distance the normal movement tier applies. Adjust together
    /// with `kill_distance`.
    pub min_distance: f32,
    /// At or below this distance the victim dies.
    pub kill_distance: f32,
    /// Speed of the fast tier (distance >= `medium_distance`).
    pub movement_speed_fast: f32,
    /// Speed of the normal tier.
    pub movement_speed: f32,
    /// When true and the victim is sprinting in the fast-tier range, the
    /// stalker uses `movement_speed_running` instead.
    pub change_movement_speed_if_run: bool,
    /// Speed used against a sprinting victim when the toggle above is set.
    pub movement_speed_running: f32,
    /// Light points accumulated before the stalker is driven off. The check
    /// runs every simulation tick (0.1 s).
    pub light_points: u32,
    /// Hint shown to the player whose flashlight drove the stalker off.
    pub light_point_kill_message: String,
    /// Behavior switch: when set, the chase vector keeps its vertical
    /// component and the stalker drifts off the floor.
    pub weird_movement: bool,
}

impl Default for StalkerConfig {
    fn default() -> Self {
        Self {
            nickname: "SCP-575-B".to_string(),
            view_range: 12,
            role: Role::Scp106,
            kill_feed: "Devoured by SCP-575".to_string(),
            broadcast_kill: "You were eaten by SCP-575, aim with a lit flashlight next time"
                .to_string(),
            broadcast_duration: 10,
            play_sounds: false,
            audio_is_looped: false,
            sound_volume: 85.0,
            delay_on_chase: true,
            delay_chase: 1.5,
            max_distance: 28.0,
            medium_distance: 16.0,
            min_distance: 0.8,
            kill_distance: 0.8,
            movement_speed_fast: 29.0,
            movement_speed: 22.0,
            change_movement_speed_if_run: false,
            movement_speed_running: 25.0,
            light_points: 85,
            light_point_kill_message: "SCP-575 disappears for now".to_string(),
            weird_movement: false,
        }
    }
}

/// User-facing response strings of the admin command. `{0}` and `{1}` are
/// positional placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandResponses {
    /// Response when the round has not started.
    pub round_has_not_started: String,
    /// Response for an invalid player id.
    pub invalid_player_id: String,
    /// Response when a player is not found.
    pub player_not_found: String,
    /// Response for an invalid duration.
    pub invalid_duration: String,
    /// Response when the target already has a stalker hunting them.
    pub already_hunted: String,
    /// Response when spawning a stalker for a specific duration.
    pub spawning: String,
    /// Help response for the command.
    pub help: String,
}

impl Default for CommandResponses {
    fn default() -> Self {
        Self {
            round_has_not_started: "You cannot use this command if the round has not started."
                .to_string(),
            invalid_player_id: "{0} is not a valid player id.".to_string(),
            player_not_found: "Player not found.".to_string(),
            invalid_duration: "{0} is not a valid duration.".to_string(),
            already_hunted: "{0} is already being hunted.".to_string(),
            spawning: "Spawning SCP-575 to hunt {0} for {1} seconds.".to_string(),
            help: "Correct use of the command: {0}\nPlayer ID | A numerical id that changes \
                   with each new round and each reconnect.\nDuration | The time (in seconds) \
                   that SCP-575 will hunt someone.\n\nNote that this command does not turn \
                   off the lights, so if SCP-575 stands in a lit room for more than 5 \
                   seconds, it will disappear."
                .to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }
}

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
