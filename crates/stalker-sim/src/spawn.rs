//! Stalker creation.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

use stalker_events::EventKind;

use crate::clock::SimClock;
use crate::components::{
    Health, LightExposure, Lifetime, MovementTier, PlayerProfile, Position, RoomLightCache,
    RoomRegistry, Stalker, StalkerAudio, StalkerBody, StalkerPhase, SETTLE_SECONDS,
};
use crate::config::Config;
use crate::events::TickEvents;
use crate::registry::{RegistryError, StalkerRegistry};
use crate::{audio, SimRng};

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("victim entity no longer exists")]
    VictimMissing,
    #[error("victim is already dead")]
    VictimDead,
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Creates a stalker hunting `victim` for `lifetime_seconds`.
///
/// The stalker materializes at the spawn point of the victim's current room
/// and starts in its settle phase; the chase delay, if configured, follows.
pub fn spawn_stalker(
    world: &mut World,
    victim: Entity,
    lifetime_seconds: f32,
    config: &Config,
) -> Result<Entity, SpawnError> {
    let profile = world
        .get::<PlayerProfile>(victim)
        .ok_or(SpawnError::VictimMissing)?;
    let victim_id = profile.player_id;

    let health = world.get::<Health>(victim).ok_or(SpawnError::VictimMissing)?;
    if !health.is_alive() {
        return Err(SpawnError::VictimDead);
    }

    let victim_position = world
        .get::<Position>(victim)
        .ok_or(SpawnError::VictimMissing)?
        .0;

    if world.resource::<StalkerRegistry>().is_hunted(victim) {
        return Err(RegistryError::AlreadyHunted.into());
    }

    let rooms = world.resource::<RoomRegistry>();
    let room_name = rooms.room_at(victim_position).ok_or(SpawnError::VictimMissing)?;
    let spawn_point = match rooms.get(room_name) {
        Some(room) => room.spawn_point(),
        None => return Err(SpawnError::VictimMissing),
    };

    let audio = if config.stalker.play_sounds {
        world.resource_scope(|_, mut rng: Mut<SimRng>| {
            pick_audio(config, &mut rng.0)
        })
    } else {
        None
    };

    let tick = world.resource::<SimClock>().tick;

    let mut entity = world.spawn((
        Stalker {
            victim,
            spawned_tick: tick,
            sighted: false,
        },
        StalkerPhase::Spawning {
            remaining: SETTLE_SECONDS,
        },
        Position(spawn_point),
        LightExposure::default(),
        Lifetime {
            remaining: lifetime_seconds,
        },
        RoomLightCache::default(),
        StalkerBody::default(),
        MovementTier::default(),
    ));
    let audio_event = audio.as_ref().map(|a| EventKind::AudioTrackStarted {
        track: a.track.display().to_string(),
        volume: a.volume,
        looped: a.looped,
    });
    if let Some(audio) = audio {
        entity.insert(audio);
    }
    let stalker = entity.id();

    world
        .resource_mut::<StalkerRegistry>()
        .register(victim, stalker)?;

    tracing::info!(
        victim_id,
        room = ?room_name,
        lifetime_seconds,
        "stalker spawned"
    );
    world.resource_mut::<TickEvents>().record(
        tick,
        EventKind::StalkerSpawned {
            nickname: config.stalker.nickname.clone(),
            victim_id,
            room: room_name,
        },
    );
    if let Some(kind) = audio_event {
        world.resource_mut::<TickEvents>().record(tick, kind);
    }

    Ok(stalker)
}

fn pick_audio(config: &Config, rng: &mut SmallRng) -> Option<StalkerAudio> {
    let track = audio::pick_audio_track(&config.audio_path, rng)?;
    Some(StalkerAudio {
        track,
        looped: config.stalker.audio_is_looped,
        volume: config.stalker.sound_volume,
    })
}
