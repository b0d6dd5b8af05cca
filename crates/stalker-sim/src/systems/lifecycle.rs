//! Stalker lifecycle: phase advancement, lifetime expiry, despawn
//! processing, and round teardown.

use bevy_ecs::prelude::*;

use stalker_events::{DespawnReason, EventKind};

use crate::clock::{SimClock, TICK_SECONDS};
use crate::components::{Lifetime, RoomRegistry, Stalker, StalkerAudio, StalkerPhase};
use crate::config::Config;
use crate::events::{DespawnQueue, TickEvents};
use crate::registry::StalkerRegistry;
use crate::systems::blackout::BlackoutControl;
use crate::SimRng;

/// Advances the inert phases. A stalker spends [`SETTLE_SECONDS`] settling
/// into the world, then the configured chase delay, then chases.
///
/// [`SETTLE_SECONDS`]: crate::components::SETTLE_SECONDS
pub fn advance_stalker_phase(config: Res<Config>, mut stalkers: Query<&mut StalkerPhase>) {
    for mut phase in stalkers.iter_mut() {
        match *phase {
            StalkerPhase::Spawning { remaining } => {
                let remaining = remaining - TICK_SECONDS;
                if remaining > 0.0 {
                    *phase = StalkerPhase::Spawning { remaining };
                } else if config.stalker.delay_on_chase {
                    *phase = StalkerPhase::DelayedChase {
                        remaining: config.stalker.delay_chase,
                    };
                } else {
                    *phase = StalkerPhase::Chasing;
                }
            }
            StalkerPhase::DelayedChase { remaining } => {
                let remaining = remaining - TICK_SECONDS;
                if remaining > 0.0 {
                    *phase = StalkerPhase::DelayedChase { remaining };
                } else {
                    *phase = StalkerPhase::Chasing;
                }
            }
            StalkerPhase::Chasing => {}
        }
    }
}

/// Counts down each stalker's lifetime and queues expiry despawns.
pub fn tick_lifetimes(
    mut queue: ResMut<DespawnQueue>,
    mut stalkers: Query<(Entity, &mut Lifetime), With<Stalker>>,
) {
    for (entity, mut lifetime) in stalkers.iter_mut() {
        lifetime.remaining -= TICK_SECONDS;
        if lifetime.remaining <= 0.0 {
            queue.request(entity, DespawnReason::Expired);
        }
    }
}

/// Drains the despawn queue: unregisters each stalker, records the despawn
/// event, and destroys the entity. Despawning the entity drops every timer
/// it owned.
///
/// When `end_blackout_when_disappearing` is set, any despawn other than
/// round teardown also ends the active blackout early.
pub fn process_despawns(world: &mut World) {
    let condemned = world.resource_mut::<DespawnQueue>().drain();
    if condemned.is_empty() {
        return;
    }

    let tick = world.resource::<SimClock>().tick;
    let end_blackout = world
        .resource::<Config>()
        .blackout
        .end_blackout_when_disappearing;

    for (entity, reason) in condemned {
        if let Some(victim) = world.resource_mut::<StalkerRegistry>().remove_stalker(entity) {
            tracing::info!(?reason, ?victim, "stalker despawned");
        }
        world
            .resource_mut::<TickEvents>()
            .record(tick, EventKind::StalkerDespawned { reason });
        // A playing track dies with its stalker.
        let stopped = world
            .get::<StalkerAudio>(entity)
            .map(|audio| audio.track.display().to_string());
        if let Some(track) = stopped {
            world
                .resource_mut::<TickEvents>()
                .record(tick, EventKind::AudioTrackStopped { track });
        }
        world.despawn(entity);

        if end_blackout && reason != DespawnReason::RoundEnded {
            end_active_blackout_early(world, tick);
        }
    }
}

fn end_active_blackout_early(world: &mut World, tick: u64) {
    let ended = world.resource_scope(|world, mut control: Mut<BlackoutControl>| {
        world.resource_scope(|_, mut rng: Mut<SimRng>| {
            control.scheduler.end_active_blackout(&mut rng.0).is_some()
        })
    });
    if ended {
        world.resource_mut::<RoomRegistry>().restore_all_lights();
        world
            .resource_mut::<TickEvents>()
            .record(tick, EventKind::BlackoutEnded);
        tracing::info!("blackout ended early with its stalker");
    }
}

/// Round teardown: stops the blackout cycle, force-destroys every active
/// stalker, and restores facility lighting.
pub fn end_round(world: &mut World) {
    world
        .resource_mut::<BlackoutControl>()
        .scheduler
        .stop();

    let stalkers = world.resource::<StalkerRegistry>().stalkers();
    for stalker in stalkers {
        world
            .resource_mut::<DespawnQueue>()
            .request(stalker, DespawnReason::RoundEnded);
    }
    process_despawns(world);
    world.resource_mut::<StalkerRegistry>().clear();

    if world.resource::<RoomRegistry>().any_dark() {
        let tick = world.resource::<SimClock>().tick;
        world.resource_mut::<RoomRegistry>().restore_all_lights();
        world
            .resource_mut::<TickEvents>()
            .record(tick, EventKind::BlackoutEnded);
    }
}
