//! The blackout cycle.
//!
//! An exclusive system advances the scheduler once per tick and applies
//! whatever it commands: the pre-blackout announcement, cutting lights in
//! the active zones and spawning a stalker, and restoring lights when the
//! rolled duration runs out.

use bevy_ecs::prelude::*;

use blackout::{BlackoutScheduler, SchedulerCommand};
use stalker_events::{EventKind, FacilityZone};

use crate::clock::{SimClock, TICK_SECONDS};
use crate::components::{Health, PlayerProfile, Position, Role, RoomRegistry};
use crate::config::Config;
use crate::events::TickEvents;
use crate::registry::StalkerRegistry;
use crate::spawn::spawn_stalker;
use crate::victim;
use crate::SimRng;

/// The round's blackout scheduler, owned by the world.
#[derive(Resource, Debug)]
pub struct BlackoutControl {
    pub scheduler: BlackoutScheduler,
}

pub fn run_blackout_cycle(world: &mut World) {
    world.resource_scope(|world, mut control: Mut<BlackoutControl>| {
        let commands = world.resource_scope(|_, mut rng: Mut<SimRng>| {
            control.scheduler.advance(TICK_SECONDS, &mut rng.0)
        });
        for command in commands {
            apply_command(world, command);
        }
    });
}

fn apply_command(world: &mut World, command: SchedulerCommand) {
    let tick = world.resource::<SimClock>().tick;
    match command {
        SchedulerCommand::Announce { message, .. } => {
            tracing::info!("blackout announcement playing");
            world
                .resource_mut::<TickEvents>()
                .record(tick, EventKind::Announcement { message });
        }
        SchedulerCommand::BeginBlackout { duration_seconds } => {
            begin_blackout(world, tick, duration_seconds);
        }
        SchedulerCommand::EndBlackout => {
            world.resource_mut::<RoomRegistry>().restore_all_lights();
            world
                .resource_mut::<TickEvents>()
                .record(tick, EventKind::BlackoutEnded);
            tracing::info!("blackout ended, lights restored");
        }
    }
}

fn begin_blackout(world: &mut World, tick: u64, duration_seconds: f32) {
    let config = world.resource::<Config>().clone();

    let mut zones: Vec<FacilityZone> = config.blackout.active_zones.clone();
    if config.disable_for_scp173 {
        let protected = zones_with_scp173(world);
        zones.retain(|zone| !protected.contains(zone));
    }
    if zones.is_empty() {
        tracing::info!("no zone eligible for a blackout this cycle");
        return;
    }

    {
        let mut rooms = world.resource_mut::<RoomRegistry>();
        for zone in &zones {
            rooms.blackout_zone(*zone, &config.blackout.blacklist_rooms);
        }
    }
    world.resource_mut::<TickEvents>().record(
        tick,
        EventKind::BlackoutStarted {
            zones: zones.clone(),
            duration_seconds,
        },
    );
    let zone_list = zones
        .iter()
        .map(|zone| zone.label())
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(zones = %zone_list, duration_seconds, "blackout started");

    let rooms = world.resource::<RoomRegistry>().clone();
    let registry = world.resource::<StalkerRegistry>().clone();
    let candidates = victim::collect_candidates(world, &rooms, &config.blackout, &registry);
    let chosen = world.resource_scope(|_, mut rng: Mut<SimRng>| {
        victim::choose(&candidates, &mut rng.0)
    });

    match chosen {
        Some(target) => {
            if let Err(e) = spawn_stalker(world, target, duration_seconds, &config) {
                tracing::warn!("stalker spawn failed: {}", e);
            }
        }
        None => tracing::info!("no eligible victim for this blackout"),
    }
}

/// Zones currently occupied by a living SCP-173.
fn zones_with_scp173(world: &mut World) -> Vec<FacilityZone> {
    let rooms = world.resource::<RoomRegistry>().clone();
    let mut zones = Vec::new();

    let mut query = world.query::<(&PlayerProfile, &Health, &Position)>();
    for (profile, health, position) in query.iter(world) {
        if profile.role != Role::Scp173 || !health.is_alive() {
            continue;
        }
        if let Some(room_name) = rooms.room_at(position.0) {
            if let Some(room) = rooms.get(room_name) {
                if !zones.contains(&room.zone) {
                    zones.push(room.zone);
                }
            }
        }
    }
    zones
}
