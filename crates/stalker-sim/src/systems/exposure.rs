//! Flashlight exposure.
//!
//! A victim aiming a lit flashlight through their stalker's body adds one
//! light point per tick. When the configured threshold is reached the
//! stalker is driven off and the victim gets the hint. Points never decay;
//! only despawning resets them.

use bevy_ecs::prelude::*;

use stalker_events::{DespawnReason, EventKind};

use crate::clock::SimClock;
use crate::components::{
    AimDirection, LightExposure, LightSource, PlayerProfile, Position, Stalker, StalkerBody,
    StalkerPhase,
};
use crate::config::Config;
use crate::events::{DespawnQueue, TickEvents};
use crate::los::ray_intersects_sphere;

pub fn accumulate_light_exposure(
    config: Res<Config>,
    clock: Res<SimClock>,
    mut queue: ResMut<DespawnQueue>,
    mut events: ResMut<TickEvents>,
    mut stalkers: Query<(
        Entity,
        &Stalker,
        &StalkerPhase,
        &Position,
        &StalkerBody,
        &mut LightExposure,
    )>,
    victims: Query<(&PlayerProfile, &Position, &AimDirection, &LightSource), Without<Stalker>>,
) {
    for (entity, stalker, phase, position, body, mut exposure) in stalkers.iter_mut() {
        if !phase.is_chasing() || queue.contains(entity) {
            continue;
        }

        let Ok((profile, victim_position, aim, light)) = victims.get(stalker.victim) else {
            continue;
        };
        if !light.emitting {
            continue;
        }
        if !ray_intersects_sphere(victim_position.0, aim.0, position.0, body.radius) {
            continue;
        }

        let total = exposure.record_hit();
        if total >= config.stalker.light_points {
            events.record(
                clock.tick,
                EventKind::Hint {
                    player_id: profile.player_id,
                    message: config.stalker.light_point_kill_message.clone(),
                },
            );
            queue.request(entity, DespawnReason::Exposed);
            tracing::info!(
                player_id = profile.player_id,
                total,
                "stalker driven off by flashlight"
            );
        }
    }
}
