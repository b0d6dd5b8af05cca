//! Room-illumination poll.
//!
//! Every five seconds each stalker resolves its current room and caches
//! whether that room's lights are on; the cached flag is then honored every
//! tick. A stalker standing in a lit room despawns, as does one whose victim
//! died to something else.

use bevy_ecs::prelude::*;

use stalker_events::DespawnReason;

use crate::clock::TICK_SECONDS;
use crate::components::{Health, Position, RoomLightCache, RoomRegistry, Stalker, ROOM_POLL_SECONDS};
use crate::events::DespawnQueue;

pub fn poll_room_light(
    rooms: Res<RoomRegistry>,
    mut queue: ResMut<DespawnQueue>,
    mut stalkers: Query<(Entity, &Stalker, &Position, &mut RoomLightCache)>,
    victims: Query<&Health, Without<Stalker>>,
) {
    for (entity, stalker, position, mut cache) in stalkers.iter_mut() {
        if queue.contains(entity) {
            continue;
        }

        cache.poll_timer -= TICK_SECONDS;
        if cache.poll_timer <= 0.0 {
            cache.poll_timer = ROOM_POLL_SECONDS;

            let victim_alive = victims
                .get(stalker.victim)
                .map(|health| health.is_alive())
                .unwrap_or(false);
            if !victim_alive {
                queue.request(entity, DespawnReason::VictimDead);
                continue;
            }

            cache.illuminated = match rooms.room_at(position.0) {
                Some(room) => rooms.is_illuminated(room),
                None => true,
            };
        }

        if cache.illuminated {
            queue.request(entity, DespawnReason::Illuminated);
        }
    }
}
