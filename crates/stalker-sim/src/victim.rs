//! Victim selection.
//!
//! When a blackout begins, one eligible player is picked uniformly at random
//! to be hunted. Eligibility excludes SCPs, tutorial players, the dead,
//! players in blacklisted rooms or inactive zones, and anyone already hunted.

use bevy_ecs::prelude::*;
use rand::Rng;

use blackout::BlackoutConfig;

use crate::components::{Health, PlayerProfile, Position, Role, RoomRegistry};
use crate::registry::StalkerRegistry;

/// Collects every player currently eligible to be hunted, sorted by player
/// id so the uniform pick is reproducible.
pub fn collect_candidates(
    world: &mut World,
    rooms: &RoomRegistry,
    config: &BlackoutConfig,
    registry: &StalkerRegistry,
) -> Vec<Entity> {
    let mut candidates: Vec<(u32, Entity)> = Vec::new();

    let mut query = world.query::<(Entity, &PlayerProfile, &Health, &Position)>();
    for (entity, profile, health, position) in query.iter(world) {
        if !health.is_alive() {
            continue;
        }
        if profile.role.is_scp() || profile.role == Role::Tutorial {
            continue;
        }
        if registry.is_hunted(entity) {
            continue;
        }
        let Some(room_name) = rooms.room_at(position.0) else {
            continue;
        };
        if config.is_room_blacklisted(room_name) {
            continue;
        }
        let Some(room) = rooms.get(room_name) else {
            continue;
        };
        if !config.is_zone_active(room.zone) {
            continue;
        }
        candidates.push((profile.player_id, entity));
    }

    candidates.sort_by_key(|(id, _)| *id);
    candidates.into_iter().map(|(_, entity)| entity).collect()
}

/// Picks one candidate uniformly at random.
pub fn choose(candidates: &[Entity], rng: &mut impl Rng) -> Option<Entity> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::Vec3;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use stalker_events::RoomName;

    use crate::components::Room;

    fn test_rooms() -> RoomRegistry {
        let mut rooms = RoomRegistry::new();
        rooms.register(Room::new(RoomName::LczCrossing, Vec3::ZERO));
        rooms.register(Room::new(RoomName::Surface, Vec3::new(0.0, 0.0, 500.0)));
        rooms
    }

    fn spawn_player(world: &mut World, id: u32, role: Role, position: Vec3) -> Entity {
        world
            .spawn((
                PlayerProfile {
                    player_id: id,
                    nickname: format!("player-{}", id),
                    role,
                },
                Health::new(100.0),
                Position(position),
            ))
            .id()
    }

    #[test]
    fn test_scps_and_tutorials_excluded() {
        let mut world = World::new();
        let rooms = test_rooms();
        let registry = StalkerRegistry::default();
        let config = BlackoutConfig::default();

        let eligible = spawn_player(&mut world, 1, Role::ClassD, Vec3::ZERO);
        spawn_player(&mut world, 2, Role::Scp173, Vec3::ZERO);
        spawn_player(&mut world, 3, Role::Tutorial, Vec3::ZERO);

        let candidates = collect_candidates(&mut world, &rooms, &config, &registry);
        assert_eq!(candidates, vec![eligible]);
    }

    #[test]
    fn test_dead_and_hunted_excluded() {
        let mut world = World::new();
        let rooms = test_rooms();
        let config = BlackoutConfig::default();

        let dead = spawn_player(&mut world, 1, Role::Scientist, Vec3::ZERO);
        world.get_mut::<Health>(dead).unwrap().kill();

        let hunted = spawn_player(&mut world, 2, Role::ClassD, Vec3::ZERO);
        let stalker = world.spawn_empty().id();
        let mut registry = StalkerRegistry::default();
        registry.register(hunted, stalker).unwrap();

        let candidates = collect_candidates(&mut world, &rooms, &config, &registry);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_blacklisted_room_excluded() {
        let mut world = World::new();
        let mut rooms = test_rooms();
        rooms.register(Room::new(RoomName::Lcz914, Vec3::new(100.0, 0.0, 0.0)));
        let registry = StalkerRegistry::default();
        // 914 is on the default blacklist.
        let config = BlackoutConfig::default();

        spawn_player(&mut world, 1, Role::ClassD, Vec3::new(100.0, 0.0, 0.0));

        let candidates = collect_candidates(&mut world, &rooms, &config, &registry);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_inactive_zone_excluded() {
        let mut world = World::new();
        let rooms = test_rooms();
        let registry = StalkerRegistry::default();
        // Default active zones do not include the surface.
        let config = BlackoutConfig::default();

        spawn_player(&mut world, 1, Role::ClassD, Vec3::new(0.0, 0.0, 500.0));

        let candidates = collect_candidates(&mut world, &rooms, &config, &registry);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(choose(&[], &mut rng), None);
    }

    #[test]
    fn test_choose_is_uniform_over_candidates() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let candidates = vec![a, b];

        let mut rng = SmallRng::seed_from_u64(5);
        let mut saw_a = false;
        let mut saw_b = false;
        for _ in 0..100 {
            match choose(&candidates, &mut rng) {
                Some(e) if e == a => saw_a = true,
                Some(e) if e == b => saw_b = true,
                other => panic!("unexpected pick: {:?}", other),
            }
        }
        assert!(saw_a && saw_b);
    }
}
