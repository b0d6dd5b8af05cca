//! Player roster.
//!
//! Spawns a round's worth of players into randomly chosen rooms: mostly
//! human classes carrying flashlights, a few SCPs, all drawn from the seeded
//! simulation RNG so the roster is reproducible.

use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::{
    AimDirection, Health, LightSource, MovementState, PlayerProfile, Position, Role, RoomRegistry,
};

const HUMAN_ROLES: &[Role] = &[
    Role::ClassD,
    Role::Scientist,
    Role::FacilityGuard,
    Role::MtfOperative,
    Role::ChaosInsurgent,
];

/// What `spawn_players` produced.
#[derive(Debug, Clone)]
pub struct SpawnSummary {
    pub total: usize,
    pub humans: usize,
    pub scps: usize,
}

/// Spawns `count` players distributed over the facility. Roughly one in
/// eight is an SCP; every human carries a flashlight, switched on about a
/// third of the time.
pub fn spawn_players(
    world: &mut World,
    rooms: &RoomRegistry,
    rng: &mut SmallRng,
    count: usize,
) -> SpawnSummary {
    let room_positions: Vec<Vec3> = rooms.rooms().map(|r| r.position).collect();
    let mut humans = 0;
    let mut scps = 0;

    for id in 0..count {
        let role = if id % 8 == 7 {
            scps += 1;
            match rng.gen_range(0..3) {
                0 => Role::Scp049,
                1 => Role::Scp106,
                _ => Role::Scp173,
            }
        } else {
            humans += 1;
            HUMAN_ROLES[rng.gen_range(0..HUMAN_ROLES.len())]
        };

        let room = room_positions[rng.gen_range(0..room_positions.len())];
        let jitter = Vec3::new(rng.gen_range(-3.0..3.0), 0.0, rng.gen_range(-3.0..3.0));

        let mut entity = world.spawn((
            PlayerProfile {
                player_id: id as u32,
                nickname: format!("player-{}", id),
                role,
            },
            Health::new(100.0),
            Position(room + jitter),
            MovementState::default(),
            AimDirection(Vec3::Z),
        ));
        if !role.is_scp() {
            entity.insert(LightSource {
                emitting: rng.gen_bool(1.0 / 3.0),
            });
        }
    }

    SpawnSummary {
        total: count,
        humans,
        scps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use crate::setup::create_facility;

    #[test]
    fn test_roster_counts_add_up() {
        let mut world = World::new();
        let rooms = create_facility();
        let mut rng = SmallRng::seed_from_u64(42);

        let summary = spawn_players(&mut world, &rooms, &mut rng, 24);

        assert_eq!(summary.total, 24);
        assert_eq!(summary.humans + summary.scps, 24);
        assert_eq!(summary.scps, 3);

        let mut query = world.query::<&PlayerProfile>();
        assert_eq!(query.iter(&world).count(), 24);
    }

    #[test]
    fn test_same_seed_same_roster() {
        let rooms = create_facility();

        let roster = |seed: u64| {
            let mut world = World::new();
            let mut rng = SmallRng::seed_from_u64(seed);
            spawn_players(&mut world, &rooms, &mut rng, 16);
            let mut query = world.query::<(&PlayerProfile, &Position)>();
            query
                .iter(&world)
                .map(|(p, pos)| (p.player_id, p.role, pos.0.to_array()))
                .collect::<Vec<_>>()
        };

        assert_eq!(roster(7), roster(7));
    }

    #[test]
    fn test_scps_carry_no_flashlight() {
        let mut world = World::new();
        let rooms = create_facility();
        let mut rng = SmallRng::seed_from_u64(1);
        spawn_players(&mut world, &rooms, &mut rng, 32);

        let mut query = world.query::<(&PlayerProfile, Option<&LightSource>)>();
        for (profile, light) in query.iter(&world) {
            if profile.role.is_scp() {
                assert!(light.is_none());
            } else {
                assert!(light.is_some());
            }
        }
    }
}
