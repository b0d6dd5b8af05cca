//! Chase movement and the kill.
//!
//! Each chasing stalker evaluates its distance to the victim once per tick
//! and resolves exactly one branch, checked farthest first: escape at or
//! beyond `max_distance`, fast movement at or beyond `medium_distance`,
//! normal movement above `min_distance`, and the kill at or below
//! `kill_distance`.

use bevy_ecs::prelude::*;

use stalker_events::{DespawnReason, EventKind};

use crate::clock::{SimClock, TICK_SECONDS};
use crate::components::{
    Health, MovementState, MovementTier, PlayerProfile, Position, Stalker, StalkerPhase,
};
use crate::config::Config;
use crate::events::{DespawnQueue, TickEvents};

pub fn chase_tick(
    config: Res<Config>,
    clock: Res<SimClock>,
    mut queue: ResMut<DespawnQueue>,
    mut events: ResMut<TickEvents>,
    mut stalkers: Query<(Entity, &mut Stalker, &StalkerPhase, &mut Position, &mut MovementTier)>,
    mut victims: Query<
        (&PlayerProfile, &Position, &MovementState, &mut Health),
        Without<Stalker>,
    >,
) {
    let tuning = &config.stalker;

    for (entity, mut stalker, phase, mut position, mut tier) in stalkers.iter_mut() {
        if !phase.is_chasing() || queue.contains(entity) {
            continue;
        }

        let Ok((profile, victim_position, movement, mut health)) =
            victims.get_mut(stalker.victim)
        else {
            queue.request(entity, DespawnReason::VictimDead);
            *tier = MovementTier::Idle;
            continue;
        };
        if !health.is_alive() {
            queue.request(entity, DespawnReason::VictimDead);
            *tier = MovementTier::Idle;
            continue;
        }

        let delta = victim_position.0 - position.0;
        let distance = delta.length();

        // The nickname becomes readable the first time the victim is within
        // view range.
        if !stalker.sighted && distance <= tuning.view_range as f32 {
            stalker.sighted = true;
            events.record(
                clock.tick,
                EventKind::StalkerSighted {
                    player_id: profile.player_id,
                    nickname: tuning.nickname.clone(),
                },
            );
        }

        if distance >= tuning.max_distance {
            tracing::debug!(distance, "victim escaped");
            queue.request(entity, DespawnReason::Escaped);
            *tier = MovementTier::Idle;
        } else if distance >= tuning.medium_distance {
            let (speed, new_tier) =
                if tuning.change_movement_speed_if_run && movement.is_sprinting() {
                    (tuning.movement_speed_running, MovementTier::Running)
                } else {
                    (tuning.movement_speed_fast, MovementTier::Fast)
                };
            step_towards(&mut position, delta, speed, tuning.weird_movement);
            *tier = new_tier;
        } else if distance > tuning.min_distance {
            step_towards(&mut position, delta, tuning.movement_speed, tuning.weird_movement);
            *tier = MovementTier::Normal;
        } else if distance <= tuning.kill_distance {
            health.kill();
            tracing::info!(victim_id = profile.player_id, "stalker reached its victim");
            events.record(
                clock.tick,
                EventKind::VictimKilled {
                    victim_id: profile.player_id,
                    kill_feed: tuning.kill_feed.clone(),
                },
            );
            if tuning.broadcast_duration > 0 {
                events.record(
                    clock.tick,
                    EventKind::Broadcast {
                        player_id: profile.player_id,
                        message: tuning.broadcast_kill.clone(),
                        duration_seconds: tuning.broadcast_duration,
                    },
                );
            }
            queue.request(entity, DespawnReason::Killed);
            *tier = MovementTier::Idle;
        } else {
            // Dead band between kill and min distance; hold position.
            *tier = MovementTier::Idle;
        }
    }
}

/// Moves one tick's worth of distance towards the victim. The vertical
/// component is flattened unless the weird-movement switch is on.
fn step_towards(position: &mut Position, delta: bevy_math::Vec3, speed: f32, weird: bool) {
    let mut dir = delta;
    if !weird {
        dir.y = 0.0;
    }
    let dir = dir.normalize_or_zero();
    position.0 += dir * speed * TICK_SECONDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::Vec3;

    use crate::components::Role;

    fn test_world() -> World {
        let mut world = World::new();
        world.insert_resource(Config::default());
        world.insert_resource(SimClock::default());
        world.insert_resource(DespawnQueue::default());
        world.insert_resource(TickEvents::default());
        world
    }

    fn spawn_victim(world: &mut World, position: Vec3, movement: MovementState) -> Entity {
        world
            .spawn((
                PlayerProfile {
                    player_id: 2,
                    nickname: "victim".into(),
                    role: Role::ClassD,
                },
                Position(position),
                movement,
                Health::new(100.0),
            ))
            .id()
    }

    fn spawn_stalker_at(world: &mut World, victim: Entity, position: Vec3) -> Entity {
        world
            .spawn((
                Stalker {
                    victim,
                    spawned_tick: 0,
                    sighted: false,
                },
                StalkerPhase::Chasing,
                Position(position),
                MovementTier::default(),
            ))
            .id()
    }

    fn run_once(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(chase_tick);
        schedule.run(world);
    }

    #[test]
    fn test_escape_at_max_distance_boundary() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(28.0, 0.0, 0.0), MovementState::Standing);
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        let drained = world.resource_mut::<DespawnQueue>().drain();
        assert_eq!(drained, vec![(stalker, DespawnReason::Escaped)]);
        // An escaped stalker does not move.
        assert_eq!(world.get::<Position>(stalker).unwrap().0, Vec3::ZERO);
    }

    #[test]
    fn test_fast_tier_at_twenty_meters() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(20.0, 0.0, 0.0), MovementState::Standing);
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        assert_eq!(
            world.get::<MovementTier>(stalker),
            Some(&MovementTier::Fast)
        );
        // 29 m/s over one 0.1 s tick.
        let moved = world.get::<Position>(stalker).unwrap().0.x;
        assert!((moved - 2.9).abs() < 1e-4);
    }

    #[test]
    fn test_fast_tier_at_medium_boundary() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(16.0, 0.0, 0.0), MovementState::Standing);
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        assert_eq!(
            world.get::<MovementTier>(stalker),
            Some(&MovementTier::Fast)
        );
    }

    #[test]
    fn test_running_tier_against_sprinter_when_enabled() {
        let mut world = test_world();
        world
            .resource_mut::<Config>()
            .stalker
            .change_movement_speed_if_run = true;
        let victim = spawn_victim(
            &mut world,
            Vec3::new(20.0, 0.0, 0.0),
            MovementState::Sprinting,
        );
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        assert_eq!(
            world.get::<MovementTier>(stalker),
            Some(&MovementTier::Running)
        );
        let moved = world.get::<Position>(stalker).unwrap().0.x;
        assert!((moved - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_normal_tier_inside_medium_range() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(8.0, 0.0, 0.0), MovementState::Standing);
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        assert_eq!(
            world.get::<MovementTier>(stalker),
            Some(&MovementTier::Normal)
        );
        let moved = world.get::<Position>(stalker).unwrap().0.x;
        assert!((moved - 2.2).abs() < 1e-4);
    }

    #[test]
    fn test_kill_at_kill_distance_happens_once() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(0.5, 0.0, 0.0), MovementState::Standing);
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);
        // The stalker is queued after the kill; a second tick must not kill
        // again or record more events.
        run_once(&mut world);

        assert!(!world.get::<Health>(victim).unwrap().is_alive());
        let drained = world.resource_mut::<DespawnQueue>().drain();
        assert_eq!(drained, vec![(stalker, DespawnReason::Killed)]);

        let events = world.resource_mut::<TickEvents>().drain();
        let kills = events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::VictimKilled { .. }))
            .count();
        assert_eq!(kills, 1);
        assert!(events
            .iter()
            .any(|e| matches!(e.kind, EventKind::Broadcast { player_id: 2, .. })));
    }

    #[test]
    fn test_nickname_sighting_recorded_once() {
        let mut world = test_world();
        // Inside the default view range of 12, outside kill range.
        let victim = spawn_victim(&mut world, Vec3::new(8.0, 0.0, 0.0), MovementState::Standing);
        spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);
        run_once(&mut world);

        let events = world.resource_mut::<TickEvents>().drain();
        let sightings: Vec<_> = events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::StalkerSighted { .. }))
            .collect();
        assert_eq!(sightings.len(), 1);
        assert!(matches!(
            &sightings[0].kind,
            EventKind::StalkerSighted { player_id: 2, nickname } if nickname.as_str() == "SCP-575-B"
        ));
    }

    #[test]
    fn test_no_sighting_beyond_view_range() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(20.0, 0.0, 0.0), MovementState::Standing);
        spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        let events = world.resource_mut::<TickEvents>().drain();
        assert!(!events
            .iter()
            .any(|e| matches!(e.kind, EventKind::StalkerSighted { .. })));
    }

    #[test]
    fn test_movement_stays_on_the_floor_by_default() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(6.0, 5.0, 0.0), MovementState::Standing);
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        let position = world.get::<Position>(stalker).unwrap().0;
        assert_eq!(position.y, 0.0);
        assert!(position.x > 0.0);
    }

    #[test]
    fn test_weird_movement_climbs() {
        let mut world = test_world();
        world.resource_mut::<Config>().stalker.weird_movement = true;
        let victim = spawn_victim(&mut world, Vec3::new(6.0, 5.0, 0.0), MovementState::Standing);
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        assert!(world.get::<Position>(stalker).unwrap().0.y > 0.0);
    }

    #[test]
    fn test_dead_victim_stops_the_chase() {
        let mut world = test_world();
        let victim = spawn_victim(&mut world, Vec3::new(8.0, 0.0, 0.0), MovementState::Standing);
        world.get_mut::<Health>(victim).unwrap().kill();
        let stalker = spawn_stalker_at(&mut world, victim, Vec3::ZERO);

        run_once(&mut world);

        let drained = world.resource_mut::<DespawnQueue>().drain();
        assert_eq!(drained, vec![(stalker, DespawnReason::VictimDead)]);
    }
}
