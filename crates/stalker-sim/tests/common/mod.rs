//! Shared harness for integration tests: builds a full world the way the
//! binary does and runs the complete per-tick schedule.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use blackout::{BlackoutConfig, BlackoutScheduler};
use stalker_events::EventKind;
use stalker_sim::setup;
use stalker_sim::systems::{
    accumulate_light_exposure, advance_stalker_phase, chase_tick, poll_room_light,
    process_despawns, run_blackout_cycle, tick_lifetimes, BlackoutControl,
};
use stalker_sim::{
    Config, DespawnQueue, RoundState, SimClock, SimRng, StalkerRegistry, TickEvents,
};

/// A blackout cycle compressed enough to observe within a short test run.
pub fn quick_config() -> Config {
    let mut config = Config::default();
    config.blackout = BlackoutConfig {
        initial_delay: 1.0,
        announcement_lead_time: 0.5,
        min_duration: 20.0,
        max_duration: 30.0,
        min_cooldown: 10,
        max_cooldown: 20,
        ..BlackoutConfig::default()
    };
    config
}

pub struct Harness {
    pub world: World,
    schedule: Schedule,
    pub events: Vec<(u64, EventKind)>,
}

impl Harness {
    /// Builds a world with the full facility and a seeded roster, the
    /// blackout cycle armed.
    pub fn new(seed: u64, config: Config, players: usize) -> Self {
        let mut world = World::new();
        let mut rng = SmallRng::seed_from_u64(seed);

        let scheduler = BlackoutScheduler::new(config.blackout.clone(), &mut rng);
        let rooms = setup::create_facility();
        setup::spawn_players(&mut world, &rooms, &mut rng, players);

        world.insert_resource(config);
        world.insert_resource(rooms);
        world.insert_resource(SimRng(rng));
        world.insert_resource(SimClock::default());
        world.insert_resource(RoundState { started: true });
        world.insert_resource(StalkerRegistry::default());
        world.insert_resource(TickEvents::default());
        world.insert_resource(DespawnQueue::default());
        world.insert_resource(BlackoutControl { scheduler });

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                advance_stalker_phase,
                poll_room_light,
                accumulate_light_exposure,
                chase_tick,
                tick_lifetimes,
                process_despawns,
                run_blackout_cycle,
            )
                .chain(),
        );

        Self {
            world,
            schedule,
            events: Vec::new(),
        }
    }

    /// Runs `ticks` full schedule passes, collecting the event stream.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.world.resource_mut::<SimClock>().advance();
            self.schedule.run(&mut self.world);
            let drained = self.world.resource_mut::<TickEvents>().drain();
            self.events
                .extend(drained.into_iter().map(|e| (e.tick, e.kind)));
        }
    }

    pub fn has_event(&self, predicate: impl Fn(&EventKind) -> bool) -> bool {
        self.events.iter().any(|(_, kind)| predicate(kind))
    }
}
