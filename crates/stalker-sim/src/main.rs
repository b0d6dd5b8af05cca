//! SCP-575 blackout-stalker simulation binary.
//!
//! Runs a whole round at a fixed 100 ms tick: the blackout scheduler cuts
//! zone lighting on its randomized cycle, each blackout spawns a stalker
//! hunting one victim, and everything observable lands on the event stream.

use bevy_ecs::prelude::*;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use blackout::BlackoutScheduler;
use stalker_events::{EventLogger, EventType};
use stalker_sim::setup;
use stalker_sim::systems::{
    accumulate_light_exposure, advance_stalker_phase, chase_tick, poll_room_light,
    process_despawns, run_blackout_cycle, tick_lifetimes, BlackoutControl,
};
use stalker_sim::{
    Config, DespawnQueue, RoundState, SimClock, SimRng, StalkerRegistry, TickEvents,
};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "scp575_sim")]
#[command(about = "SCP-575 blackout-stalker simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate (100 ms each)
    #[arg(long, default_value_t = 6000)]
    ticks: u64,

    /// Number of players in the round
    #[arg(long, default_value_t = 20)]
    players: usize,

    /// Configuration file (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the event stream to this JSONL file
    #[arg(long)]
    events_out: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("could not load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::load_or_default(),
    };

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if !config.enabled {
        tracing::info!("simulation disabled by config");
        return;
    }

    println!("SCP-575 Simulation");
    println!("==================");
    println!("Seed: {}", args.seed);
    println!("Ticks: {} ({} s)", args.ticks, args.ticks as f32 * 0.1);
    println!("Players: {}", args.players);
    println!();

    let mut logger = args.events_out.as_ref().map(|path| {
        EventLogger::open(path).unwrap_or_else(|e| {
            eprintln!("could not open {}: {}", path.display(), e);
            std::process::exit(1);
        })
    });

    let mut world = World::new();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    // The per-round spawn chance gate: a failed roll means no blackout
    // cycle at all this round.
    let mut scheduler = BlackoutScheduler::new(config.blackout.clone(), &mut rng);
    let roll = rng.gen_range(0..100);
    if roll >= config.spawn_chance {
        tracing::info!(roll, chance = config.spawn_chance, "spawn roll failed, cycle idle");
        scheduler.stop();
    } else {
        tracing::info!(roll, chance = config.spawn_chance, "spawn roll passed");
    }

    let rooms = setup::create_facility();
    let summary = setup::spawn_players(&mut world, &rooms, &mut rng, args.players);
    println!(
        "Spawned {} players ({} humans, {} SCPs) over {} rooms",
        summary.total,
        summary.humans,
        summary.scps,
        rooms.rooms().count()
    );

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

    println!();
    println!("Starting round...");
    println!();

    let mut counts = EventCounts::default();
    for _ in 0..args.ticks {
        world.resource_mut::<SimClock>().advance();
        schedule.run(&mut world);
        drain_events(&mut world, logger.as_mut(), &mut counts);
    }

    stalker_sim::systems::end_round(&mut world);
    drain_events(&mut world, logger.as_mut(), &mut counts);

    if let Some(logger) = logger.as_mut() {
        if let Err(e) = logger.flush() {
            eprintln!("Warning: could not flush event log: {}", e);
        }
    }

    println!();
    println!(
        "Round complete. Ran {} ticks, recorded {} events.",
        args.ticks, counts.total
    );
    for (event_type, count) in &counts.by_type {
        println!("  {:?}: {}", event_type, count);
    }
    if let Some(path) = &args.events_out {
        println!("Event stream written to {}", path.display());
    }
}

/// Tally of the round's event stream, broken down by coarse category.
#[derive(Default)]
struct EventCounts {
    total: usize,
    by_type: Vec<(EventType, usize)>,
}

impl EventCounts {
    fn bump(&mut self, event_type: EventType) {
        self.total += 1;
        match self.by_type.iter_mut().find(|(t, _)| *t == event_type) {
            Some((_, count)) => *count += 1,
            None => self.by_type.push((event_type, 1)),
        }
    }
}

/// Drains this tick's events to the log file and the terminal.
fn drain_events(world: &mut World, logger: Option<&mut EventLogger>, counts: &mut EventCounts) {
    let events = world.resource_mut::<TickEvents>().drain();
    if events.is_empty() {
        return;
    }

    for event in &events {
        counts.bump(event.event_type());
        tracing::debug!(tick = event.tick, kind = ?event.kind, "event");
    }
    if let Some(logger) = logger {
        if let Err(e) = logger.log_batch(&events) {
            eprintln!("Warning: could not write events: {}", e);
        }
    }
}
