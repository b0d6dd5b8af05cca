//! Per-tick event buffer and the despawn queue.

use bevy_ecs::prelude::{Entity, Resource};

use stalker_events::{generate_event_id, DespawnReason, Event, EventKind};

/// Events produced during the current tick, drained by the main loop after
/// every schedule run.
#[derive(Resource, Debug, Default)]
pub struct TickEvents {
    events: Vec<Event>,
}

impl TickEvents {
    pub fn record(&mut self, tick: u64, kind: EventKind) {
        self.events.push(Event {
            event_id: generate_event_id(),
            tick,
            kind,
        });
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Stalkers marked for removal this tick, with the reason that won.
///
/// Several systems can condemn the same stalker in one tick (illumination and
/// exposure, say). The first reason recorded wins; later requests for the
/// same entity are ignored, so the despawn event carries one unambiguous
/// cause.
#[derive(Resource, Debug, Default)]
pub struct DespawnQueue {
    entries: Vec<(Entity, DespawnReason)>,
}

impl DespawnQueue {
    pub fn request(&mut self, entity: Entity, reason: DespawnReason) {
        if !self.contains(entity) {
            self.entries.push((entity, reason));
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entries.iter().any(|(e, _)| *e == entity)
    }

    pub fn drain(&mut self) -> Vec<(Entity, DespawnReason)> {
        std::mem::take(&mut self.entries)
    }
}
