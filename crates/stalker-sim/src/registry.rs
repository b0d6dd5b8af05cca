//! Registry of active hunts.
//!
//! One stalker per victim, enforced at registration. Entries are stored in
//! insertion order so iteration stays deterministic.

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("victim already has an active stalker")]
    AlreadyHunted,
}

/// Maps each hunted victim to the stalker hunting them.
#[derive(Resource, Debug, Clone, Default)]
pub struct StalkerRegistry {
    entries: Vec<(Entity, Entity)>,
}

impl StalkerRegistry {
    /// Registers a hunt. Fails if the victim is already hunted.
    pub fn register(&mut self, victim: Entity, stalker: Entity) -> Result<(), RegistryError> {
        if self.is_hunted(victim) {
            return Err(RegistryError::AlreadyHunted);
        }
        self.entries.push((victim, stalker));
        Ok(())
    }

    /// Removes the entry for a stalker, returning its victim.
    pub fn remove_stalker(&mut self, stalker: Entity) -> Option<Entity> {
        let index = self.entries.iter().position(|(_, s)| *s == stalker)?;
        Some(self.entries.remove(index).0)
    }

    pub fn is_hunted(&self, victim: Entity) -> bool {
        self.entries.iter().any(|(v, _)| *v == victim)
    }

    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    /// All active stalker entities, in registration order.
    pub fn stalkers(&self) -> Vec<Entity> {
        self.entries.iter().map(|(_, s)| *s).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
