//! Facility rooms and lighting state.
//!
//! Rooms are point locations with a zone and a light switch. The registry is
//! the single owner of lighting state: blackouts flip zones off (minus the
//! blacklist), and restoration flips everything back on.

use bevy_ecs::prelude::Resource;
use bevy_math::Vec3;

use stalker_events::{FacilityZone, RoomName};

/// One room of the facility.
#[derive(Debug, Clone)]
pub struct Room {
    pub name: RoomName,
    pub zone: FacilityZone,
    /// Center of the room in world space.
    pub position: Vec3,
    /// Whether this room's lights are currently on.
    pub lights_enabled: bool,
    /// Offset from the room center at which a stalker materializes.
    pub spawn_offset: Vec3,
}

impl Room {
    pub fn new(name: RoomName, position: Vec3) -> Self {
        Self {
            name,
            zone: name.zone(),
            position,
            lights_enabled: true,
            spawn_offset: Vec3::Y,
        }
    }

    /// Overrides the default one-unit-up spawn offset. The containment
    /// chamber, for instance, spawns stalkers on its upper walkway.
    pub fn with_spawn_offset(mut self, offset: Vec3) -> Self {
        self.spawn_offset = offset;
        self
    }

    /// World-space point where a stalker materializes in this room.
    pub fn spawn_point(&self) -> Vec3 {
        self.position + self.spawn_offset
    }
}

/// Registry of all rooms, owned by the world as a resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a room, replacing any previous room of the same name.
    pub fn register(&mut self, room: Room) {
        if let Some(existing) = self.rooms.iter_mut().find(|r| r.name == room.name) {
            *existing = room;
        } else {
            self.rooms.push(room);
        }
    }

    pub fn get(&self, name: RoomName) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn rooms_in_zone(&self, zone: FacilityZone) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.zone == zone)
    }

    /// Resolves the room a world-space position is in (nearest room center).
    pub fn room_at(&self, position: Vec3) -> Option<RoomName> {
        self.rooms
            .iter()
            .min_by(|a, b| {
                let da = a.position.distance_squared(position);
                let db = b.position.distance_squared(position);
                da.total_cmp(&db)
            })
            .map(|r| r.name)
    }

    /// Whether the named room currently has its lights on. Unknown rooms
    /// count as lit, which errs on the side of despawning the stalker.
    pub fn is_illuminated(&self, name: RoomName) -> bool {
        self.get(name).map(|r| r.lights_enabled).unwrap_or(true)
    }

    /// Turns a zone's lights off, skipping blacklisted rooms.
    pub fn blackout_zone(&mut self, zone: FacilityZone, blacklist: &[RoomName]) {
        for room in self.rooms.iter_mut() {
            if room.zone == zone && !blacklist.contains(&room.name) {
                room.lights_enabled = false;
            }
        }
    }

    /// Restores lighting in every room.
    pub fn restore_all_lights(&mut self) {
        for room in self.rooms.iter_mut() {
            room.lights_enabled = true;
        }
    }

    /// Whether any room anywhere is currently dark.
    pub fn any_dark(&self) -> bool {
        self.rooms.iter().any(|r| !r.lights_enabled)
    }
}
