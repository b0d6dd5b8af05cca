//! Facility layout.
//!
//! Room centers are laid out on a coarse grid, one cluster per zone, far
//! enough apart that nearest-center room resolution is unambiguous.

use bevy_math::Vec3;

use stalker_events::RoomName;

use crate::components::{Room, RoomRegistry};

/// Builds the full facility room registry.
pub fn create_facility() -> RoomRegistry {
    let mut registry = RoomRegistry::new();

    // Light containment, around the origin.
    registry.register(Room::new(RoomName::Lcz914, Vec3::new(0.0, 0.0, 0.0)));
    registry.register(Room::new(RoomName::LczArmory, Vec3::new(25.0, 0.0, 0.0)));
    registry.register(Room::new(RoomName::LczCheckpointA, Vec3::new(50.0, 0.0, 0.0)));
    registry.register(Room::new(RoomName::LczCheckpointB, Vec3::new(50.0, 0.0, 25.0)));
    // The containment chamber spawn sits on the upper walkway.
    registry.register(
        Room::new(RoomName::Lcz173, Vec3::new(0.0, 0.0, 25.0))
            .with_spawn_offset(Vec3::new(0.0, 13.5, 0.0)),
    );
    registry.register(Room::new(RoomName::LczGlassroom, Vec3::new(25.0, 0.0, 25.0)));
    registry.register(Room::new(RoomName::LczGreenhouse, Vec3::new(0.0, 0.0, 50.0)));
    registry.register(Room::new(RoomName::LczCrossing, Vec3::new(25.0, 0.0, 50.0)));
    registry.register(Room::new(RoomName::LczCurve, Vec3::new(50.0, 0.0, 50.0)));

    // Heavy containment, one level down.
    registry.register(Room::new(RoomName::HczArmory, Vec3::new(150.0, -10.0, 0.0)));
    registry.register(Room::new(RoomName::HczCheckpointA, Vec3::new(175.0, -10.0, 0.0)));
    registry.register(Room::new(RoomName::HczCheckpointB, Vec3::new(175.0, -10.0, 25.0)));
    // The test room spawn is offset towards its door.
    registry.register(
        Room::new(RoomName::HczTestroom, Vec3::new(150.0, -10.0, 25.0))
            .with_spawn_offset(Vec3::new(4.0, 1.0, 0.0)),
    );
    registry.register(Room::new(RoomName::Hcz049, Vec3::new(150.0, -10.0, 50.0)));
    registry.register(Room::new(RoomName::Hcz106, Vec3::new(175.0, -10.0, 50.0)));
    registry.register(Room::new(RoomName::HczServers, Vec3::new(150.0, -10.0, 75.0)));
    registry.register(Room::new(RoomName::HczCrossing, Vec3::new(175.0, -10.0, 75.0)));

    // Entrance zone.
    registry.register(Room::new(RoomName::EzGateA, Vec3::new(300.0, 0.0, 0.0)));
    registry.register(Room::new(RoomName::EzGateB, Vec3::new(325.0, 0.0, 0.0)));
    registry.register(Room::new(RoomName::EzIntercom, Vec3::new(300.0, 0.0, 25.0)));
    registry.register(Room::new(RoomName::EzOffice, Vec3::new(325.0, 0.0, 25.0)));
    registry.register(Room::new(RoomName::EzCrossing, Vec3::new(300.0, 0.0, 50.0)));

    // Surface.
    registry.register(Room::new(RoomName::Surface, Vec3::new(450.0, 100.0, 0.0)));

    registry
}
