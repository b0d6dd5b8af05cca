//! Facility vocabulary shared by every crate in the workspace.
//!
//! Zones and room names are closed enums rather than free strings so that
//! config files, events, and the room registry all agree on spelling.

use serde::{Deserialize, Serialize};

/// The major zones of the facility. Blackouts are configured per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityZone {
    LightContainment,
    HeavyContainment,
    Entrance,
    Surface,
}

impl FacilityZone {
    /// Returns all zone variants.
    pub fn all() -> &'static [FacilityZone] {
        &[
            FacilityZone::LightContainment,
            FacilityZone::HeavyContainment,
            FacilityZone::Entrance,
            FacilityZone::Surface,
        ]
    }

    /// Short display label used in logs and announcements.
    pub fn label(&self) -> &'static str {
        match self {
            FacilityZone::LightContainment => "light containment",
            FacilityZone::HeavyContainment => "heavy containment",
            FacilityZone::Entrance => "entrance",
            FacilityZone::Surface => "surface",
        }
    }
}

/// Named rooms the simulation knows about.
///
/// Checkpoints, armories, and gates keep their lights on during a blackout
/// by default (see the blackout room blacklist), so they matter to both
/// victim selection and stalker survival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomName {
    // Light containment
    Lcz914,
    LczArmory,
    LczCheckpointA,
    LczCheckpointB,
    Lcz173,
    LczGlassroom,
    LczGreenhouse,
    LczCrossing,
    LczCurve,
    // Heavy containment
    HczArmory,
    HczCheckpointA,
    HczCheckpointB,
    HczTestroom,
    Hcz049,
    Hcz106,
    HczServers,
    HczCrossing,
    // Entrance
    EzGateA,
    EzGateB,
    EzIntercom,
    EzOffice,
    EzCrossing,
    // Surface
    Surface,
}

impl RoomName {
    /// The zone this room belongs to.
    pub fn zone(&self) -> FacilityZone {
        use RoomName::*;
        match self {
            Lcz914 | LczArmory | LczCheckpointA | LczCheckpointB | Lcz173 | LczGlassroom
            | LczGreenhouse | LczCrossing | LczCurve => FacilityZone::LightContainment,
            HczArmory | HczCheckpointA | HczCheckpointB | HczTestroom | Hcz049 | Hcz106
            | HczServers | HczCrossing => FacilityZone::HeavyContainment,
            EzGateA | EzGateB | EzIntercom | EzOffice | EzCrossing => FacilityZone::Entrance,
            Surface => FacilityZone::Surface,
        }
    }
}
