//! Player-side components.

use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// The role a connected player currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ClassD,
    Scientist,
    FacilityGuard,
    MtfOperative,
    ChaosInsurgent,
    Scp049,
    Scp106,
    Scp173,
    Tutorial,
}

impl Role {
    /// Whether this role is itself an SCP antagonist.
    pub fn is_scp(&self) -> bool {
        matches!(self, Role::Scp049 | Role::Scp106 | Role::Scp173)
    }
}

/// Identity of a connected player.
#[derive(Component, Debug, Clone)]
pub struct PlayerProfile {
    /// Numeric id, unique per round.
    pub player_id: u32,
    /// Display name.
    pub nickname: String,
    /// Current role.
    pub role: Role,
}

/// Hit points. Players die when `current` reaches zero.
#[derive(Component, Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Applies lethal damage.
    pub fn kill(&mut self) {
        self.current = 0.0;
    }
}

/// World-space position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

/// Direction the player's viewpoint is aimed at. Not required to be
/// normalized; the light-exposure check normalizes before raycasting.
#[derive(Component, Debug, Clone, Copy)]
pub struct AimDirection(pub Vec3);

/// A held light-emitting item (flashlight, or a weapon-mounted light).
#[derive(Component, Debug, Clone, Copy)]
pub struct LightSource {
    /// Whether the light is currently switched on.
    pub emitting: bool,
}

/// Current locomotion state, replicated from the player's input.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    Standing,
    Walking,
    Sprinting,
}

impl MovementState {
    pub fn is_sprinting(&self) -> bool {
        matches!(self, MovementState::Sprinting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scp_roles() {
        assert!(Role::Scp173.is_scp());
        assert!(Role::Scp106.is_scp());
        assert!(!Role::ClassD.is_scp());
        assert!(!Role::Tutorial.is_scp());
    }

    #[test]
    fn test_kill_is_lethal_once() {
        let mut health = Health::new(100.0);
        assert!(health.is_alive());

        health.kill();
        assert!(!health.is_alive());

        // A second kill changes nothing.
        health.kill();
        assert_eq!(health.current, 0.0);
    }
}
