//! Blackout scheduling for the SCP-575 simulation.
//!
//! The scheduler is a tick-driven phase machine. The simulation advances it
//! once per tick with the elapsed time and applies whatever commands come
//! back; the scheduler itself owns no world state and performs no waiting of
//! its own, so stopping it (or despawning the stalker it triggered) can never
//! leave a dangling callback behind.
//!
//! ```text
//! InitialDelay ──▶ Announcing ──▶ Active ──▶ Cooldown ──▶ Announcing ──▶ …
//!                                   │
//!                                 stop() from anywhere ──▶ Stopped
//! ```

pub mod config;

pub use config::{AnnouncementConfig, BlackoutConfig, ConfigError};

use rand::Rng;

/// Where the scheduler currently is in its cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting out the delay before the first blackout cycle.
    InitialDelay { remaining: f32 },
    /// Announcement has played; lights go out when the lead time elapses.
    Announcing { remaining: f32, duration: f32 },
    /// Lights are out. `remaining` counts down the rolled duration.
    Active { remaining: f32 },
    /// Lights are back on; waiting before the next cycle.
    Cooldown { remaining: f32 },
    /// Round over. Terminal.
    Stopped,
}

/// What the simulation should do in response to a phase transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerCommand {
    /// Play the pre-blackout announcement.
    Announce {
        message: String,
        is_held: bool,
        is_noisy: bool,
        is_subtitle: bool,
    },
    /// Disable lighting in the active zones and spawn a stalker with the
    /// given lifetime.
    BeginBlackout { duration_seconds: f32 },
    /// Restore lighting everywhere.
    EndBlackout,
}

/// The long-lived blackout cycle for one round.
#[derive(Debug)]
pub struct BlackoutScheduler {
    config: BlackoutConfig,
    phase: Phase,
}

impl BlackoutScheduler {
    /// Creates a scheduler in its initial-delay phase, rolling the delay if
    /// the config asks for a randomized one.
    pub fn new(config: BlackoutConfig, rng: &mut impl Rng) -> Self {
        let delay = if config.random_initial_delay {
            let delay = roll_range(rng, config.initial_min_delay, config.initial_max_delay);
            tracing::debug!(delay, "random initial delay active");
            delay
        } else {
            config.initial_delay
        };
        Self {
            config,
            phase: Phase::InitialDelay { remaining: delay },
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether a blackout is currently in effect.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// Whether the scheduler has been stopped for good.
    pub fn is_stopped(&self) -> bool {
        matches!(self.phase, Phase::Stopped)
    }

    /// Terminates the cycle. Called at round end; terminal.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// Ends the active blackout early. Used when the stalker despawns and
    /// `end_blackout_when_disappearing` is set. Returns the `EndBlackout`
    /// command when there was an active blackout to end.
    pub fn end_active_blackout(&mut self, rng: &mut impl Rng) -> Option<SchedulerCommand> {
        if !self.is_active() {
            return None;
        }
        self.phase = Phase::Cooldown {
            remaining: self.roll_cooldown(rng),
        };
        Some(SchedulerCommand::EndBlackout)
    }

    /// Advances the cycle by `dt` seconds, returning the commands the
    /// simulation must apply this tick.
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) -> Vec<SchedulerCommand> {
        let mut commands = Vec::new();

        match &mut self.phase {
            Phase::Stopped => {}
            Phase::InitialDelay { remaining } | Phase::Cooldown { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    let duration =
                        roll_range(rng, self.config.min_duration, self.config.max_duration);
                    tracing::debug!(duration, "blackout cycle starting");
                    commands.push(self.announce_command());
                    self.phase = Phase::Announcing {
                        remaining: self.config.announcement_lead_time,
                        duration,
                    };
                }
            }
            Phase::Announcing {
                remaining,
                duration,
            } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    let duration = *duration;
                    commands.push(SchedulerCommand::BeginBlackout {
                        duration_seconds: duration,
                    });
                    self.phase = Phase::Active {
                        remaining: duration,
                    };
                }
            }
            Phase::Active { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    commands.push(SchedulerCommand::EndBlackout);
                    self.phase = Phase::Cooldown {
                        remaining: self.roll_cooldown(rng),
                    };
                }
            }
        }

        commands
    }

    fn announce_command(&self) -> SchedulerCommand {
        let announcement = &self.config.announcement;
        SchedulerCommand::Announce {
            message: announcement.message.clone(),
            is_held: announcement.is_held,
            is_noisy: announcement.is_noisy,
            is_subtitle: announcement.is_subtitle,
        }
    }

    fn roll_cooldown(&self, rng: &mut impl Rng) -> f32 {
        if self.config.max_cooldown > self.config.min_cooldown {
            rng.gen_range(self.config.min_cooldown..self.config.max_cooldown) as f32
        } else {
            self.config.min_cooldown as f32
        }
    }
}

/// Rolls a value in `[min, max)`, falling back to `min` for degenerate bounds.
fn roll_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
