//! Admin spawn command.
//!
//! `scp575 <player-id> <duration>` spawns a stalker hunting the named player
//! for the given number of seconds. Both arguments are validated before the
//! player lookup happens, so a bad duration is reported even for a player id
//! that does not exist.

use bevy_ecs::prelude::*;

use crate::clock::RoundState;
use crate::components::PlayerProfile;
use crate::config::Config;
use crate::registry::StalkerRegistry;
use crate::spawn::{spawn_stalker, SpawnError};

pub const COMMAND_USAGE: &str = "scp575 <player-id> <duration>";

/// Substitutes the positional `{0}` and `{1}` placeholders of a response
/// template.
fn format_response(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), arg);
    }
    out
}

/// Executes the spawn command. `Ok` carries the success response, `Err` the
/// rejection response.
pub fn execute_spawn_command(
    world: &mut World,
    config: &Config,
    args: &[&str],
) -> Result<String, String> {
    let responses = &config.command_responses;

    if !world.resource::<RoundState>().started {
        return Err(responses.round_has_not_started.clone());
    }

    if args.len() != 2 {
        return Err(format_response(&responses.help, &[COMMAND_USAGE]));
    }

    let player_id: u32 = args[0]
        .parse()
        .map_err(|_| format_response(&responses.invalid_player_id, &[args[0]]))?;

    let duration: u32 = args[1]
        .parse()
        .map_err(|_| format_response(&responses.invalid_duration, &[args[1]]))?;

    let target = find_player(world, player_id).ok_or_else(|| responses.player_not_found.clone())?;

    let nickname = world
        .get::<PlayerProfile>(target)
        .map(|p| p.nickname.clone())
        .ok_or_else(|| responses.player_not_found.clone())?;

    if world.resource::<StalkerRegistry>().is_hunted(target) {
        return Err(format_response(&responses.already_hunted, &[&nickname]));
    }

    match spawn_stalker(world, target, duration as f32, config) {
        Ok(_) => Ok(format_response(
            &responses.spawning,
            &[&nickname, args[1]],
        )),
        Err(SpawnError::VictimDead | SpawnError::VictimMissing) => {
            Err(responses.player_not_found.clone())
        }
        Err(SpawnError::Registry(_)) => {
            Err(format_response(&responses.already_hunted, &[&nickname]))
        }
    }
}

fn find_player(world: &mut World, player_id: u32) -> Option<Entity> {
    let mut query = world.query::<(Entity, &PlayerProfile)>();
    query
        .iter(world)
        .find(|(_, profile)| profile.player_id == player_id)
        .map(|(entity, _)| entity)
}
