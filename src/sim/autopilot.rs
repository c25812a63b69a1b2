//! Scripted player for demo/headless runs
//!
//! Turns toward the nearest enemy, shoots when facing it and hops when one
//! gets close. Deterministic: same state, same command.

use super::player::Facing;
use super::state::GameState;

/// Jump when an enemy is this close (center to center)
const JUMP_DISTANCE: f32 = 60.0;

/// Keys the autopilot wants held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutopilotCommand {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
}

pub fn autopilot(state: &GameState) -> AutopilotCommand {
    let player = &state.player;
    let center = player.pos.x + player.size.x / 2.0;

    let nearest = state
        .enemies
        .iter()
        .filter(|e| e.active)
        .map(|e| e.pos.x + e.size.x / 2.0 - center)
        .min_by(|a, b| a.abs().total_cmp(&b.abs()));

    let Some(dx) = nearest else {
        return AutopilotCommand::default();
    };

    let wanted = if dx < 0.0 { Facing::Left } else { Facing::Right };
    let facing_target = player.facing == wanted;

    AutopilotCommand {
        // Facing only changes by moving, so step once toward the target to turn
        left: !facing_target && wanted == Facing::Left,
        right: !facing_target && wanted == Facing::Right,
        jump: player.on_ground && dx.abs() < JUMP_DISTANCE,
        fire: facing_target,
    }
}
