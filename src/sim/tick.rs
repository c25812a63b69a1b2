//! Per-frame simulation tick
//!
//! Core game loop that advances the world once per rendered frame and draws
//! it in a fixed order: background, player, projectiles, enemies.

use super::collision::collides;
use super::input::InputState;
use super::projectile::Projectile;
use super::state::GameState;
use crate::consts::*;
use crate::renderer::{SpriteSlot, Surface, draw_background, draw_enemy, draw_player, draw_projectile};
use crate::ui::Hud;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

/// Advance the game state by one frame and draw it.
///
/// `now_ms` is the host's frame timestamp. Motion advances one step per call
/// regardless of the delta; the delta only feeds the elapsed game time.
pub fn tick(
    state: &mut GameState,
    input: &InputState,
    now_ms: f64,
    sprite: &SpriteSlot,
    surface: &mut dyn Surface,
    hud: &mut dyn Hud,
) -> FrameStatus {
    if !state.is_running() {
        return FrameStatus::Stopped;
    }

    // A clock that steps backwards contributes nothing
    let dt = (now_ms - state.last_time_ms).max(0.0);
    state.last_time_ms = now_ms;
    state.elapsed_ms += dt;
    state.frame_count += 1;

    draw_background(surface);

    if state.fire_cooldown > 0 {
        state.fire_cooldown -= 1;
    }

    if state.spawner.advance() {
        let enemy = state.spawner.spawn(&mut state.rng, state.elapsed_ms);
        log::debug!(
            "Spawned enemy at x={} speed={:.3} (frame {})",
            enemy.pos.x,
            enemy.speed,
            state.frame_count
        );
        state.enemies.push(enemy);
    }

    state.player.update(input);
    draw_player(surface, &state.player, sprite);

    // Projectiles, newest first. Each removes at most one enemy.
    for projectile in state.projectiles.iter_mut().rev() {
        projectile.update();
        if !projectile.active {
            continue;
        }
        draw_projectile(surface, projectile);

        let hit = state
            .enemies
            .iter_mut()
            .rev()
            .find(|enemy| enemy.active && collides(&*projectile, &**enemy));
        if let Some(enemy) = hit {
            enemy.active = false;
            projectile.active = false;
            state.enemies_defeated += 1;
            log::debug!("Enemy destroyed at x={:.1}", enemy.pos.x);
        }
    }
    state.projectiles.retain(|p| p.active);

    // Enemies, newest first. Ones shot down above are skipped.
    for i in (0..state.enemies.len()).rev() {
        if !state.enemies[i].active {
            continue;
        }

        let player_x = state.player.pos.x;
        let enemy = &mut state.enemies[i];
        enemy.update(player_x);
        if !enemy.active {
            continue;
        }
        draw_enemy(surface, enemy);

        if collides(&state.enemies[i], &state.player) {
            state.enemies[i].active = false;
            state.damage_player(hud);
        }
    }
    state.enemies.retain(|e| e.active);

    if state.is_running() {
        FrameStatus::Continue
    } else {
        FrameStatus::Stopped
    }
}

/// Fire a projectile from the player's facing side if the cooldown allows.
/// Returns true when a shot was spawned.
pub fn fire(state: &mut GameState) -> bool {
    if !state.is_running() {
        return false;
    }
    if state.fire_cooldown > 0 {
        log::trace!("Fire rejected, cooldown {}", state.fire_cooldown);
        return false;
    }

    let player = &state.player;
    state
        .projectiles
        .push(Projectile::new(player.muzzle(), player.facing));
    state.fire_cooldown = SHOOT_COOLDOWN_FRAMES;
    true
}
