//! Ground enemies: walk toward the player, bob in place, get faster over time

use glam::Vec2;
use rand::Rng;

use super::collision::{Aabb, HasBounds};
use crate::consts::*;

/// Walk speed for an enemy created after `elapsed_ms` of game time.
///
/// Computed in f64 and narrowed once to the f32 used for positions.
#[inline]
pub fn speed_for_elapsed(elapsed_ms: f64) -> f32 {
    (1.0 + elapsed_ms / ENEMY_SPEED_RAMP_MS) as f32
}

#[derive(Debug, Clone)]
pub struct Enemy {
    /// Top-left corner at rest (without bob)
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub active: bool,
    /// Per-instance phase so enemies don't bob in lockstep
    pub anim_offset: f32,
    /// Animation clock, advanced every update
    pub anim_time: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32, anim_offset: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(ENEMY_SIZE),
            speed,
            active: true,
            anim_offset,
            anim_time: 0.0,
        }
    }

    /// Enemy whose speed reflects the game time elapsed so far
    pub fn spawn<R: Rng>(pos: Vec2, elapsed_ms: f64, rng: &mut R) -> Self {
        let anim_offset = rng.random_range(0.0..std::f32::consts::TAU);
        Self::new(pos, speed_for_elapsed(elapsed_ms), anim_offset)
    }

    pub fn update(&mut self, player_x: f32) {
        if self.pos.x < player_x {
            self.pos.x += self.speed;
        } else {
            self.pos.x -= self.speed;
        }

        self.anim_time += ENEMY_ANIM_STEP;

        if self.pos.x < -ENEMY_CULL_MARGIN || self.pos.x > CANVAS_WIDTH + ENEMY_CULL_MARGIN {
            self.active = false;
        }
    }

    /// Vertical bob offset, applied to both drawing and hit-testing
    pub fn bob(&self) -> f32 {
        (self.anim_time + self.anim_offset).sin() * ENEMY_BOB_AMPLITUDE
    }

    /// Body hue in degrees, oscillating around red
    pub fn hue(&self) -> f32 {
        self.anim_time.sin() * 30.0
    }
}

impl HasBounds for Enemy {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y + self.bob(), self.size.x, self.size.y)
    }
}
