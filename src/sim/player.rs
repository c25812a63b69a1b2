//! The player character
//!
//! Platformer physics plus the damage state machine:
//! vulnerable -> (hit) -> invulnerable for 60 frames with knockback -> vulnerable.

use glam::Vec2;

use super::collision::{Aabb, HasBounds};
use super::input::InputState;
use crate::consts::*;

/// Horizontal facing, shared by the player and its projectiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Result of a damage attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Player was invulnerable; nothing changed
    Ignored,
    /// Lost a life, still alive
    Hurt { lives: u8 },
    /// Lost the last life
    Defeated,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub on_ground: bool,
    pub facing: Facing,
    pub lives: u8,
    /// Frames of invulnerability left (invulnerable while > 0)
    pub invulnerable_frames: u32,
    /// Frames since the current invulnerability window started
    pub blink_frames: u32,
    /// Forced horizontal velocity, decays each frame
    pub knockback_x: f32,
    pub knockback_frames: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(PLAYER_SIZE),
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            gravity: PLAYER_GRAVITY,
            on_ground: false,
            facing: Facing::Right,
            lives: STARTING_LIVES,
            invulnerable_frames: 0,
            blink_frames: 0,
            knockback_x: 0.0,
            knockback_frames: 0,
        }
    }

    /// Starting position: horizontally centered, above the ground
    pub fn spawn() -> Self {
        Self::new(Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - 200.0))
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_frames > 0
    }

    /// Half-alpha phase of the invulnerability blink
    pub fn is_blinking(&self) -> bool {
        self.is_invulnerable() && (self.blink_frames / BLINK_PERIOD) % 2 == 0
    }

    /// Where projectiles leave from: the facing-side edge, vertically centered
    pub fn muzzle(&self) -> Vec2 {
        let x = match self.facing {
            Facing::Right => self.pos.x + self.size.x,
            Facing::Left => self.pos.x,
        };
        Vec2::new(x, self.pos.y + self.size.y / 2.0)
    }

    pub fn update(&mut self, input: &InputState) {
        if !self.on_ground {
            self.vel.y += self.gravity;
        }

        // Right is applied after left, so holding both moves right
        self.vel.x = 0.0;
        if input.left() {
            self.vel.x = -self.speed;
            self.facing = Facing::Left;
        }
        if input.right() {
            self.vel.x = self.speed;
            self.facing = Facing::Right;
        }

        if input.jump() && self.on_ground {
            self.vel.y = self.jump_power;
            self.on_ground = false;
        }

        if self.knockback_frames > 0 {
            self.vel.x += self.knockback_x;
            self.knockback_x *= KNOCKBACK_DECAY;
            self.knockback_frames -= 1;
            if self.knockback_x.abs() < KNOCKBACK_CUTOFF || self.knockback_frames == 0 {
                self.knockback_x = 0.0;
                self.knockback_frames = 0;
            }
        }

        self.pos += self.vel;

        self.resolve_bounds();

        if self.is_invulnerable() {
            self.invulnerable_frames -= 1;
            self.blink_frames += 1;
            if self.invulnerable_frames == 0 {
                self.blink_frames = 0;
            }
        }
    }

    /// Clamp to the ground line, side walls and top edge
    fn resolve_bounds(&mut self) {
        if self.pos.y + self.size.y >= GROUND_Y {
            self.pos.y = GROUND_Y - self.size.y;
            self.vel.y = 0.0;
            self.on_ground = true;
        }

        // Hitting a wall cancels any pending knockback
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
            self.knockback_x = 0.0;
        }
        if self.pos.x + self.size.x > CANVAS_WIDTH {
            self.pos.x = CANVAS_WIDTH - self.size.x;
            self.vel.x = 0.0;
            self.knockback_x = 0.0;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = 0.0;
        }
    }

    /// Apply one hit. No-op while invulnerable.
    pub fn take_damage(&mut self) -> DamageOutcome {
        if self.is_invulnerable() {
            return DamageOutcome::Ignored;
        }

        self.lives = self.lives.saturating_sub(1);
        self.invulnerable_frames = INVULNERABLE_FRAMES;
        self.blink_frames = 0;

        // Pushed away from the way we were facing
        self.knockback_x = -self.facing.sign() * KNOCKBACK_SPEED;
        self.knockback_frames = KNOCKBACK_FRAMES;

        if self.on_ground {
            self.vel.y = HURT_HOP;
            self.on_ground = false;
        }

        if self.lives == 0 {
            DamageOutcome::Defeated
        } else {
            DamageOutcome::Hurt { lives: self.lives }
        }
    }
}

impl HasBounds for Player {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}
