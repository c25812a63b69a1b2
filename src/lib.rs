//! Ground Siege - a side-view arcade defender
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (player physics, projectiles, enemies, collisions)
//! - `renderer`: Abstract draw surface and per-entity draw routines
//! - `ui`: Lives readout / game-over collaborator
//! - `game`: Host-facing facade (key events + frame callback)
//! - `settings`: Host configuration

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use settings::{Settings, SettingsError, SpriteMode};

/// Game configuration constants
///
/// Timers are frame counts and velocities are units per frame, tuned for a
/// ~60 Hz display refresh.
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Ground line, 100 units above the playfield bottom
    pub const GROUND_Y: f32 = CANVAS_HEIGHT - 100.0;
    /// Grass strip drawn on top of the ground
    pub const GRASS_HEIGHT: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_POWER: f32 = -15.0;
    pub const PLAYER_GRAVITY: f32 = 0.8;
    pub const STARTING_LIVES: u8 = 3;

    /// Damage response
    pub const INVULNERABLE_FRAMES: u32 = 60; // ~1s
    /// Blink toggles every this many frames while invulnerable
    pub const BLINK_PERIOD: u32 = 5;
    pub const KNOCKBACK_SPEED: f32 = 6.0;
    pub const KNOCKBACK_FRAMES: u32 = 8;
    /// Geometric decay applied to knockback each frame
    pub const KNOCKBACK_DECAY: f32 = 0.8;
    pub const KNOCKBACK_CUTOFF: f32 = 0.1;
    /// Small hop when hit while standing
    pub const HURT_HOP: f32 = -4.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 8.0;
    pub const PROJECTILE_HEIGHT: f32 = 4.0;
    pub const PROJECTILE_SPEED: f32 = 12.0;
    /// Age (frames) at which the fade bottoms out
    pub const PROJECTILE_FADE_FRAMES: f32 = 100.0;
    pub const PROJECTILE_MIN_ALPHA: f32 = 0.5;
    pub const SHOOT_COOLDOWN_FRAMES: u32 = 15; // ~0.25s

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    /// Elapsed milliseconds per +1 of enemy speed
    pub const ENEMY_SPEED_RAMP_MS: f64 = 10_000.0;
    /// Spawn distance beyond the playfield edge
    pub const ENEMY_SPAWN_MARGIN: f32 = 30.0;
    /// Cull distance beyond the playfield edge
    pub const ENEMY_CULL_MARGIN: f32 = 50.0;
    pub const ENEMY_ANIM_STEP: f32 = 0.1;
    pub const ENEMY_BOB_AMPLITUDE: f32 = 2.0;
    pub const ENEMY_SPAWN_INTERVAL: u32 = 120; // ~2s
}
