//! Periodic enemy spawning at a random edge of the playfield

use glam::Vec2;
use rand::Rng;

use super::enemy::Enemy;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct EnemySpawner {
    /// Frames since the last spawn
    pub timer: u32,
    pub interval: u32,
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self {
            timer: 0,
            interval: ENEMY_SPAWN_INTERVAL,
        }
    }
}

impl EnemySpawner {
    /// Count one frame. Returns true (and restarts the count) when a spawn is due.
    pub fn advance(&mut self) -> bool {
        self.timer += 1;
        if self.timer >= self.interval {
            self.timer = 0;
            true
        } else {
            false
        }
    }

    /// New enemy on the ground line just outside the left or right edge.
    /// The side is a fresh coin flip every time.
    pub fn spawn<R: Rng>(&self, rng: &mut R, elapsed_ms: f64) -> Enemy {
        let x = if rng.random_bool(0.5) {
            -ENEMY_SPAWN_MARGIN
        } else {
            CANVAS_WIDTH + ENEMY_SPAWN_MARGIN
        };
        let y = GROUND_Y - ENEMY_SIZE;
        Enemy::spawn(Vec2::new(x, y), elapsed_ms, rng)
    }
}
