//! Player shots: straight-line travel, fade with age, culled off-screen

use glam::Vec2;

use super::collision::{Aabb, HasBounds};
use super::player::Facing;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub direction: Facing,
    pub active: bool,
    /// Frames since creation
    pub age: u32,
}

impl Projectile {
    pub fn new(pos: Vec2, direction: Facing) -> Self {
        Self {
            pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
            direction,
            active: true,
            age: 0,
        }
    }

    pub fn update(&mut self) {
        self.pos.x += self.speed * self.direction.sign();
        self.age += 1;

        if self.pos.x < 0.0 || self.pos.x > CANVAS_WIDTH {
            self.active = false;
        }
    }

    /// Linear fade from 1.0, floored at 0.5 once 50 frames old
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age as f32 / PROJECTILE_FADE_FRAMES).max(PROJECTILE_MIN_ALPHA)
    }
}

impl HasBounds for Projectile {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_one_step_per_update() {
        let mut shot = Projectile::new(Vec2::ZERO, Facing::Right);
        shot.update();
        assert_eq!(shot.pos.x, 12.0);
        assert_eq!(shot.age, 1);
        assert!(shot.active);

        let mut shot = Projectile::new(Vec2::new(400.0, 0.0), Facing::Left);
        shot.update();
        assert_eq!(shot.pos.x, 388.0);
    }

    #[test]
    fn test_deactivates_past_right_edge() {
        let mut shot = Projectile::new(Vec2::ZERO, Facing::Right);
        let mut updates = 0;
        while shot.active {
            shot.update();
            updates += 1;
            assert!(updates < 100, "projectile never left the playfield");
        }
        assert!(shot.pos.x > CANVAS_WIDTH);
        // 12 * 67 = 804 is the first position past 800
        assert_eq!(updates, 67);
    }

    #[test]
    fn test_deactivates_past_left_edge() {
        let mut shot = Projectile::new(Vec2::new(5.0, 0.0), Facing::Left);
        shot.update();
        assert!(!shot.active);
    }

    #[test]
    fn test_exact_edge_is_still_on_screen() {
        let mut shot = Projectile::new(Vec2::new(CANVAS_WIDTH - PROJECTILE_SPEED, 0.0), Facing::Right);
        shot.update();
        assert_eq!(shot.pos.x, CANVAS_WIDTH);
        assert!(shot.active);
    }

    #[test]
    fn test_alpha_fades_to_floor() {
        let mut shot = Projectile::new(Vec2::ZERO, Facing::Right);
        assert_eq!(shot.alpha(), 1.0);
        shot.age = 20;
        assert!((shot.alpha() - 0.8).abs() < 1e-6);
        shot.age = 50;
        assert_eq!(shot.alpha(), 0.5);
        shot.age = 90;
        assert_eq!(shot.alpha(), 0.5);
    }
}
