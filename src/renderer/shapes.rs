//! Draw routines for the background and each entity kind

use glam::Vec2;

use super::surface::{Color, SpriteSlot, Surface};
use crate::consts::*;
use crate::sim::{Aabb, Enemy, Facing, HasBounds, Player, Projectile};

/// Player placeholder while the sprite is missing
pub fn placeholder_color() -> Color {
    Color::from_rgb8(0x4C, 0xAF, 0x50)
}

pub fn ground_color() -> Color {
    Color::from_rgb8(0x8B, 0x45, 0x13)
}

pub fn grass_color() -> Color {
    Color::from_rgb8(0x22, 0x8B, 0x22)
}

/// Wipe the canvas and draw the ground with its grass strip
pub fn draw_background(surface: &mut dyn Surface) {
    surface.clear_rect(Aabb::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT));

    surface.set_fill_color(ground_color());
    surface.fill_rect(Aabb::new(0.0, GROUND_Y, CANVAS_WIDTH, CANVAS_HEIGHT - GROUND_Y));

    surface.set_fill_color(grass_color());
    surface.fill_rect(Aabb::new(0.0, GROUND_Y, CANVAS_WIDTH, GRASS_HEIGHT));
}

/// Draw the player sprite (mirrored when facing left, half alpha during
/// blink frames), or a solid placeholder square when the sprite isn't available
pub fn draw_player(surface: &mut dyn Surface, player: &Player, sprite: &SpriteSlot) {
    let bounds = player.bounds();
    let Some(image) = sprite.image() else {
        surface.set_fill_color(placeholder_color());
        surface.fill_rect(bounds);
        return;
    };

    let alpha = if player.is_blinking() { 0.5 } else { 1.0 };
    surface.set_global_alpha(alpha);

    match player.facing {
        Facing::Right => surface.draw_image(image, bounds),
        Facing::Left => {
            surface.save();
            surface.translate(Vec2::new(bounds.right(), bounds.y));
            surface.scale(Vec2::new(-1.0, 1.0));
            surface.draw_image(image, Aabb::new(0.0, 0.0, bounds.width, bounds.height));
            surface.restore();
        }
    }

    surface.set_global_alpha(1.0);
}

/// Yellow body with a wider half-strength glow, both fading with age
pub fn draw_projectile(surface: &mut dyn Surface, projectile: &Projectile) {
    let alpha = projectile.alpha();
    let body = projectile.bounds();

    surface.set_fill_color(Color::rgba(1.0, 1.0, 0.0, alpha));
    surface.fill_rect(body);

    surface.set_fill_color(Color::rgba(1.0, 200.0 / 255.0, 0.0, alpha * 0.5));
    surface.fill_rect(body.expand(2.0, 1.0));
}

/// Color-cycling body with two eyes, all offset by the bob
pub fn draw_enemy(surface: &mut dyn Surface, enemy: &Enemy) {
    let body = enemy.bounds();

    surface.set_fill_color(Color::from_hsl(enemy.hue(), 0.7, 0.5));
    surface.fill_rect(body);

    surface.set_fill_color(Color::WHITE);
    surface.fill_rect(Aabb::new(body.x + 5.0, body.y + 8.0, 6.0, 6.0));
    surface.fill_rect(Aabb::new(body.x + 19.0, body.y + 8.0, 6.0, 6.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCommand, ImageId, RecordingSurface};

    fn player_at(x: f32, facing: Facing) -> Player {
        let mut player = Player::new(Vec2::new(x, GROUND_Y - PLAYER_SIZE));
        player.facing = facing;
        player
    }

    #[test]
    fn test_background_layers() {
        let mut surface = RecordingSurface::new();
        draw_background(&mut surface);

        assert!(matches!(surface.commands()[0], DrawCommand::Clear(_)));
        let filled = surface.filled_rects();
        assert_eq!(filled.len(), 2);
        assert_eq!(filled[0].color, ground_color());
        assert_eq!(filled[0].rect, Aabb::new(0.0, 500.0, 800.0, 100.0));
        assert_eq!(filled[1].color, grass_color());
        assert_eq!(filled[1].rect.height, GRASS_HEIGHT);
    }

    #[test]
    fn test_player_placeholder_when_sprite_missing() {
        for slot in [SpriteSlot::Pending, SpriteSlot::Failed] {
            let mut surface = RecordingSurface::new();
            let player = player_at(100.0, Facing::Left);
            draw_player(&mut surface, &player, &slot);

            assert_eq!(surface.images_drawn(), 0);
            let filled = surface.filled_rects();
            assert_eq!(filled.len(), 1);
            assert_eq!(filled[0].color, placeholder_color());
            assert_eq!(filled[0].rect, player.bounds());
        }
    }

    #[test]
    fn test_player_sprite_facing_right() {
        let mut surface = RecordingSurface::new();
        let player = player_at(100.0, Facing::Right);
        draw_player(&mut surface, &player, &SpriteSlot::Ready(ImageId(1)));

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::GlobalAlpha(1.0),
                DrawCommand::DrawImage {
                    image: ImageId(1),
                    rect: player.bounds()
                },
                DrawCommand::GlobalAlpha(1.0),
            ]
        );
    }

    #[test]
    fn test_player_sprite_mirrored_facing_left() {
        let mut surface = RecordingSurface::new();
        let player = player_at(100.0, Facing::Left);
        draw_player(&mut surface, &player, &SpriteSlot::Ready(ImageId(1)));

        let commands = surface.commands();
        assert_eq!(commands[1], DrawCommand::Save);
        assert_eq!(commands[2], DrawCommand::Translate(Vec2::new(150.0, GROUND_Y - PLAYER_SIZE)));
        assert_eq!(commands[3], DrawCommand::Scale(Vec2::new(-1.0, 1.0)));
        assert_eq!(
            commands[4],
            DrawCommand::DrawImage {
                image: ImageId(1),
                rect: Aabb::new(0.0, 0.0, PLAYER_SIZE, PLAYER_SIZE)
            }
        );
        assert_eq!(commands[5], DrawCommand::Restore);
    }

    #[test]
    fn test_player_sprite_blinks_at_half_alpha() {
        let mut surface = RecordingSurface::new();
        let mut player = player_at(100.0, Facing::Right);
        player.take_damage();
        assert!(player.is_blinking());
        draw_player(&mut surface, &player, &SpriteSlot::Ready(ImageId(3)));

        let commands = surface.commands();
        assert_eq!(commands[0], DrawCommand::GlobalAlpha(0.5));
        assert!(matches!(commands[1], DrawCommand::DrawImage { .. }));
        // Alpha restored afterwards
        assert_eq!(commands.last(), Some(&DrawCommand::GlobalAlpha(1.0)));
    }

    #[test]
    fn test_placeholder_stays_solid_while_blinking() {
        let mut surface = RecordingSurface::new();
        let mut player = player_at(100.0, Facing::Right);
        player.take_damage();
        assert!(player.is_blinking());
        draw_player(&mut surface, &player, &SpriteSlot::Pending);

        let filled = surface.filled_rects();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].global_alpha, 1.0);
        assert_eq!(filled[0].color, placeholder_color());
        assert!(!surface.commands().iter().any(|c| matches!(c, DrawCommand::GlobalAlpha(_))));
    }

    #[test]
    fn test_projectile_glow_is_larger_and_dimmer() {
        let mut surface = RecordingSurface::new();
        let mut shot = Projectile::new(Vec2::new(100.0, 300.0), Facing::Right);
        shot.age = 30;
        draw_projectile(&mut surface, &shot);

        let filled = surface.filled_rects();
        assert_eq!(filled.len(), 2);
        assert!((filled[0].color.a - 0.7).abs() < 1e-6);
        assert!((filled[1].color.a - 0.35).abs() < 1e-6);
        assert_eq!(filled[1].rect, Aabb::new(98.0, 299.0, 12.0, 6.0));
    }

    #[test]
    fn test_enemy_drawn_at_bobbed_position() {
        let mut surface = RecordingSurface::new();
        let enemy = Enemy::new(Vec2::new(200.0, 470.0), 1.0, std::f32::consts::FRAC_PI_2);
        draw_enemy(&mut surface, &enemy);

        let filled = surface.filled_rects();
        assert_eq!(filled.len(), 3);
        assert_eq!(filled[0].rect, enemy.bounds());
        assert_eq!(filled[1].color, Color::WHITE);
        assert_eq!(filled[1].rect.x, 205.0);
        assert_eq!(filled[2].rect.x, 219.0);
        assert_eq!(filled[2].rect.y, enemy.bounds().y + 8.0);
    }
}
