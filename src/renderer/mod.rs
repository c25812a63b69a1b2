//! Rendering module
//!
//! The core never owns a graphics context: every draw call goes through the
//! `Surface` trait implemented by the host.

pub mod shapes;
pub mod surface;

pub use shapes::{draw_background, draw_enemy, draw_player, draw_projectile};
pub use surface::{Color, DrawCommand, FilledRect, ImageId, RecordingSurface, SpriteSlot, Surface};
