//! Abstract 2D drawing surface
//!
//! A canvas-style immediate-mode API. The host backs it with whatever it
//! renders with; `RecordingSurface` keeps the calls in memory instead.

use glam::Vec2;

use crate::sim::Aabb;

/// RGBA color, components in 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Opaque color from hue (degrees, any range), saturation and lightness (0-1)
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgba(r + m, g + m, b + m, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Handle to an image the host has loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Load state of an externally loaded sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteSlot {
    /// Still loading
    #[default]
    Pending,
    Ready(ImageId),
    /// Load failed; drawn with the placeholder for the rest of the run
    Failed,
}

impl SpriteSlot {
    pub fn image(&self) -> Option<ImageId> {
        match self {
            SpriteSlot::Ready(id) => Some(*id),
            SpriteSlot::Pending | SpriteSlot::Failed => None,
        }
    }
}

/// Canvas-style drawing context
pub trait Surface {
    fn clear_rect(&mut self, rect: Aabb);
    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Aabb);
    fn draw_image(&mut self, image: ImageId, rect: Aabb);
    /// Multiplier applied to everything drawn afterwards
    fn set_global_alpha(&mut self, alpha: f32);
    /// Push the current transform
    fn save(&mut self);
    /// Pop the transform pushed by the matching `save`
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn scale(&mut self, factor: Vec2);
}

/// One recorded surface call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Aabb),
    FillColor(Color),
    FillRect(Aabb),
    DrawImage { image: ImageId, rect: Aabb },
    GlobalAlpha(f32),
    Save,
    Restore,
    Translate(Vec2),
    Scale(Vec2),
}

/// A filled rectangle with the fill state that was active when it was drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub rect: Aabb,
    pub color: Color,
    pub global_alpha: f32,
}

/// Surface that records calls instead of drawing
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded calls (the host does this between frames)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recording and list every `fill_rect` with its fill color
    /// and global alpha
    pub fn filled_rects(&self) -> Vec<FilledRect> {
        let mut color = Color::rgba(0.0, 0.0, 0.0, 1.0);
        let mut global_alpha = 1.0;
        let mut out = Vec::new();

        for command in &self.commands {
            match *command {
                DrawCommand::FillColor(c) => color = c,
                DrawCommand::GlobalAlpha(a) => global_alpha = a,
                DrawCommand::FillRect(rect) => out.push(FilledRect {
                    rect,
                    color,
                    global_alpha,
                }),
                _ => {}
            }
        }
        out
    }

    pub fn images_drawn(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawImage { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Aabb) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn fill_rect(&mut self, rect: Aabb) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn draw_image(&mut self, image: ImageId, rect: Aabb) {
        self.commands.push(DrawCommand::DrawImage { image, rect });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn scale(&mut self, factor: Vec2) {
        self.commands.push(DrawCommand::Scale(factor));
    }
}
