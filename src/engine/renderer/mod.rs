// Render handoff
//
// The core never draws. Each tick every entity hands its current frame and
// position to a `RenderSink`; whatever backend sits behind the sink does the
// actual drawing.

use crate::engine::assets::{FrameRegion, TextureHandle};
use glam::Vec2;

/// An 8-bit RGB clear color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One frame region drawn at one world position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Texture the region is cut from
    pub texture: TextureHandle,
    /// Pixel rectangle inside the texture
    pub region: FrameRegion,
    /// Position in world space
    pub position: Vec2,
    /// Size of the visual body in world units
    pub size: Vec2,
}

/// Receiver for per-tick draw requests
pub trait RenderSink {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Color);

    /// Queue one region for drawing
    fn draw(&mut self, command: DrawCommand);
}

/// Sink that queues draw commands until the next clear
#[derive(Debug, Default)]
pub struct DrawList {
    clear_color: Option<Color>,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Color of the last clear, if any
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Get the number of commands queued for rendering
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl RenderSink for DrawList {
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
        self.commands.clear();
    }

    fn draw(&mut self, command: DrawCommand) {
        log::trace!(
            "draw {:?} at ({}, {})",
            command.region,
            command.position.x,
            command.position.y
        );
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(x: f32) -> DrawCommand {
        DrawCommand {
            texture: TextureHandle::for_path("test.png"),
            region: FrameRegion::new(0, 0, 16, 16),
            position: Vec2::new(x, 0.0),
            size: Vec2::new(10.0, 10.0),
        }
    }

    #[test]
    fn test_draw_list_queues_commands() {
        let mut list = DrawList::new();
        assert_eq!(list.command_count(), 0);
        assert_eq!(list.clear_color(), None);

        list.draw(command(1.0));
        list.draw(command(2.0));

        assert_eq!(list.command_count(), 2);
        assert_eq!(list.commands()[1].position, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_clear_resets_queue() {
        let mut list = DrawList::new();
        list.draw(command(1.0));
        list.clear(Color::rgb(90, 90, 90));

        assert_eq!(list.command_count(), 0);
        assert_eq!(list.clear_color(), Some(Color::rgb(90, 90, 90)));
    }
}
