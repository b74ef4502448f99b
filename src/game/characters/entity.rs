// Renderable entities: a visual body plus an optional active animation

use glam::Vec2;

use super::animation::{AnimationError, AnimationHandle, AnimationLibrary, FrameRef};
use super::controller::CharacterController;
use crate::engine::renderer::{DrawCommand, RenderSink};

/// Position, size and the frame currently on display
#[derive(Debug, Clone)]
pub struct VisualBody {
    /// Size in world units (width, height)
    pub size: Vec2,
    /// Position in world space
    pub position: Vec2,
    /// Frame to draw on the next render pass
    frame: Option<FrameRef>,
}

impl VisualBody {
    pub fn new(size: Vec2, position: Vec2) -> Self {
        Self {
            size,
            position,
            frame: None,
        }
    }

    pub fn frame(&self) -> Option<&FrameRef> {
        self.frame.as_ref()
    }

    pub fn set_frame(&mut self, frame: FrameRef) {
        self.frame = Some(frame);
    }

    /// Hand the current frame to `sink`. Nothing is drawn before the first frame is set.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        if let Some(frame) = &self.frame {
            sink.draw(DrawCommand {
                texture: frame.texture(),
                region: frame.region(),
                position: self.position,
                size: self.size,
            });
        }
    }
}

/// An entity showing a fixed frame
#[derive(Debug, Clone)]
pub struct StaticEntity {
    pub body: VisualBody,
}

impl StaticEntity {
    pub fn new(frame: FrameRef, size: Vec2, position: Vec2) -> Self {
        let mut body = VisualBody::new(size, position);
        body.set_frame(frame);
        Self { body }
    }

    pub fn set_frame(&mut self, frame: FrameRef) {
        self.body.set_frame(frame);
    }

    pub fn render(&self, sink: &mut dyn RenderSink) {
        self.body.render(sink);
    }
}

/// An entity whose frame comes from one active animation
#[derive(Debug, Clone)]
pub struct AnimatedEntity {
    pub body: VisualBody,
    active: AnimationHandle,
}

impl AnimatedEntity {
    pub fn new(size: Vec2, position: Vec2, animation: AnimationHandle) -> Self {
        Self {
            body: VisualBody::new(size, position),
            active: animation,
        }
    }

    /// Handle of the clip currently driving this entity
    pub fn animation(&self) -> AnimationHandle {
        self.active
    }

    /// Switch clips. The new clip resumes from wherever it was left.
    pub fn set_animation(&mut self, animation: AnimationHandle) {
        self.active = animation;
    }

    /// Advance the active clip and keep its frame for the next render
    pub fn update(&mut self, dt: f32, library: &mut AnimationLibrary) -> Result<(), AnimationError> {
        let frame = library.get_mut(self.active)?.advance(dt)?.clone();
        self.body.set_frame(frame);
        Ok(())
    }

    pub fn render(&self, sink: &mut dyn RenderSink) {
        self.body.render(sink);
    }
}

/// The closed set of entity kinds
#[derive(Debug)]
pub enum Entity {
    Static(StaticEntity),
    Animated(AnimatedEntity),
    Controlled(CharacterController),
}

impl Entity {
    pub fn body(&self) -> &VisualBody {
        match self {
            Self::Static(entity) => &entity.body,
            Self::Animated(entity) => &entity.body,
            Self::Controlled(controller) => &controller.entity().body,
        }
    }

    /// The controller, for player-driven entities
    pub fn controller(&self) -> Option<&CharacterController> {
        match self {
            Self::Controlled(controller) => Some(controller),
            _ => None,
        }
    }

    /// Advance any animation the entity carries
    pub fn update(&mut self, dt: f32, library: &mut AnimationLibrary) -> Result<(), AnimationError> {
        match self {
            Self::Static(_) => Ok(()),
            Self::Animated(entity) => entity.update(dt, library),
            Self::Controlled(controller) => controller.update(dt, library),
        }
    }

    pub fn render(&self, sink: &mut dyn RenderSink) {
        self.body().render(sink);
    }
}
