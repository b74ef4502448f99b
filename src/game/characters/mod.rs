// Character system
//
// This module contains everything related to animated characters:
// - Frame-sequence animations and the shared clip library
// - Visual bodies and the entity kinds built on them
// - Movement states and intents
// - The controller tying intent, state and active clip together

pub mod animation;
pub mod controller;
pub mod entity;
pub mod state;

// Re-export commonly used types
pub use animation::{Animation, AnimationError, AnimationLibrary, FrameRef, DEFAULT_SWITCH_INTERVAL};
pub use controller::{CharacterController, ControllerError, StateClips};
pub use entity::{AnimatedEntity, Entity, StaticEntity};
pub use state::{CharacterState, Intent};
