// Intent-driven character controller

use std::collections::HashMap;

use glam::Vec2;
use log::debug;

use super::animation::{AnimationError, AnimationHandle, AnimationLibrary};
use super::entity::AnimatedEntity;
use super::state::{CharacterState, Facing, Intent};
use crate::engine::renderer::RenderSink;

/// Controller construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("No animation mapped for state {0:?}")]
    MissingClip(CharacterState),

    #[error("Animation for state {state:?} is unusable: {source}")]
    InvalidClip {
        state: CharacterState,
        source: AnimationError,
    },
}

/// One clip per character state, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateClips {
    clips: [AnimationHandle; 4],
}

impl StateClips {
    pub fn new(
        run_left: AnimationHandle,
        run_right: AnimationHandle,
        stand_left: AnimationHandle,
        stand_right: AnimationHandle,
    ) -> Self {
        Self {
            clips: [run_left, run_right, stand_left, stand_right],
        }
    }

    /// Build the table from a map, which must cover every state
    pub fn from_map(map: &HashMap<CharacterState, AnimationHandle>) -> Result<Self, ControllerError> {
        let clip = |state: CharacterState| {
            map.get(&state)
                .copied()
                .ok_or(ControllerError::MissingClip(state))
        };

        Ok(Self::new(
            clip(CharacterState::RunningLeft)?,
            clip(CharacterState::RunningRight)?,
            clip(CharacterState::StandingLeft)?,
            clip(CharacterState::StandingRight)?,
        ))
    }

    pub fn get(&self, state: CharacterState) -> AnimationHandle {
        self.clips[state.slot()]
    }

    /// Check that every clip exists in `library` and has at least one frame
    pub fn validate(&self, library: &AnimationLibrary) -> Result<(), ControllerError> {
        for state in CharacterState::ALL {
            let animation = library
                .get(self.get(state))
                .map_err(|source| ControllerError::InvalidClip { state, source })?;
            if animation.is_empty() {
                return Err(ControllerError::InvalidClip {
                    state,
                    source: AnimationError::EmptyAnimation,
                });
            }
        }
        Ok(())
    }
}

/// Drives an animated entity from movement intents.
///
/// The active clip always matches the current state. A clip is only swapped
/// when the state actually changes, so holding a direction keeps the running
/// clip playing instead of restarting it every tick.
#[derive(Debug)]
pub struct CharacterController {
    entity: AnimatedEntity,
    clips: StateClips,
    state: CharacterState,
    facing: Facing,
    /// Horizontal speed in world units per second
    speed: f32,
    /// Number of clip swaps performed so far
    swaps: u64,
}

impl CharacterController {
    /// Create a controller standing right at `position`
    pub fn new(
        size: Vec2,
        position: Vec2,
        clips: StateClips,
        speed: f32,
        library: &AnimationLibrary,
    ) -> Result<Self, ControllerError> {
        clips.validate(library)?;

        let state = CharacterState::default();
        Ok(Self {
            entity: AnimatedEntity::new(size, position, clips.get(state)),
            clips,
            state,
            facing: state.facing(),
            speed,
            swaps: 0,
        })
    }

    /// Apply one tick of intent: move, then switch state if needed.
    /// Returns true when the active clip was swapped.
    pub fn apply(&mut self, intent: Intent, dt: f32) -> bool {
        let dt = dt.max(0.0);

        match intent {
            Intent::MoveLeft => {
                self.entity.body.position.x -= self.speed * dt;
                self.facing = Facing::Left;
            }
            Intent::MoveRight => {
                self.entity.body.position.x += self.speed * dt;
                self.facing = Facing::Right;
            }
            Intent::Stop => {}
        }

        self.set_state(CharacterState::target(intent, self.facing))
    }

    pub fn run_left(&mut self, dt: f32) -> bool {
        self.apply(Intent::MoveLeft, dt)
    }

    pub fn run_right(&mut self, dt: f32) -> bool {
        self.apply(Intent::MoveRight, dt)
    }

    pub fn stop(&mut self) -> bool {
        self.apply(Intent::Stop, 0.0)
    }

    fn set_state(&mut self, target: CharacterState) -> bool {
        if target == self.state {
            return false;
        }

        debug!("Character state {:?} -> {:?}", self.state, target);
        self.state = target;
        self.entity.set_animation(self.clips.get(target));
        self.swaps += 1;
        true
    }

    /// Advance the active clip
    pub fn update(&mut self, dt: f32, library: &mut AnimationLibrary) -> Result<(), AnimationError> {
        self.entity.update(dt, library)
    }

    pub fn render(&self, sink: &mut dyn RenderSink) {
        self.entity.render(sink);
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn position(&self) -> Vec2 {
        self.entity.body.position
    }

    pub fn active_animation(&self) -> AnimationHandle {
        self.entity.animation()
    }

    pub fn entity(&self) -> &AnimatedEntity {
        &self.entity
    }

    /// Number of clip swaps since construction
    pub fn swap_count(&self) -> u64 {
        self.swaps
    }
}
