// Input manager - turns window key events into action state

use super::action::InputSource;
use super::config::InputConfig;
use super::state::InputState;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Coordinates key bindings and the action state they drive
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    state: InputState,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical key codes are bound
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_input(
                InputSource::key(key_code),
                event.state == ElementState::Pressed,
                event.repeat,
            );
        }
    }

    /// Apply a press or release of `source`. OS key repeats are dropped.
    pub fn process_input(&mut self, source: InputSource, pressed: bool, repeat: bool) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };

        if pressed {
            if !repeat {
                self.state.press(action);
            }
        } else {
            self.state.release(action);
        }
    }

    /// Start a new tick. Call once per tick after the state was consumed.
    pub fn update(&mut self) {
        self.state.update();
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Drop every held action, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
