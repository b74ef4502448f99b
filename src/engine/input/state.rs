// Pressed-action state sampled once per tick

use super::action::Action;
use std::collections::HashSet;

/// Which actions are held, and which changed since the last tick
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were just pressed this tick
    just_pressed: HashSet<Action>,

    /// Actions that were just released this tick
    just_released: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this tick
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Forget per-tick edges. Call once per tick after the state was consumed.
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        assert!(input.is_pressed(Action::MoveLeft));
        assert!(input.just_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_release_action() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.update();
        input.release(Action::MoveLeft);
        assert!(!input.is_pressed(Action::MoveLeft));
        assert!(input.just_released(Action::MoveLeft));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = InputState::new();
        input.press(Action::Quit);
        input.update();

        assert!(input.is_pressed(Action::Quit));
        assert!(!input.just_pressed(Action::Quit));
    }

    #[test]
    fn test_release_unpressed_is_ignored() {
        let mut input = InputState::new();
        input.release(Action::MoveRight);
        assert!(!input.just_released(Action::MoveRight));
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveRight);
        input.reset();

        assert!(!input.is_pressed(Action::MoveLeft));
        assert!(!input.is_pressed(Action::MoveRight));
    }
}
