// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings. Later entries win.
    pub fn from_bindings(bindings: &[(InputSource, Action)]) -> Self {
        let mut config = Self::new();
        for &(source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action. A source drives at most one action.
    pub fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            if previous != action {
                log::debug!("Rebound {:?} from {:?} to {:?}", source, previous, action);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(&super::action::default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyA)),
            Some(Action::MoveLeft)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::ArrowRight)),
            Some(Action::MoveRight)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyP)),
            Some(Action::Pause)
        );
    }

    #[test]
    fn test_empty_config_binds_nothing() {
        let config = InputConfig::new();
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyA)), None);
    }

    #[test]
    fn test_rebind_source() {
        let source = InputSource::key(KeyCode::KeyA);
        let config =
            InputConfig::from_bindings(&[(source, Action::MoveLeft), (source, Action::MoveRight)]);

        assert_eq!(config.get_action(source), Some(Action::MoveRight));
    }
}
