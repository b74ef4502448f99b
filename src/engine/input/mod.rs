// Input handling system
//
// - `action`: game actions and default key bindings
// - `config`: rebindable key -> action mapping
// - `state`: pressed / just pressed / just released actions
// - `manager`: feeds winit key events through the config into the state
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new(InputConfig::from_bindings(&default_bindings()));
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per tick
// let intent = Intent::from_input(input.state());
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::{default_bindings, Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use state::InputState;
