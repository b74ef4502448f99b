// Sprite Runner library
//
// The animation engine and game logic behind the `sprite-runner` binary,
// exposed for tests and for embedding in another event loop.

pub mod engine;
pub mod game;
