// Game-side modules: characters, startup configuration and the running session

pub mod characters;
pub mod config;
pub mod session;
