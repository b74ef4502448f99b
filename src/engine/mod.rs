// Engine modules: assets, input, timing, render handoff

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
