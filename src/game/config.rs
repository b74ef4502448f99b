// Startup configuration
//
// Every tunable the game needs, passed explicitly to whatever consumes it.

use glam::Vec2;

use crate::engine::input::{default_bindings, Action, InputSource};
use crate::engine::renderer::Color;
use crate::game::characters::DEFAULT_SWITCH_INTERVAL;

/// Sheet indices making up one clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig {
    pub frames: &'static [u32],
    /// Seconds each frame stays on screen
    pub switch_interval: f32,
}

impl ClipConfig {
    pub const fn new(frames: &'static [u32]) -> Self {
        Self {
            frames,
            switch_interval: DEFAULT_SWITCH_INTERVAL,
        }
    }
}

/// Clips for each character state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterClips {
    pub run_left: ClipConfig,
    pub run_right: ClipConfig,
    pub stand_left: ClipConfig,
    pub stand_right: ClipConfig,
}

/// Scenery sharing the player sheet. One frame stays still, more frames loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropConfig {
    pub clip: ClipConfig,
    pub size: Vec2,
    pub position: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    // Window
    pub window_title: &'static str,
    pub window_width: u32,
    pub window_height: u32,
    /// Clear color behind every frame
    pub background: Color,

    // Assets
    /// Directory asset paths are resolved against
    pub asset_root: String,
    /// Player spritesheet, relative to `asset_root`
    pub sheet_path: String,
    pub sheet_rows: u32,
    pub sheet_columns: u32,

    // Player
    pub clips: CharacterClips,
    /// Body size in world units
    pub body_size: Vec2,
    pub spawn: Vec2,
    /// Running speed in world units per second
    pub run_speed: f32,

    // World
    /// Drawn before the player, in order
    pub props: Vec<PropConfig>,

    // Input
    pub key_bindings: Vec<(InputSource, Action)>,
}

/// Layout of the bundled main character sheet: left-facing poses on the
/// top row, right-facing on the bottom, standing pose first
pub const MAIN_CHARACTER_CLIPS: CharacterClips = CharacterClips {
    run_left: ClipConfig::new(&[1, 2, 3]),
    run_right: ClipConfig::new(&[5, 6, 7]),
    stand_left: ClipConfig::new(&[0]),
    stand_right: ClipConfig::new(&[4]),
};

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Sprite Runner",
            window_width: 1200,
            window_height: 600,
            background: Color::rgb(90, 90, 90),
            asset_root: ".".to_string(),
            sheet_path: "images/maincharacter.png".to_string(),
            sheet_rows: 2,
            sheet_columns: 4,
            clips: MAIN_CHARACTER_CLIPS,
            body_size: Vec2::new(10.0, 10.0),
            spawn: Vec2::new(50.0, 50.0),
            run_speed: 500.0,
            props: Vec::new(),
            key_bindings: default_bindings(),
        }
    }
}

impl GameConfig {
    /// Defaults, with the spritesheet path taken from the first argument if given
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = Self::default();
        if let Some(path) = args.into_iter().nth(1) {
            config.sheet_path = path;
        }
        config
    }
}
