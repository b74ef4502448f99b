// Asset system
//
// Resolves texture paths, probes their pixel dimensions and slices
// spritesheets into indexed frame regions.

mod handle;
mod loader;
mod sheet;

pub use handle::TextureHandle;
pub use loader::{AssetLoader, TextureInfo};
pub use sheet::{FrameRegion, FrameSheet};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Spritesheet authoring errors
///
/// Both variants point at a mismatch between the sheet layout and the
/// animation definitions built on top of it, so they are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    #[error("Invalid grid: {rows}x{columns} cells over a {width}x{height} texture")]
    InvalidGrid {
        rows: u32,
        columns: u32,
        width: u32,
        height: u32,
    },

    #[error("Frame index {index} out of range (sheet has {frame_count} frames)")]
    IndexOutOfRange { index: u32, frame_count: u32 },
}
