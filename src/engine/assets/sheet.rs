// Spritesheet slicing: a texture cut into a row-major grid of frames

use super::{SheetError, TextureHandle, TextureInfo};
use glam::Vec2;

/// A pixel rectangle within a spritesheet texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegion {
    /// Position in the texture (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,
}

impl FrameRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// UV coordinates (0.0 to 1.0) of this region for a texture of the given size
    /// Returns (uv_min, uv_max)
    pub fn uv(&self, texture_width: u32, texture_height: u32) -> (Vec2, Vec2) {
        let uv_min = Vec2::new(
            self.x as f32 / texture_width as f32,
            self.y as f32 / texture_height as f32,
        );
        let uv_max = Vec2::new(
            (self.x + self.width) as f32 / texture_width as f32,
            (self.y + self.height) as f32 / texture_height as f32,
        );
        (uv_min, uv_max)
    }
}

/// A texture split into `rows * columns` equally sized cells.
///
/// Cells are addressed by a linear index in row-major order. The cell size is
/// the integer quotient of the texture size by the grid size, so any leftover
/// pixels on the right or bottom edge are never covered by a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSheet {
    texture: TextureInfo,
    rows: u32,
    columns: u32,
    cell_width: u32,
    cell_height: u32,
}

impl FrameSheet {
    /// Slice `texture` into a `rows` x `columns` grid
    pub fn new(texture: TextureInfo, rows: u32, columns: u32) -> Result<Self, SheetError> {
        let invalid = SheetError::InvalidGrid {
            rows,
            columns,
            width: texture.width,
            height: texture.height,
        };

        if rows == 0 || columns == 0 || texture.width == 0 || texture.height == 0 {
            return Err(invalid);
        }

        let cell_width = texture.width / columns;
        let cell_height = texture.height / rows;

        // A grid finer than the texture would produce zero-sized frames
        if cell_width == 0 || cell_height == 0 {
            return Err(invalid);
        }

        if texture.width % columns != 0 || texture.height % rows != 0 {
            log::warn!(
                "Texture {}x{} does not divide evenly into {}x{} cells, edge pixels are unused",
                texture.width,
                texture.height,
                rows,
                columns
            );
        }

        Ok(Self {
            texture,
            rows,
            columns,
            cell_width,
            cell_height,
        })
    }

    /// Number of addressable frames
    pub fn frame_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Check that `index` addresses a frame of this sheet
    pub fn check_index(&self, index: u32) -> Result<(), SheetError> {
        if index >= self.frame_count() {
            return Err(SheetError::IndexOutOfRange {
                index,
                frame_count: self.frame_count(),
            });
        }
        Ok(())
    }

    /// Pixel rectangle of the frame at `index`
    pub fn frame_region(&self, index: u32) -> Result<FrameRegion, SheetError> {
        self.check_index(index)?;

        let column = index % self.columns;
        let row = index / self.columns;

        Ok(FrameRegion::new(
            column * self.cell_width,
            row * self.cell_height,
            self.cell_width,
            self.cell_height,
        ))
    }

    /// All frame regions in index order
    pub fn regions(&self) -> impl Iterator<Item = FrameRegion> + '_ {
        (0..self.frame_count()).map(move |index| {
            FrameRegion::new(
                (index % self.columns) * self.cell_width,
                (index / self.columns) * self.cell_height,
                self.cell_width,
                self.cell_height,
            )
        })
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture.handle
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Size of one cell in pixels (width, height)
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }
}
