// Asset path resolution and texture probing

use super::{AssetError, TextureHandle};
use std::path::{Path, PathBuf};

/// Supported texture file extensions
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// What the animation core needs to know about a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub fn new(handle: TextureHandle, width: u32, height: u32) -> Self {
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Asset loader responsible for finding texture files and reading their size
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Check if an asset exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).exists()
    }

    /// Read the pixel dimensions of a texture without decoding all of it
    pub fn probe_texture(&self, name: &str) -> Result<TextureInfo, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let supported = path
            .extension()
            .map(|ext| TEXTURE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
            .unwrap_or(false);
        if !supported {
            return Err(AssetError::LoadError(format!(
                "{} is not a supported texture format",
                name
            )));
        }

        let (width, height) = image::image_dimensions(&path)?;
        let handle = TextureHandle::for_path(name);
        log::info!(
            "Probed texture {} ({}x{}, id {:016x})",
            name,
            width,
            height,
            handle.id().as_u64()
        );

        Ok(TextureInfo::new(handle, width, height))
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
