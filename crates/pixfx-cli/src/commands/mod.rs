//! CLI command implementations

pub mod filter;

use anyhow::{Context, Result};
use pixfx_core::PixelBuffer;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    pixfx_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    pixfx_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
