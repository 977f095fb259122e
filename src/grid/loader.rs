//! Image decoding into a [`PixelGrid`].

use std::path::Path;

use image::RgbImage;

use crate::error::{PietError, Result};
use crate::types::Colour;

use super::PixelGrid;

impl PixelGrid {
    /// Decode an image file (PNG, GIF, BMP, ...) into a grid.
    ///
    /// Alpha is dropped; animated formats contribute their first frame.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .map_err(|e| PietError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to decode image: {}", e),
            })?
            .to_rgb8();

        Self::from_image(&img)
    }

    /// Convert an already decoded RGB image.
    pub fn from_image(img: &RgbImage) -> Result<Self> {
        let pixels = img.pixels().map(|p| Colour::from(p.0)).collect();
        Self::new(img.width() as usize, img.height() as usize, pixels)
    }
}
