//! Texture data and image loading.

use std::path::Path;

use vantage_core::Handle;

use crate::error::{ResourceError, ResourceResult};

/// Handle to a texture stored in a scene's texture arena.
pub type TextureHandle = Handle<Texture>;

/// An RGBA8 texture image.
#[derive(Debug, Clone)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row-major, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Create a texture from raw RGBA8 pixel data.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when the pixel buffer length does not match
    /// the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A 1x1 texture of a single color, useful as a material fallback.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self::from_pixels(1, 1, rgba.to_vec())
    }

    /// Load a texture from an image file, converting to RGBA8.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FileNotFound`] when the path does not exist
    /// and [`ResourceError::Image`] when decoding fails.
    pub fn load(path: &Path) -> ResourceResult<Self> {
        if !path.exists() {
            return Err(ResourceError::FileNotFound(path.to_path_buf()));
        }
        let image = image::open(path)?.into_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            pixels: image.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_texture() {
        let t = Texture::solid([255, 0, 0, 255]);
        assert_eq!((t.width, t.height), (1, 1));
        assert_eq!(t.pixels, vec![255, 0, 0, 255]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Texture::load(Path::new("no/such/texture.png")).unwrap_err();
        assert!(matches!(err, ResourceError::FileNotFound(_)));
    }
}
