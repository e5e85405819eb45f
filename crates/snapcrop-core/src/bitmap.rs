//! RGBA pixel buffer shared by decode, extraction, and encode.

use image::RgbaImage;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Decoded image content.
///
/// Pixels are RGBA8, row-major, 4 bytes per pixel, the layout browser
/// canvases and GPU uploads consume directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Bitmap {
        Bitmap {
            width,
            height,
            pixels,
        }
    }

    /// A zero-filled (transparent black) bitmap.
    pub fn blank(width: u32, height: u32) -> Bitmap {
        Bitmap {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    pub fn from_rgba_image(img: RgbaImage) -> Bitmap {
        let width = img.width();
        let height = img.height();
        Bitmap {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Rebuild the `image` crate view of this buffer. `None` when the
    /// buffer length does not match the dimensions.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
