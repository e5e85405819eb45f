//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Snapcrop types, handling the conversion between Rust and JavaScript
//! data representations.

use snapcrop_core::Bitmap;
use wasm_bindgen::prelude::*;

/// An RGBA bitmap wrapper for JavaScript.
///
/// Wraps the core `Bitmap` type. Pixels are RGBA8, row-major, 4 bytes
/// per pixel, so `pixels()` can be fed straight into an `ImageData` or
/// a canvas texture upload.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a
/// copy is made to JavaScript memory as a `Uint8Array`. For
/// performance-critical code, keep the bitmap in WASM memory and only
/// extract pixels when needed.
///
/// The `free()` method can be called to explicitly release WASM memory,
/// but this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a new JsBitmap from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Bitmap width in pixels
    /// * `height` - Bitmap height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsBitmap {
        JsBitmap {
            inner: Bitmap::new(width, height, pixels),
        }
    }

    /// Get the bitmap width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the bitmap height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately release a large bitmap.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    /// Wrap a core bitmap. Internal constructor used by the decode and
    /// crop bindings.
    pub(crate) fn from_bitmap(inner: Bitmap) -> JsBitmap {
        JsBitmap { inner }
    }

    /// Borrow the wrapped core bitmap, e.g. to hand content to the view
    /// or to the encoders.
    pub(crate) fn as_bitmap(&self) -> &Bitmap {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_bitmap_creation() {
        let b = JsBitmap::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(b.width(), 100);
        assert_eq!(b.height(), 50);
        assert_eq!(b.byte_length(), 20000);
    }

    #[test]
    fn test_js_bitmap_pixels_copy() {
        let pixels = vec![255u8, 0, 0, 255, 0, 255, 0, 128]; // 2 RGBA pixels
        let b = JsBitmap::new(2, 1, pixels.clone());
        assert_eq!(b.pixels(), pixels);
    }

    #[test]
    fn test_from_bitmap_keeps_data() {
        let b = JsBitmap::from_bitmap(Bitmap::blank(8, 4));
        assert_eq!(b.width(), 8);
        assert_eq!(b.height(), 4);
        assert_eq!(b.byte_length(), 8 * 4 * 4);
        assert_eq!(b.as_bitmap().width, 8);
    }
}
