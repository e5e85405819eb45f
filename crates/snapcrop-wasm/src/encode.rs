//! Image encoding WASM bindings.
//!
//! This module exposes the snapcrop-core encoders to JavaScript, so a
//! crop result can leave the page as a downloadable file.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@snapcrop/wasm';
//!
//! const cropped = view.crop();
//! const png = encode_png(cropped);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsBitmap;
use snapcrop_core::{encode_jpeg as core_jpeg, encode_png as core_png};
use wasm_bindgen::prelude::*;

/// Encode a bitmap to PNG bytes. The alpha channel survives.
///
/// # Arguments
///
/// * `bitmap` - The bitmap to encode
///
/// # Returns
///
/// A `Uint8Array` containing the PNG bytes, or an error if encoding
/// fails.
///
/// # Errors
///
/// Returns an error if the bitmap has zero dimensions or its pixel
/// buffer does not match them.
#[wasm_bindgen]
pub fn encode_png(bitmap: &JsBitmap) -> Result<Vec<u8>, JsValue> {
    core_png(bitmap.as_bitmap()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a bitmap to JPEG bytes. Alpha is dropped; quality is clamped
/// to 1-100.
///
/// # Arguments
///
/// * `bitmap` - The bitmap to encode
/// * `quality` - JPEG quality (1-100, recommended: 90)
///
/// # Returns
///
/// A `Uint8Array` containing the JPEG bytes, or an error if encoding
/// fails.
#[wasm_bindgen]
pub fn encode_jpeg(bitmap: &JsBitmap, quality: u8) -> Result<Vec<u8>, JsValue> {
    core_jpeg(bitmap.as_bitmap(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for encode bindings.
///
/// Note: the binding functions return `Result<T, JsValue>`, which only
/// works on wasm32 targets. The native test below goes through the core
/// encoder directly to verify the data path.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_bitmap_encodes_via_core() {
        let b = JsBitmap::new(10, 10, vec![128u8; 10 * 10 * 4]);
        let png = snapcrop_core::encode_png(b.as_bitmap()).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_magic() {
        let b = JsBitmap::new(4, 4, vec![255u8; 4 * 4 * 4]);
        let png = encode_png(&b).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_magic() {
        let b = JsBitmap::new(4, 4, vec![255u8; 4 * 4 * 4]);
        let jpeg = encode_jpeg(&b, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_empty_bitmap_errors() {
        let b = JsBitmap::new(0, 0, Vec::new());
        assert!(encode_png(&b).is_err());
        assert!(encode_jpeg(&b, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_mismatched_buffer_errors() {
        let b = JsBitmap::new(10, 10, vec![0u8; 12]);
        assert!(encode_png(&b).is_err());
    }
}
