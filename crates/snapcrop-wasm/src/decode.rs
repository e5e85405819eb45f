//! Image decoding WASM bindings.
//!
//! This module exposes the snapcrop-core image decoding to JavaScript,
//! for hosts that prefer decoding in WASM over `createImageBitmap` (the
//! WASM path applies EXIF orientation and yields raw RGBA directly).
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@snapcrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const bitmap = decode_image(bytes);
//! console.log(`Decoded ${bitmap.width}x${bitmap.height}`);
//! view.source_ready(bitmap, performance.now());
//! ```

use crate::types::JsBitmap;
use snapcrop_core::decode_image as core_decode;
use wasm_bindgen::prelude::*;

/// Decode an image from bytes.
///
/// The format is detected from the content (JPEG and PNG are enabled).
/// EXIF orientation is applied, so the pixels come out the way the
/// camera saw them.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsBitmap` with RGBA pixel data, or an error if decoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a recognized image format
/// - The image data is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    core_decode(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
