//! Snapcrop WASM - WebAssembly bindings for Snapcrop
//!
//! This crate exposes the snapcrop-core crop view to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `view` - The crop view: layout, gestures, animation ticks, crop
//! - `types` - WASM-compatible wrapper types for bitmap data
//! - `decode` - Image decoding bindings (format detection, EXIF orientation)
//! - `encode` - Image encoding bindings (PNG, JPEG export)
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropView, decode_image, encode_png } from '@snapcrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const view = new JsCropView({});
//! view.layout(360, 640);
//! view.set_source('photo-1');
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! view.source_ready(decode_image(bytes), performance.now());
//!
//! // ...gestures and ticks drive the view; export when done:
//! const png = encode_png(view.crop());
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod types;
mod view;

// Re-export public types
pub use decode::decode_image;
pub use encode::{encode_jpeg, encode_png};
pub use types::JsBitmap;
pub use view::JsCropView;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Panic messages surface through the default abort handler; a
    // console panic hook can be wired here if diagnosing in-browser
    // crashes ever becomes necessary.
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
