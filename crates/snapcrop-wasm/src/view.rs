//! Crop view WASM bindings.
//!
//! This module exposes the snapcrop-core [`CropView`] to JavaScript. The
//! host owns the render loop and the input handling; it forwards gesture
//! callbacks and frame ticks here, each stamped with
//! `performance.now()`, and reads back the state it needs to paint.
//!
//! # Example
//!
//! ```typescript
//! import init, { JsCropView, decode_image } from '@snapcrop/wasm';
//!
//! await init();
//!
//! const view = new JsCropView({ max_scale: 3 });
//! view.layout(canvas.width, canvas.height);
//!
//! view.set_source('photo-1');
//! view.source_ready(decode_image(bytes), performance.now());
//!
//! canvas.onpointermove = (e) => {
//!   view.on_moved(e.movementX, e.movementY, performance.now());
//!   draw(view.crop_info());
//! };
//!
//! function frame(now) {
//!   if (view.tick(now)) draw(view.crop_info());
//!   requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

use crate::types::JsBitmap;
use serde::Deserialize;
use snapcrop_core::{CropConfig, CropView, GestureEvent, Point, SourceSeed};
use wasm_bindgen::prelude::*;

/// JS-side seed shape: `{ scale, offset_x, offset_y }`.
#[derive(Deserialize)]
struct SeedJs {
    scale: f32,
    #[serde(default)]
    offset_x: f32,
    #[serde(default)]
    offset_y: f32,
}

/// A gesture-driven crop view for one widget instance.
///
/// All methods taking `now_ms` expect milliseconds from a monotonic
/// clock; `performance.now()` is the natural source in a browser.
#[wasm_bindgen]
pub struct JsCropView {
    inner: CropView,
}

#[wasm_bindgen]
impl JsCropView {
    /// Create a view from a configuration object.
    ///
    /// # Arguments
    ///
    /// * `config` - A plain object; missing fields take their defaults.
    ///   Recognized fields: `result_width_percent`, `result_height_percent`
    ///   (both 0-1), `max_scale` (1-5), `background_alpha` (0-1),
    ///   `with_border`.
    ///
    /// # Errors
    ///
    /// Returns an error if the object cannot be deserialized or a field
    /// is out of range.
    ///
    /// # Example
    ///
    /// ```typescript
    /// const view = new JsCropView({ result_width_percent: 0.9, max_scale: 3 });
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCropView, JsValue> {
        let config: CropConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?;
        let inner = CropView::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsCropView { inner })
    }

    /// Record the container size in CSS pixels. Call again on resize.
    pub fn layout(&mut self, width: f32, height: f32) {
        self.inner.layout(width, height);
    }

    /// Switch to a new source, keeping the current transform. Follow up
    /// with [`source_ready`](JsCropView::source_ready) once the
    /// content's pixels are available.
    pub fn set_source(&mut self, id: String) {
        self.inner.set_source(id, None);
    }

    /// Switch to a new source with an initial transform, e.g. to restore
    /// a previous session. The seed is applied when the content arrives.
    ///
    /// # Arguments
    ///
    /// * `seed` - `{ scale, offset_x, offset_y }`; the offsets default
    ///   to 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed object cannot be deserialized.
    pub fn set_source_with_seed(&mut self, id: String, seed: JsValue) -> Result<(), JsValue> {
        let seed: SeedJs = serde_wasm_bindgen::from_value(seed)
            .map_err(|e| JsValue::from_str(&format!("Invalid source seed: {}", e)))?;
        self.inner.set_source(
            id,
            Some(SourceSeed {
                scale: seed.scale,
                offset: Point::new(seed.offset_x, seed.offset_y),
            }),
        );
        Ok(())
    }

    /// Hand over the decoded content for the current source.
    ///
    /// Note: the pixel data is copied into the view, so the bitmap can
    /// be freed afterwards.
    pub fn source_ready(&mut self, content: &JsBitmap, now_ms: f64) {
        self.inner.source_ready(content.as_bitmap().clone(), now_ms);
    }

    /// Pinch step: multiply the scale by `factor`.
    pub fn on_scaled(&mut self, factor: f32, now_ms: f64) {
        self.inner
            .handle_gesture(GestureEvent::Scaled { factor }, now_ms);
    }

    /// Pinch ended: snap the scale back into range if needed.
    pub fn on_scale_ended(&mut self, now_ms: f64) {
        self.inner.handle_gesture(GestureEvent::ScaleEnded, now_ms);
    }

    /// Drag step in container pixels.
    pub fn on_moved(&mut self, dx: f32, dy: f32, now_ms: f64) {
        self.inner
            .handle_gesture(GestureEvent::Moved { dx, dy }, now_ms);
    }

    /// Drag released with velocity, in pixels per second.
    pub fn on_flinged(&mut self, velocity_x: f32, velocity_y: f32, now_ms: f64) {
        self.inner.handle_gesture(
            GestureEvent::Flinged {
                velocity_x,
                velocity_y,
            },
            now_ms,
        );
    }

    /// Drag ended: snap the content back over the crop window if needed.
    pub fn on_move_ended(&mut self, now_ms: f64) {
        self.inner.handle_gesture(GestureEvent::MoveEnded, now_ms);
    }

    /// Advance animations one frame. Returns `true` when the transform
    /// changed and the host should repaint.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.inner.tick(now_ms)
    }

    /// Whether any snap or fling is still in flight.
    pub fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    /// Current crop state as a plain object
    /// (`{ scale, offset, bounds, restriction }`), or `undefined` before
    /// layout and content are ready.
    pub fn crop_info(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.crop_info())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Overlay paint instructions as a plain object
    /// (`{ shade, shade_alpha, border }`), or `undefined` before layout.
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.overlay())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Extract the crop window from the content as currently displayed.
    ///
    /// # Errors
    ///
    /// Returns an error when no content is attached yet, or when the
    /// content was dragged clear of the crop window.
    pub fn crop(&self) -> Result<JsBitmap, JsValue> {
        self.inner
            .crop()
            .map(JsBitmap::from_bitmap)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Register a callback for throttled crop-state changes. The
    /// callback receives `(sourceId: string, info)` with the same shape
    /// as [`crop_info`](JsCropView::crop_info). At most one call lands
    /// per throttle window; the latest state wins.
    pub fn set_on_crop_change(&mut self, callback: js_sys::Function) {
        self.inner.set_on_crop_change(Box::new(move |id, info| {
            let payload = match serde_wasm_bindgen::to_value(info) {
                Ok(v) => v,
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "crop change payload failed to serialize: {}",
                        e
                    )));
                    return;
                }
            };
            if let Err(e) = callback.call2(&JsValue::NULL, &JsValue::from_str(id), &payload) {
                web_sys::console::error_1(&e);
            }
        }));
    }
}
