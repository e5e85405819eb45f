//! The crop view orchestrator.
//!
//! Owns the layout, the axis animators, the source lifecycle, and the
//! throttled change stream; routes gesture events; extracts crop
//! results. Hosts drive it from their frame scheduler: gesture events
//! and `tick` calls all carry the host's monotonic `now_ms`.
//!
//! Everything is single-threaded by construction. The view holds no
//! locks and spawns nothing; concurrency, if any, lives in the host's
//! event loop.

use crate::animator::{PanAnimator, ZoomAnimator};
use crate::bitmap::Bitmap;
use crate::config::{ConfigError, CropConfig};
use crate::extract::{extract, ExtractError};
use crate::geometry::{fit_rect, restriction_rect, transformed_bounds, Point, Rect, ScaleXy};
use crate::gesture::GestureEvent;
use crate::notify::{CropChangeListener, CropInfo, Throttle};
use crate::overlay::{overlay_layout, OverlayLayout};

use serde::{Deserialize, Serialize};

/// Initial transform to apply when a source's content arrives.
///
/// Values are absolute: the seeded scale replaces the current one rather
/// than multiplying it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceSeed {
    pub scale: f32,
    pub offset: Point,
}

/// The animators plus the fitted content frame they operate on. Built
/// once the container size and the content's natural size are both
/// known.
struct Engine {
    base: Rect,
    zoom: ZoomAnimator,
    pan_x: PanAnimator,
    pan_y: PanAnimator,
}

/// Gesture-driven crop state for one widget instance.
pub struct CropView {
    config: CropConfig,
    container: Option<Rect>,
    restriction: Option<Rect>,
    source_id: Option<String>,
    pending_seed: Option<SourceSeed>,
    content: Option<Bitmap>,
    engine: Option<Engine>,
    throttle: Throttle,
    listener: Option<CropChangeListener>,
}

impl CropView {
    /// Build a view from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] when any field is out of range;
    /// no view exists in that case.
    pub fn new(config: CropConfig) -> Result<CropView, ConfigError> {
        config.validate()?;
        Ok(CropView {
            config,
            container: None,
            restriction: None,
            source_id: None,
            pending_seed: None,
            content: None,
            engine: None,
            throttle: Throttle::new(),
            listener: None,
        })
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// The crop window, once a layout has been recorded.
    pub fn restriction(&self) -> Option<Rect> {
        self.restriction
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Register the listener for throttled crop-state changes.
    pub fn set_on_crop_change(&mut self, listener: CropChangeListener) {
        self.listener = Some(listener);
    }

    /// Record the container size and place the crop window.
    ///
    /// Safe to call again when the host resizes; the transform survives
    /// and the next gesture end re-establishes coverage against the new
    /// window. Degenerate sizes are ignored.
    pub fn layout(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        self.container = Some(Rect::from_size(width, height));
        self.restriction = Some(restriction_rect(
            width,
            height,
            self.config.result_width_percent,
            self.config.result_height_percent,
        ));
        self.rebuild_engine();
        self.apply_pending_seed();
    }

    /// Associate a new source identifier. The decoded content follows
    /// separately through [`source_ready`](CropView::source_ready);
    /// until it does, crop attempts fail rather than cropping the
    /// previous source. An optional seed is held back and applied when
    /// the content arrives. Without a seed the current transform is
    /// kept.
    pub fn set_source(&mut self, id: impl Into<String>, seed: Option<SourceSeed>) {
        self.source_id = Some(id.into());
        self.pending_seed = seed;
        self.content = None;
        self.throttle.clear();
    }

    /// Content-ready signal: the host decoded the current source and
    /// hands over its pixels. Fits the content into the container,
    /// applies a pending seed, and offers a state notification.
    pub fn source_ready(&mut self, content: Bitmap, now_ms: f64) {
        self.content = Some(content);
        self.rebuild_engine();
        self.apply_pending_seed();
        self.offer_state(now_ms);
    }

    /// Route one gesture event. Events arriving before layout and
    /// content are ready are ignored.
    pub fn handle_gesture(&mut self, event: GestureEvent, now_ms: f64) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        let snapped = match event {
            GestureEvent::Scaled { factor } => {
                engine.zoom.scale_by(factor);
                None
            }
            GestureEvent::ScaleEnded => {
                let scale = engine.zoom.re_scale_if_needed(now_ms);
                let offset = Point::new(engine.pan_x.offset(), engine.pan_y.offset());
                Some((scale, offset))
            }
            GestureEvent::Moved { dx, dy } => {
                let scale = engine.zoom.scale();
                engine.pan_x.move_by(dx, scale.x);
                engine.pan_y.move_by(dy, scale.y);
                None
            }
            GestureEvent::Flinged {
                velocity_x,
                velocity_y,
            } => {
                engine.pan_x.fling(velocity_x, now_ms);
                engine.pan_y.fling(velocity_y, now_ms);
                None
            }
            GestureEvent::MoveEnded => {
                // Snap-back targets compose with a concurrent scale
                // snap, so coverage is judged at the clamped scale.
                let eff = engine
                    .zoom
                    .scale()
                    .clamped(1.0, self.config.max_scale_f());
                let x = if engine.pan_x.is_flinging() {
                    engine.pan_x.offset()
                } else {
                    engine.pan_x.re_move_if_needed(eff.x, now_ms)
                };
                let y = if engine.pan_y.is_flinging() {
                    engine.pan_y.offset()
                } else {
                    engine.pan_y.re_move_if_needed(eff.y, now_ms)
                };
                Some((eff, Point::new(x, y)))
            }
        };
        // Gesture ends publish the scale and offset the snap will land
        // on, not the value it starts from; flings report through ticks
        // as the offset actually moves.
        if let Some((scale, offset)) = snapped {
            if let Some(info) = self.info_at(scale, offset) {
                self.offer_info(info, now_ms);
            }
        } else if !matches!(event, GestureEvent::Flinged { .. }) {
            self.offer_state(now_ms);
        }
    }

    /// Advance animations one frame. Returns whether the transform
    /// changed, so the host knows to repaint. Also flushes a trailing
    /// throttled notification when one is due.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let was_animating = self.is_animating();
        let changed = match &mut self.engine {
            Some(engine) => {
                let zoom_changed = engine.zoom.tick(now_ms);
                let eff = engine
                    .zoom
                    .scale()
                    .clamped(1.0, self.config.max_scale_f());
                let x_changed = engine.pan_x.tick(eff.x, now_ms);
                let y_changed = engine.pan_y.tick(eff.y, now_ms);
                zoom_changed || x_changed || y_changed
            }
            None => false,
        };
        if changed {
            self.offer_state(now_ms);
        }
        if was_animating && !self.is_animating() {
            // Hosts stop ticking once nothing animates, so the frame
            // that finishes the last animation delivers any held state
            // instead of leaving it pending.
            if let Some(info) = self.throttle.take() {
                self.emit(info);
            }
        } else if !changed {
            if let Some(info) = self.throttle.flush(now_ms) {
                self.emit(info);
            }
        }
        changed
    }

    /// Whether any snap, settle, or fling is in flight. Hosts keep
    /// their frame loop alive while this is true.
    pub fn is_animating(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|e| !(e.zoom.is_idle() && e.pan_x.is_idle() && e.pan_y.is_idle()))
    }

    /// Synchronous snapshot of the crop state.
    pub fn crop_info(&self) -> Option<CropInfo> {
        let engine = self.engine.as_ref()?;
        self.info_at(
            engine.zoom.scale(),
            Point::new(engine.pan_x.offset(), engine.pan_y.offset()),
        )
    }

    /// Overlay paint instructions for the current layout.
    pub fn overlay(&self) -> Option<OverlayLayout> {
        let container = self.container?;
        let restriction = self.restriction?;
        Some(overlay_layout(&container, &restriction, &self.config))
    }

    /// Extract the crop window from the attached content as currently
    /// displayed.
    ///
    /// # Errors
    ///
    /// [`ExtractError::NoContent`] before content is ready;
    /// [`ExtractError::InvalidRegion`] when the window's overlap with
    /// the content is degenerate (content dragged clear of the window).
    pub fn crop(&self) -> Result<Bitmap, ExtractError> {
        let (Some(content), Some(info)) = (&self.content, self.crop_info()) else {
            return Err(ExtractError::NoContent);
        };
        extract(content, &info.bounds, &info.restriction)
    }

    fn rebuild_engine(&mut self) {
        let (Some(container), Some(restriction)) = (self.container, self.restriction) else {
            return;
        };
        let Some(content) = &self.content else {
            return;
        };
        let base = fit_rect(
            container.width(),
            container.height(),
            content.width as f32,
            content.height as f32,
        );
        match &mut self.engine {
            Some(engine) => {
                engine.base = base;
                engine.pan_x.set_geometry(base.span_x(), restriction.span_x());
                engine.pan_y.set_geometry(base.span_y(), restriction.span_y());
            }
            None => {
                self.engine = Some(Engine {
                    base,
                    zoom: ZoomAnimator::new(self.config.max_scale_f()),
                    pan_x: PanAnimator::new(base.span_x(), restriction.span_x()),
                    pan_y: PanAnimator::new(base.span_y(), restriction.span_y()),
                });
            }
        }
    }

    fn apply_pending_seed(&mut self) {
        let Some(seed) = self.pending_seed else {
            return;
        };
        let Some(engine) = &mut self.engine else {
            return;
        };
        engine.zoom.reset();
        engine.zoom.scale_by(seed.scale);
        engine.pan_x.move_to(seed.offset.x);
        engine.pan_y.move_to(seed.offset.y);
        self.pending_seed = None;
    }

    /// Snapshot at an explicit transform, used both for the live state
    /// and for gesture-end snap destinations.
    fn info_at(&self, scale: ScaleXy, offset: Point) -> Option<CropInfo> {
        let engine = self.engine.as_ref()?;
        let restriction = self.restriction?;
        Some(CropInfo {
            scale,
            offset,
            bounds: transformed_bounds(&engine.base, scale, offset),
            restriction,
        })
    }

    fn offer_state(&mut self, now_ms: f64) {
        if let Some(info) = self.crop_info() {
            self.offer_info(info, now_ms);
        }
    }

    fn offer_info(&mut self, info: CropInfo, now_ms: f64) {
        if self.source_id.is_none() {
            return;
        }
        if let Some(out) = self.throttle.offer(info, now_ms) {
            self.emit(out);
        }
    }

    fn emit(&mut self, info: CropInfo) {
        if let (Some(id), Some(listener)) = (&self.source_id, &mut self.listener) {
            listener(id, &info);
        }
    }
}
