//! Pinch scaling with end-of-gesture snap into the allowed range.
//!
//! While a pinch is active the scale follows the gesture without
//! clamping, so the content stays glued to the fingers even past the
//! limits. The clamp happens when the gesture ends, as an animated snap.

use crate::animation::Settle;
use crate::geometry::{ScaleXy, EPSILON};

/// Scale animator. The scale is uniform; both axes of the reported
/// [`ScaleXy`] carry the same value.
pub struct ZoomAnimator {
    current: f32,
    max_scale: f32,
    snap: Option<Settle>,
}

impl ZoomAnimator {
    pub fn new(max_scale: f32) -> ZoomAnimator {
        ZoomAnimator {
            current: 1.0,
            max_scale,
            snap: None,
        }
    }

    pub fn scale(&self) -> ScaleXy {
        ScaleXy::uniform(self.current)
    }

    pub fn is_idle(&self) -> bool {
        self.snap.is_none()
    }

    /// Apply a pinch step multiplicatively, without clamping. Non-finite
    /// or non-positive factors are ignored rather than rejected.
    pub fn scale_by(&mut self, factor: f32) -> ScaleXy {
        if factor.is_finite() && factor > 0.0 {
            self.snap = None;
            self.current *= factor;
        }
        self.scale()
    }

    /// Snap back into `[1.0, max_scale]` when the pinch left the scale
    /// outside it. Returns the snap target immediately; the visible
    /// value eases there over the snap duration.
    pub fn re_scale_if_needed(&mut self, now_ms: f64) -> ScaleXy {
        let target = self.current.clamp(1.0, self.max_scale);
        if (target - self.current).abs() <= EPSILON {
            return self.scale();
        }
        if let Some(s) = &self.snap {
            if (s.to - target).abs() <= EPSILON {
                return ScaleXy::uniform(target);
            }
        }
        self.snap = Some(Settle::new(self.current, target, now_ms));
        ScaleXy::uniform(target)
    }

    /// Immediately restore the neutral scale, without easing.
    pub fn reset(&mut self) -> ScaleXy {
        self.snap = None;
        self.current = 1.0;
        self.scale()
    }

    /// Advance an in-flight snap. Returns whether the scale changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(s) = self.snap else {
            return false;
        };
        let next = s.value_at(now_ms);
        let changed = next != self.current;
        self.current = next;
        if s.finished(now_ms) {
            self.current = s.to;
            self.snap = None;
        }
        changed
    }
}


// ===== Property-Based Tests =====
