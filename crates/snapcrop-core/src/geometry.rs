//! Geometry primitives for crop layout and transform math.
//!
//! All coordinates are in container pixels with the origin at the top-left
//! corner. The crop window (restriction rect) and the on-screen content
//! bounds share the same space, so coverage checks are plain edge
//! comparisons.

use serde::{Deserialize, Serialize};

/// Tolerance for f32 geometry comparisons in tests and snap checks.
pub const EPSILON: f32 = 1e-4;

/// A 2D translation offset from the laid-out content position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// Per-axis scale factors.
///
/// Pinch gestures apply the same factor to both axes, so `x == y` in
/// practice, but the pair is kept so each axis animator can read its own
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleXy {
    pub x: f32,
    pub y: f32,
}

impl ScaleXy {
    pub const IDENTITY: ScaleXy = ScaleXy { x: 1.0, y: 1.0 };

    pub fn uniform(factor: f32) -> ScaleXy {
        ScaleXy {
            x: factor,
            y: factor,
        }
    }

    /// Multiply both components by `factor`.
    pub fn scaled_by(self, factor: f32) -> ScaleXy {
        ScaleXy {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn clamped(self, min: f32, max: f32) -> ScaleXy {
        ScaleXy {
            x: self.x.clamp(min, max),
            y: self.y.clamp(min, max),
        }
    }
}

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rect anchored at the origin with the given size.
    pub fn from_size(width: f32, height: f32) -> Rect {
        Rect {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Whether `inner` lies entirely inside `self` (edge tolerance applies).
    pub fn contains(&self, inner: &Rect) -> bool {
        self.left <= inner.left + EPSILON
            && self.top <= inner.top + EPSILON
            && self.right >= inner.right - EPSILON
            && self.bottom >= inner.bottom - EPSILON
    }

    /// Horizontal extent as a 1D span.
    pub fn span_x(&self) -> Span {
        Span::from_edges(self.left, self.right)
    }

    /// Vertical extent as a 1D span.
    pub fn span_y(&self) -> Span {
        Span::from_edges(self.top, self.bottom)
    }
}

/// One axis of a rectangle: center plus half extent.
///
/// The axis animators work in 1D, so all coverage math reduces to span
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub center: f32,
    pub half: f32,
}

impl Span {
    pub fn from_edges(min: f32, max: f32) -> Span {
        Span {
            center: (min + max) / 2.0,
            half: (max - min) / 2.0,
        }
    }

    pub fn min(&self) -> f32 {
        self.center - self.half
    }

    pub fn max(&self) -> f32 {
        self.center + self.half
    }

    /// The span grown about its own center.
    pub fn scaled(self, factor: f32) -> Span {
        Span {
            center: self.center,
            half: self.half * factor,
        }
    }

    /// Range of offsets that keep `window` covered by this span.
    ///
    /// The span sits at `center + offset`; it covers the window when its
    /// min edge is at or before the window's min and its max edge at or
    /// after the window's max. The returned `(lo, hi)` is inverted
    /// (`lo > hi`) when the span is too small to cover the window at all.
    pub fn offsets_covering(&self, window: Span) -> (f32, f32) {
        let lo = window.max() - self.center - self.half;
        let hi = window.min() - self.center + self.half;
        (lo, hi)
    }
}

/// Crop window placement: a centered rect taking the given fractions of
/// the container.
pub fn restriction_rect(
    container_w: f32,
    container_h: f32,
    width_percent: f32,
    height_percent: f32,
) -> Rect {
    let rw = container_w * width_percent;
    let rh = container_h * height_percent;
    Rect {
        left: (container_w - rw) / 2.0,
        top: (container_h - rh) / 2.0,
        right: (container_w + rw) / 2.0,
        bottom: (container_h + rh) / 2.0,
    }
}

/// Aspect-preserving placement of content inside the container, centered
/// both ways. Degenerate sizes produce a zero rect at the container
/// center.
pub fn fit_rect(container_w: f32, container_h: f32, content_w: f32, content_h: f32) -> Rect {
    let cx = container_w / 2.0;
    let cy = container_h / 2.0;
    if container_w <= 0.0 || container_h <= 0.0 || content_w <= 0.0 || content_h <= 0.0 {
        return Rect::new(cx, cy, cx, cy);
    }
    let scale = (container_w / content_w).min(container_h / content_h);
    let half_w = content_w * scale / 2.0;
    let half_h = content_h * scale / 2.0;
    Rect {
        left: cx - half_w,
        top: cy - half_h,
        right: cx + half_w,
        bottom: cy + half_h,
    }
}

/// On-screen bounds of the base frame under the current transform.
///
/// Scaling pivots about the base center; the offset translates the
/// scaled rect.
pub fn transformed_bounds(base: &Rect, scale: ScaleXy, offset: Point) -> Rect {
    let cx = base.center_x() + offset.x;
    let cy = base.center_y() + offset.y;
    let half_w = base.width() / 2.0 * scale.x;
    let half_h = base.height() / 2.0 * scale.y;
    Rect {
        left: cx - half_w,
        top: cy - half_h,
        right: cx + half_w,
        bottom: cy + half_h,
    }
}


// ===== Property-Based Tests =====

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_restriction_inside_container(
            w in 1.0f32..4000.0,
            h in 1.0f32..4000.0,
            pw in 0.0f32..=1.0,
            ph in 0.0f32..=1.0,
        ) {
            let container = Rect::from_size(w, h);
            let r = restriction_rect(w, h, pw, ph);
            prop_assert!(container.contains(&r));
            // Centered both ways
            prop_assert!((r.center_x() - w / 2.0).abs() < 1e-2);
            prop_assert!((r.center_y() - h / 2.0).abs() < 1e-2);
        }

        #[test]
        fn prop_fit_preserves_aspect(
            cw in 1.0f32..2000.0,
            ch in 1.0f32..2000.0,
            iw in 1.0f32..8000.0,
            ih in 1.0f32..8000.0,
        ) {
            let r = fit_rect(cw, ch, iw, ih);
            let fitted_aspect = r.width() / r.height();
            let content_aspect = iw / ih;
            prop_assert!((fitted_aspect - content_aspect).abs() / content_aspect < 1e-3);
            // Touches the container on at least one axis
            let touches_w = (r.width() - cw).abs() < 1e-2;
            let touches_h = (r.height() - ch).abs() < 1e-2;
            prop_assert!(touches_w || touches_h);
        }

        #[test]
        fn prop_offsets_covering_is_sound(
            base_min in -500.0f32..500.0,
            base_len in 1.0f32..1000.0,
            win_min in -500.0f32..500.0,
            win_len in 1.0f32..1000.0,
            pick in 0.0f32..=1.0,
        ) {
            let content = Span::from_edges(base_min, base_min + base_len);
            let window = Span::from_edges(win_min, win_min + win_len);
            let (lo, hi) = content.offsets_covering(window);
            if lo <= hi {
                // Any offset inside the range keeps the window covered.
                let o = lo + (hi - lo) * pick;
                let min_edge = content.min() + o;
                let max_edge = content.max() + o;
                prop_assert!(min_edge <= window.min() + 1e-2);
                prop_assert!(max_edge >= window.max() - 1e-2);
            } else {
                // Inverted exactly when the content is too small.
                prop_assert!(content.half < window.half);
            }
        }
    }
}
