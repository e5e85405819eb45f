//! Per-axis movement: live drags, flings, and coverage snap-back.
//!
//! All math here is 1D. The animator knows the content's laid-out extent
//! (`base`) and the crop window extent (`window`) on its axis; the offset
//! it owns shifts the scaled content. An offset is *valid* when the
//! content still covers the whole window; see
//! [`Span::offsets_covering`](crate::geometry::Span::offsets_covering).

use crate::animation::{Fling, Settle};
use crate::geometry::{Span, EPSILON};

/// Fraction applied to drag motion that grows a coverage violation.
pub const OVERDRAG_RATE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Fling(Fling),
    Settle(Settle),
}

/// Movement animator for one axis.
pub struct PanAnimator {
    base: Span,
    window: Span,
    offset: f32,
    motion: Option<Motion>,
}

impl PanAnimator {
    pub fn new(base: Span, window: Span) -> PanAnimator {
        PanAnimator {
            base,
            window,
            offset: 0.0,
            motion: None,
        }
    }

    /// Replace the axis geometry after a relayout or a source change.
    /// The offset survives; in-flight motion is dropped because it was
    /// computed against the old extents.
    pub fn set_geometry(&mut self, base: Span, window: Span) {
        self.base = base;
        self.window = window;
        self.motion = None;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_flinging(&self) -> bool {
        matches!(self.motion, Some(Motion::Fling(_)))
    }

    pub fn is_idle(&self) -> bool {
        self.motion.is_none()
    }

    /// Drop any in-flight motion, leaving the offset where it is.
    pub fn cancel(&mut self) {
        self.motion = None;
    }

    fn valid_range(&self, scale: f32) -> (f32, f32) {
        self.base.scaled(scale).offsets_covering(self.window)
    }

    /// Live drag update. The delta applies at full rate while coverage
    /// holds; the portion that grows a violation applies at
    /// [`OVERDRAG_RATE`]. Returns the new offset.
    pub fn move_by(&mut self, delta: f32, scale: f32) -> f32 {
        self.motion = None;
        if delta.is_finite() {
            let (lo, hi) = self.valid_range(scale);
            self.offset = damped_walk(self.offset, delta, lo, hi);
        }
        self.offset
    }

    /// Absolute positioning used by source seeding.
    pub fn move_to(&mut self, offset: f32) -> f32 {
        self.motion = None;
        self.offset = offset;
        self.offset
    }

    /// Begin inertial movement from the gesture's release velocity
    /// (px/s). The axis counts as flinging until the decay dies out or a
    /// boundary hands over to a settle.
    pub fn fling(&mut self, velocity: f32, now_ms: f64) {
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.motion = Some(Motion::Fling(Fling::new(self.offset, velocity, now_ms)));
    }

    /// Snap-back: when the current offset leaves the window uncovered
    /// (judged at the clamped effective `scale`, since a scale snap may
    /// be landing concurrently), start a settle to the nearest valid
    /// offset and return that target immediately. Valid offsets and an
    /// already-matching settle are no-ops.
    pub fn re_move_if_needed(&mut self, scale: f32, now_ms: f64) -> f32 {
        let (lo, hi) = self.valid_range(scale);
        match snap_target(self.offset, lo, hi) {
            None => self.offset,
            Some(target) => {
                if let Some(Motion::Settle(s)) = &self.motion {
                    if (s.to - target).abs() < EPSILON {
                        return target;
                    }
                }
                self.motion = Some(Motion::Settle(Settle::new(self.offset, target, now_ms)));
                target
            }
        }
    }

    /// Advance in-flight motion to `now_ms`. Returns whether the offset
    /// changed. A fling that carries the content past a boundary hands
    /// over to a settle on the spot.
    pub fn tick(&mut self, scale: f32, now_ms: f64) -> bool {
        let Some(motion) = self.motion else {
            return false;
        };
        match motion {
            Motion::Fling(f) => {
                let next = f.value_at(now_ms);
                let changed = next != self.offset;
                self.offset = next;
                let (lo, hi) = self.valid_range(scale);
                if let Some(target) = snap_target(self.offset, lo, hi) {
                    self.motion = Some(Motion::Settle(Settle::new(self.offset, target, now_ms)));
                } else if f.finished(now_ms) {
                    self.motion = None;
                }
                changed
            }
            Motion::Settle(s) => {
                let next = s.value_at(now_ms);
                let changed = next != self.offset;
                self.offset = next;
                if s.finished(now_ms) {
                    self.offset = s.to;
                    self.motion = None;
                }
                changed
            }
        }
    }
}

/// Offset the snap-back should land on, if the current one is invalid.
///
/// When the content cannot cover the window at all (`lo > hi`), the min
/// edges are aligned; that branch also wins when both edges are violated,
/// which keeps repeated snaps convergent.
fn snap_target(offset: f32, lo: f32, hi: f32) -> Option<f32> {
    if lo > hi {
        if (offset - hi).abs() <= EPSILON {
            None
        } else {
            Some(hi)
        }
    } else if offset > hi {
        Some(hi)
    } else if offset < lo {
        Some(lo)
    } else {
        None
    }
}

/// Walk `start` by `delta` against the valid range `[lo, hi]`, damping
/// only the motion that moves further outside it.
fn damped_walk(start: f32, delta: f32, lo: f32, hi: f32) -> f32 {
    // No coverage possible on this axis; overdrag everywhere except
    // motion toward the pin point.
    let (lo, hi) = if lo > hi { (hi, hi) } else { (lo, hi) };

    let mut pos = start;
    let mut remaining = delta;
    if remaining > 0.0 {
        if pos < lo {
            let step = remaining.min(lo - pos);
            pos += step;
            remaining -= step;
        }
        if remaining > 0.0 && pos < hi {
            let step = remaining.min(hi - pos);
            pos += step;
            remaining -= step;
        }
        pos + remaining * OVERDRAG_RATE
    } else {
        if pos > hi {
            let step = remaining.max(hi - pos);
            pos += step;
            remaining -= step;
        }
        if remaining < 0.0 && pos > lo {
            let step = remaining.max(lo - pos);
            pos += step;
            remaining -= step;
        }
        pos + remaining * OVERDRAG_RATE
    }
}


// ===== Property-Based Tests =====

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::animation::SNAP_DURATION_MS;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_snap_then_settle_restores_coverage(
            start in -400.0f32..400.0,
            scale in 1.0f32..=5.0,
            base_len in 120.0f32..800.0,
        ) {
            let base = Span::from_edges(0.0, base_len);
            let window = Span::from_edges(10.0, 110.0);
            let mut pan = PanAnimator::new(base, window);
            pan.move_to(start);
            let target = pan.re_move_if_needed(scale, 0.0);
            pan.tick(scale, SNAP_DURATION_MS + 1.0);
            prop_assert!((pan.offset() - target).abs() < 1e-3);
            let scaled = base.scaled(scale);
            prop_assert!(scaled.min() + pan.offset() <= window.min() + 1e-2);
            prop_assert!(scaled.max() + pan.offset() >= window.max() - 1e-2);
        }

        #[test]
        fn prop_move_never_exceeds_input_delta(
            start in -200.0f32..200.0,
            delta in -300.0f32..300.0,
            scale in 1.0f32..=5.0,
        ) {
            let mut pan = PanAnimator::new(
                Span::from_edges(0.0, 120.0),
                Span::from_edges(10.0, 110.0),
            );
            pan.move_to(start);
            let moved = pan.move_by(delta, scale) - start;
            prop_assert!(moved.abs() <= delta.abs() + 1e-3);
            prop_assert!(moved * delta >= 0.0);
        }

        #[test]
        fn prop_sync_target_matches_settled_value(
            start in -400.0f32..400.0,
            scale in 1.0f32..=5.0,
        ) {
            let mut pan = PanAnimator::new(
                Span::from_edges(0.0, 120.0),
                Span::from_edges(10.0, 110.0),
            );
            pan.move_to(start);
            let target = pan.re_move_if_needed(scale, 10.0);
            pan.tick(scale, 10.0 + SNAP_DURATION_MS);
            prop_assert!((pan.offset() - target).abs() < 1e-3);
        }
    }
}
