//! Crop-state change notifications and their throttling.
//!
//! Gesture and animation frames produce state changes far faster than
//! listeners want them (a drag easily emits at 60+ Hz). Changes are
//! coalesced through a single-slot buffer: only the latest pending state
//! survives a burst, and at most one notification leaves per throttle
//! window. An offer outside the active window emits immediately, so the
//! first change of a gesture is never delayed.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, ScaleXy};

/// Width of the throttle window, ms.
pub const THROTTLE_WINDOW_MS: f64 = 100.0;

/// Snapshot of the crop state, carried by change notifications and
/// returned from state queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropInfo {
    /// Current scale of the content.
    pub scale: ScaleXy,
    /// Current translation offset of the content.
    pub offset: Point,
    /// On-screen bounds of the transformed content.
    pub bounds: Rect,
    /// The crop window.
    pub restriction: Rect,
}

/// Listener invoked with the source identifier and the latest state.
pub type CropChangeListener = Box<dyn FnMut(&str, &CropInfo)>;

/// Single-slot, latest-wins throttle.
#[derive(Debug, Default)]
pub struct Throttle {
    pending: Option<CropInfo>,
    window_ends_ms: Option<f64>,
}

impl Throttle {
    pub fn new() -> Throttle {
        Throttle::default()
    }

    /// Store `info` as the latest pending state and emit it right away
    /// if no window is active. Returns the state to deliver, if any.
    pub fn offer(&mut self, info: CropInfo, now_ms: f64) -> Option<CropInfo> {
        self.pending = Some(info);
        self.flush(now_ms)
    }

    /// Deliver the pending state once the window has passed. Call from
    /// the frame tick so a trailing state left behind by a burst still
    /// goes out.
    pub fn flush(&mut self, now_ms: f64) -> Option<CropInfo> {
        if self.pending.is_none() {
            return None;
        }
        if let Some(end) = self.window_ends_ms {
            if now_ms < end {
                return None;
            }
        }
        self.window_ends_ms = Some(now_ms + THROTTLE_WINDOW_MS);
        self.pending.take()
    }

    /// Remove and return the pending state regardless of the window.
    /// Call when no further flush is coming, so a trailing state is not
    /// stranded in the slot.
    pub fn take(&mut self) -> Option<CropInfo> {
        self.pending.take()
    }

    /// Drop pending state and the window, e.g. when the source changes.
    pub fn clear(&mut self) {
        self.pending = None;
        self.window_ends_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(offset_x: f32) -> CropInfo {
        CropInfo {
            scale: ScaleXy::IDENTITY,
            offset: Point::new(offset_x, 0.0),
            bounds: Rect::from_size(100.0, 100.0),
            restriction: Rect::new(10.0, 10.0, 90.0, 90.0),
        }
    }

    #[test]
    fn test_first_offer_emits_immediately() {
        let mut throttle = Throttle::new();
        let out = throttle.offer(info(1.0), 0.0);
        assert_eq!(out, Some(info(1.0)));
    }

    #[test]
    fn test_burst_collapses_to_one_per_window() {
        let mut throttle = Throttle::new();
        assert!(throttle.offer(info(0.0), 0.0).is_some());
        // Rapid updates inside the window are held
        for i in 1..10 {
            assert!(throttle.offer(info(i as f32), i as f64 * 10.0).is_none());
        }
        // The flush at the window end carries only the latest state
        let out = throttle.flush(100.0);
        assert_eq!(out, Some(info(9.0)));
        // Nothing left
        assert!(throttle.flush(250.0).is_none());
    }

    #[test]
    fn test_offer_after_window_emits() {
        let mut throttle = Throttle::new();
        throttle.offer(info(0.0), 0.0);
        let out = throttle.offer(info(5.0), 150.0);
        assert_eq!(out, Some(info(5.0)));
    }

    #[test]
    fn test_flush_without_pending_is_silent() {
        let mut throttle = Throttle::new();
        assert!(throttle.flush(0.0).is_none());
        throttle.offer(info(0.0), 0.0);
        assert!(throttle.flush(50.0).is_none());
        assert!(throttle.flush(500.0).is_none());
    }

    #[test]
    fn test_trailing_flush_opens_new_window() {
        let mut throttle = Throttle::new();
        throttle.offer(info(0.0), 0.0);
        throttle.offer(info(1.0), 50.0);
        assert!(throttle.flush(100.0).is_some());
        // The trailing emit at t=100 starts a window until t=200
        assert!(throttle.offer(info(2.0), 150.0).is_none());
        assert_eq!(throttle.flush(200.0), Some(info(2.0)));
    }

    #[test]
    fn test_take_bypasses_window() {
        let mut throttle = Throttle::new();
        throttle.offer(info(0.0), 0.0);
        throttle.offer(info(1.0), 10.0);
        // Still inside the window, yet take hands the state over
        assert_eq!(throttle.take(), Some(info(1.0)));
        assert!(throttle.take().is_none());
        assert!(throttle.flush(500.0).is_none());
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut throttle = Throttle::new();
        throttle.offer(info(0.0), 0.0);
        throttle.offer(info(1.0), 10.0);
        throttle.clear();
        assert!(throttle.flush(500.0).is_none());
    }
}
