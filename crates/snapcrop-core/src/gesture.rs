//! Gesture event contract between a host-side detector and the view.
//!
//! Gesture *detection* (touch slop, pointer tracking, velocity
//! estimation) belongs to the host platform. The view consumes the
//! detector's output through this typed contract and assumes its
//! ordering: a run of [`Moved`](GestureEvent::Moved) events ends with one
//! [`MoveEnded`](GestureEvent::MoveEnded), optionally preceded by a
//! [`Flinged`](GestureEvent::Flinged) carrying the release velocity; a
//! run of [`Scaled`](GestureEvent::Scaled) events ends with one
//! [`ScaleEnded`](GestureEvent::ScaleEnded). The view tolerates a
//! `MoveEnded` that arrives while a fling is active by leaving the fling
//! in charge.

/// One event from the host's gesture detector.
///
/// Distances are container pixels, velocities px/s, scale factors
/// multiplicative pinch steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pinch step while two pointers are down.
    Scaled { factor: f32 },
    /// Pinch released.
    ScaleEnded,
    /// Drag step while a pointer is down.
    Moved { dx: f32, dy: f32 },
    /// Drag released with speed; inertial movement should follow.
    Flinged { velocity_x: f32, velocity_y: f32 },
    /// Drag released.
    MoveEnded,
}
