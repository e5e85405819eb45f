//! Time-parameterized animation primitives.
//!
//! The core never owns a clock. Hosts pass monotonic timestamps in
//! milliseconds (`now_ms`) into every time-dependent call; a browser host
//! forwards `performance.now()`, tests step time explicitly. Both
//! primitives here are pure functions of the timestamp, so sampling is
//! idempotent and order-independent within a frame.

/// Duration of snap-back animations (move settle and scale snap), ms.
pub const SNAP_DURATION_MS: f64 = 600.0;

/// Ease-out exponent for snap-backs (decelerate factor 2).
pub const EASE_OUT_FACTOR: f32 = 2.0;

/// Friction setting of the fling decay.
pub const FLING_FRICTION: f32 = 3.0;

/// Fling velocity magnitude below which the motion counts as dead, px/s.
pub const FLING_END_VELOCITY: f32 = 40.0;

// Drag coefficient applied on top of the friction setting, 1/s.
const DRAG_COEFFICIENT: f32 = 4.2;

/// Decelerating ease-out curve: fast start, slow finish.
///
/// `t` is normalized time and is clamped to [0, 1]; `factor` steepens the
/// deceleration.
pub fn ease_out(t: f32, factor: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powf(2.0 * factor)
}

/// A fixed-duration glide from one value to another along the ease-out
/// curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    pub from: f32,
    pub to: f32,
    start_ms: f64,
}

impl Settle {
    pub fn new(from: f32, to: f32, start_ms: f64) -> Settle {
        Settle { from, to, start_ms }
    }

    pub fn value_at(&self, now_ms: f64) -> f32 {
        let t = ((now_ms - self.start_ms) / SNAP_DURATION_MS) as f32;
        self.from + (self.to - self.from) * ease_out(t, EASE_OUT_FACTOR)
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= SNAP_DURATION_MS
    }
}

/// Inertial decay after a drag release.
///
/// Velocity decays exponentially under the friction setting, so the
/// position approaches a finite limit; `projected_end` is that limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling {
    pub from: f32,
    pub velocity: f32,
    start_ms: f64,
}

impl Fling {
    /// `velocity` is the gesture release velocity in px/s.
    pub fn new(from: f32, velocity: f32, start_ms: f64) -> Fling {
        Fling {
            from,
            velocity,
            start_ms,
        }
    }

    fn elapsed_s(&self, now_ms: f64) -> f32 {
        (((now_ms - self.start_ms) / 1000.0).max(0.0)) as f32
    }

    fn decay_rate() -> f32 {
        DRAG_COEFFICIENT * FLING_FRICTION
    }

    pub fn value_at(&self, now_ms: f64) -> f32 {
        let k = Self::decay_rate();
        let t = self.elapsed_s(now_ms);
        self.from + self.velocity / k * (1.0 - (-k * t).exp())
    }

    pub fn velocity_at(&self, now_ms: f64) -> f32 {
        let k = Self::decay_rate();
        self.velocity * (-k * self.elapsed_s(now_ms)).exp()
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        self.velocity_at(now_ms).abs() < FLING_END_VELOCITY
    }

    /// Where the decay would come to rest if nothing interrupts it.
    pub fn projected_end(&self) -> f32 {
        self.from + self.velocity / Self::decay_rate()
    }
}
