//! Axis animators driving the crop transform.
//!
//! The transform is split into three independent 1D values: horizontal
//! offset, vertical offset, and a uniform scale. Each offset axis gets
//! its own [`PanAnimator`]; the scale gets a [`ZoomAnimator`]. The
//! orchestrator routes gesture events to them and advances them from its
//! frame tick.

mod pan;
mod zoom;

pub use pan::{PanAnimator, OVERDRAG_RATE};
pub use zoom::ZoomAnimator;
