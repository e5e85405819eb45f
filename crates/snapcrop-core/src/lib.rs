//! Snapcrop Core - Gesture-driven image cropping
//!
//! This crate provides the platform-independent core of Snapcrop: crop
//! window layout, pan/zoom animation driven by gesture events, throttled
//! crop-state notifications, and extraction of the cropped region, plus
//! image decode and encode for hosts that need them.
//!
//! The entry point is [`CropView`]. Hosts feed it layout, decoded
//! content, [`GestureEvent`]s, and frame ticks; it answers with the
//! current [`CropInfo`], overlay paint instructions, and crop results.
//! All timestamps are host-provided milliseconds from any monotonic
//! clock.

pub mod animation;
pub mod animator;
pub mod bitmap;
pub mod config;
pub mod decode;
pub mod encode;
pub mod extract;
pub mod geometry;
pub mod gesture;
pub mod notify;
pub mod overlay;
pub mod view;

pub use animator::{PanAnimator, ZoomAnimator, OVERDRAG_RATE};
pub use bitmap::Bitmap;
pub use config::{ConfigError, CropConfig};
pub use decode::{decode_image, DecodeError};
pub use encode::{encode_jpeg, encode_png, EncodeError};
pub use extract::{extract, ExtractError};
pub use geometry::{fit_rect, restriction_rect, transformed_bounds, Point, Rect, ScaleXy};
pub use gesture::GestureEvent;
pub use notify::{CropChangeListener, CropInfo, THROTTLE_WINDOW_MS};
pub use overlay::{overlay_layout, OverlayLayout};
pub use view::{CropView, SourceSeed};
