//! Overlay geometry for the host's painter.
//!
//! The view never draws. It describes what to draw: four shade rects
//! tiling the container outside the crop window, plus an optional border
//! on the window itself. Hosts fill the shade rects with black at
//! `shade_alpha` and stroke the border however their design wants.

use serde::{Deserialize, Serialize};

use crate::config::CropConfig;
use crate::geometry::Rect;

// Opacity ceiling of the 8-bit shade channel.
const ALPHA_DENSITY: f32 = 255.0;

/// Paint instructions for one frame of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayout {
    /// Shade rects in top, bottom, left, right order.
    pub shade: [Rect; 4],
    /// Shade opacity, 0-255.
    pub shade_alpha: u8,
    /// The crop window to stroke, when a border is configured.
    pub border: Option<Rect>,
}

/// Compute the overlay for the current restriction placement.
pub fn overlay_layout(container: &Rect, restriction: &Rect, config: &CropConfig) -> OverlayLayout {
    let top = Rect::new(container.left, container.top, container.right, restriction.top);
    let bottom = Rect::new(
        container.left,
        restriction.bottom,
        container.right,
        container.bottom,
    );
    let left = Rect::new(
        container.left,
        restriction.top,
        restriction.left,
        restriction.bottom,
    );
    let right = Rect::new(
        restriction.right,
        restriction.top,
        container.right,
        restriction.bottom,
    );
    OverlayLayout {
        shade: [top, bottom, left, right],
        shade_alpha: (config.background_alpha * ALPHA_DENSITY).round() as u8,
        border: config.with_border.then_some(*restriction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::restriction_rect;

    fn area(r: &Rect) -> f32 {
        r.width() * r.height()
    }

    #[test]
    fn test_shade_tiles_outside_of_window() {
        let container = Rect::from_size(200.0, 100.0);
        let restriction = restriction_rect(200.0, 100.0, 0.5, 0.5);
        let layout = overlay_layout(&container, &restriction, &CropConfig::default());

        let shade_area: f32 = layout.shade.iter().map(area).sum();
        let expected = area(&container) - area(&restriction);
        assert!((shade_area - expected).abs() < 1e-2);

        // Bands touch the window edges exactly
        assert_eq!(layout.shade[0].bottom, restriction.top);
        assert_eq!(layout.shade[1].top, restriction.bottom);
        assert_eq!(layout.shade[2].right, restriction.left);
        assert_eq!(layout.shade[3].left, restriction.right);
    }

    #[test]
    fn test_full_size_window_leaves_no_shade() {
        let container = Rect::from_size(120.0, 120.0);
        let layout = overlay_layout(&container, &container, &CropConfig::default());
        for band in &layout.shade {
            assert_eq!(area(band), 0.0);
        }
    }

    #[test]
    fn test_shade_alpha_scaled_to_255() {
        let container = Rect::from_size(100.0, 100.0);
        let restriction = restriction_rect(100.0, 100.0, 0.8, 0.8);
        let mut config = CropConfig::default();
        config.background_alpha = 0.8;
        let layout = overlay_layout(&container, &restriction, &config);
        assert_eq!(layout.shade_alpha, 204);

        config.background_alpha = 0.0;
        assert_eq!(
            overlay_layout(&container, &restriction, &config).shade_alpha,
            0
        );
        config.background_alpha = 1.0;
        assert_eq!(
            overlay_layout(&container, &restriction, &config).shade_alpha,
            255
        );
    }

    #[test]
    fn test_border_follows_config() {
        let container = Rect::from_size(100.0, 100.0);
        let restriction = restriction_rect(100.0, 100.0, 0.8, 0.8);
        let mut config = CropConfig::default();
        assert_eq!(
            overlay_layout(&container, &restriction, &config).border,
            Some(restriction)
        );
        config.with_border = false;
        assert_eq!(
            overlay_layout(&container, &restriction, &config).border,
            None
        );
    }
}
