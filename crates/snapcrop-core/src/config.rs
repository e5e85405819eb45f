//! Widget configuration with construction-time validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fraction of the container taken by the crop window, per axis.
pub const DEFAULT_PERCENT: f32 = 0.8;
/// Default upper bound for pinch zoom.
pub const DEFAULT_MAX_SCALE: u32 = 2;
/// Default opacity of the shade outside the crop window.
pub const DEFAULT_BACKGROUND_ALPHA: f32 = 0.8;
/// Lowest accepted `max_scale`.
pub const MIN_ALLOWED_SCALE: u32 = 1;
/// Highest accepted `max_scale`.
pub const MAX_ALLOWED_SCALE: u32 = 5;

/// Configuration errors are fatal: a view is never constructed from an
/// invalid config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("result_width_percent must be in 0.0..=1.0, got {0}")]
    ResultWidthPercent(f32),

    #[error("result_height_percent must be in 0.0..=1.0, got {0}")]
    ResultHeightPercent(f32),

    #[error("max_scale must be in {MIN_ALLOWED_SCALE}..={MAX_ALLOWED_SCALE}, got {0}")]
    MaxScale(u32),

    #[error("background_alpha must be in 0.0..=1.0, got {0}")]
    BackgroundAlpha(f32),
}

/// Crop widget configuration.
///
/// Plain data with defaults; `validate` is called by the view
/// constructor, so an out-of-range value fails before any state exists.
/// Serde defaults let host-side config objects set only the fields they
/// care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Crop window width as a fraction of the container width.
    pub result_width_percent: f32,
    /// Crop window height as a fraction of the container height.
    pub result_height_percent: f32,
    /// Upper bound the scale snaps back to after a pinch ends.
    pub max_scale: u32,
    /// Opacity of the shade drawn outside the crop window.
    pub background_alpha: f32,
    /// Whether the host should draw a border over the crop window.
    pub with_border: bool,
}

impl Default for CropConfig {
    fn default() -> Self {
        CropConfig {
            result_width_percent: DEFAULT_PERCENT,
            result_height_percent: DEFAULT_PERCENT,
            max_scale: DEFAULT_MAX_SCALE,
            background_alpha: DEFAULT_BACKGROUND_ALPHA,
            with_border: true,
        }
    }
}

impl CropConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.result_width_percent) {
            return Err(ConfigError::ResultWidthPercent(self.result_width_percent));
        }
        if !(0.0..=1.0).contains(&self.result_height_percent) {
            return Err(ConfigError::ResultHeightPercent(self.result_height_percent));
        }
        if !(MIN_ALLOWED_SCALE..=MAX_ALLOWED_SCALE).contains(&self.max_scale) {
            return Err(ConfigError::MaxScale(self.max_scale));
        }
        if !(0.0..=1.0).contains(&self.background_alpha) {
            return Err(ConfigError::BackgroundAlpha(self.background_alpha));
        }
        Ok(())
    }

    /// `max_scale` as the f32 the animators compare against.
    pub fn max_scale_f(&self) -> f32 {
        self.max_scale as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CropConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.result_width_percent, 0.8);
        assert_eq!(config.result_height_percent, 0.8);
        assert_eq!(config.max_scale, 2);
        assert_eq!(config.background_alpha, 0.8);
        assert!(config.with_border);
    }

    #[test]
    fn test_width_percent_out_of_range() {
        let mut config = CropConfig::default();
        config.result_width_percent = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ResultWidthPercent(_))
        ));
        config.result_width_percent = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_height_percent_out_of_range() {
        let mut config = CropConfig::default();
        config.result_height_percent = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ResultHeightPercent(_))
        ));
    }

    #[test]
    fn test_max_scale_bounds() {
        let mut config = CropConfig::default();
        config.max_scale = 0;
        assert!(matches!(config.validate(), Err(ConfigError::MaxScale(0))));
        config.max_scale = 6;
        assert!(config.validate().is_err());
        config.max_scale = 5;
        assert!(config.validate().is_ok());
        config.max_scale = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_background_alpha_out_of_range() {
        let mut config = CropConfig::default();
        config.background_alpha = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BackgroundAlpha(_))
        ));
    }

    #[test]
    fn test_boundary_values_pass() {
        let config = CropConfig {
            result_width_percent: 0.0,
            result_height_percent: 1.0,
            max_scale: 5,
            background_alpha: 0.0,
            with_border: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nan_rejected() {
        let mut config = CropConfig::default();
        config.background_alpha = f32::NAN;
        assert!(config.validate().is_err());
    }
}
