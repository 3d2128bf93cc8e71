//! Panel manager configuration
//!
//! Every field has a default, so a JSON document only needs the keys it
//! wants to override:
//!
//! ```
//! use float_panels::PanelConfig;
//!
//! let config = PanelConfig::from_json(r#"{ "z_baseline": 5000 }"#).unwrap();
//! assert_eq!(config.z_baseline, 5000);
//! assert_eq!(config.frame, PanelConfig::default().frame);
//! ```

use serde::{Deserialize, Serialize};
use crate::input::ClampPolicy;
use crate::math::{Size, Vec2};

/// Errors produced while loading or validating a [`PanelConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the panel manager cannot work with.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Chrome metrics shared by every panel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameStyle {
    /// Height of the header strip (the default grab region)
    pub header_height: f32,
    /// Side length of the square close button in the header
    pub close_button_size: f32,
    /// Gap between the close button and the header's right edge
    pub close_button_margin: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            header_height: 40.0,
            close_button_size: 24.0,
            close_button_margin: 8.0,
        }
    }
}

/// Configuration for a [`Compositor`](crate::Compositor)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Starting value of the stacking counter; the first panel gets `z_baseline + 1`
    pub z_baseline: u64,
    /// Where a panel opens when the caller gives no position
    pub default_position: Vec2,
    /// Diagonal step between consecutive default-positioned panels
    pub cascade_offset: f32,
    /// Number of cascade steps before wrapping back to `default_position`
    pub cascade_steps: u32,
    /// Size used when the caller gives none
    pub default_size: Size,
    /// Header and close button metrics
    pub frame: FrameStyle,
    /// Bounds applied to positions produced by dragging
    pub clamp: ClampPolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            z_baseline: 1000,
            default_position: Vec2::new(100.0, 100.0),
            cascade_offset: 30.0,
            cascade_steps: 10,
            default_size: Size::new(480.0, 360.0),
            frame: FrameStyle::default(),
            clamp: ClampPolicy::default(),
        }
    }
}

impl PanelConfig {
    /// Parse a JSON document and validate the result
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.z_baseline == u64::MAX {
            return Err(invalid("z_baseline", "must leave room for at least one panel"));
        }
        if !self.default_position.x.is_finite() || !self.default_position.y.is_finite() {
            return Err(invalid("default_position", "must be finite"));
        }
        if !self.cascade_offset.is_finite() {
            return Err(invalid("cascade_offset", "must be finite"));
        }
        if self.default_size.is_empty() || !self.default_size.width.is_finite() || !self.default_size.height.is_finite() {
            return Err(invalid("default_size", "width and height must be positive and finite"));
        }

        let frame = &self.frame;
        if !(frame.header_height >= 0.0 && frame.header_height.is_finite()) {
            return Err(invalid("frame.header_height", "must be zero or positive"));
        }
        if !(frame.close_button_size >= 0.0 && frame.close_button_size.is_finite()) {
            return Err(invalid("frame.close_button_size", "must be zero or positive"));
        }
        if !(frame.close_button_margin >= 0.0 && frame.close_button_margin.is_finite()) {
            return Err(invalid("frame.close_button_margin", "must be zero or positive"));
        }

        self.clamp.validate()
    }

    /// Default position for the `index`-th panel opened without one
    pub(crate) fn cascade_position(&self, index: u64) -> Vec2 {
        if self.cascade_steps == 0 {
            return self.default_position;
        }
        let step = (index % u64::from(self.cascade_steps)) as f32;
        self.default_position.offset_by(step * self.cascade_offset)
    }
}

pub(crate) fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PanelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PanelConfig::from_json(r#"{ "frame": { "header_height": 32.0 } }"#).unwrap();
        assert!((config.frame.header_height - 32.0).abs() < 0.001);
        assert!((config.frame.close_button_size - 24.0).abs() < 0.001);
        assert_eq!(config.z_baseline, 1000);
        assert_eq!(config.clamp, ClampPolicy::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = PanelConfig::from_json("{ z_baseline: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_default_size() {
        let err = PanelConfig::from_json(r#"{ "default_size": { "width": 0.0, "height": 100.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "default_size"),
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_saturated_baseline() {
        let config = PanelConfig {
            z_baseline: u64::MAX,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "z_baseline", .. })));
    }

    #[test]
    fn test_cascade_wraps() {
        let config = PanelConfig {
            default_position: Vec2::new(100.0, 100.0),
            cascade_offset: 30.0,
            cascade_steps: 3,
            ..Default::default()
        };

        assert!(config.cascade_position(0).approx_eq(Vec2::new(100.0, 100.0), 0.001));
        assert!(config.cascade_position(2).approx_eq(Vec2::new(160.0, 160.0), 0.001));
        assert!(config.cascade_position(3).approx_eq(Vec2::new(100.0, 100.0), 0.001));
    }

    #[test]
    fn test_zero_cascade_steps_is_fixed_position() {
        let config = PanelConfig {
            cascade_steps: 0,
            ..Default::default()
        };
        assert!(config.cascade_position(7).approx_eq(config.default_position, 0.001));
    }

    #[test]
    fn test_error_display() {
        let err = invalid("frame.header_height", "must be zero or positive");
        assert_eq!(
            err.to_string(),
            "invalid config value for frame.header_height: must be zero or positive"
        );
    }
}
