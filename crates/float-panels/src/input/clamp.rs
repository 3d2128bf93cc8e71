//! Bounds applied to dragged positions

use serde::{Deserialize, Serialize};
use crate::config::{invalid, ConfigError};
use crate::math::Vec2;

/// Optional per-axis limits on a panel's top-left corner while dragging
///
/// The default only keeps the top edge at or below `y = 0`, so the header
/// can always be grabbed again. Panels may still leave the overlay to the
/// left, right or bottom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampPolicy {
    pub min_x: Option<f32>,
    pub min_y: Option<f32>,
    pub max_x: Option<f32>,
    pub max_y: Option<f32>,
}

impl Default for ClampPolicy {
    fn default() -> Self {
        Self {
            min_x: None,
            min_y: Some(0.0),
            max_x: None,
            max_y: None,
        }
    }
}

impl ClampPolicy {
    /// No limits at all
    pub const UNCONSTRAINED: ClampPolicy = ClampPolicy {
        min_x: None,
        min_y: None,
        max_x: None,
        max_y: None,
    };

    /// Clamp a candidate position
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(p.x, self.min_x, self.max_x),
            clamp_axis(p.y, self.min_y, self.max_y),
        )
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_axis("clamp.x", self.min_x, self.max_x)?;
        check_axis("clamp.y", self.min_y, self.max_y)
    }
}

fn clamp_axis(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let value = min.map_or(value, |m| value.max(m));
    max.map_or(value, |m| value.min(m))
}

fn check_axis(field: &'static str, min: Option<f32>, max: Option<f32>) -> Result<(), ConfigError> {
    if min.is_some_and(|v| !v.is_finite()) || max.is_some_and(|v| !v.is_finite()) {
        return Err(invalid(field, "limits must be finite"));
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(invalid(field, "minimum is greater than maximum"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clamps_only_top_edge() {
        let policy = ClampPolicy::default();
        let p = policy.apply(Vec2::new(-500.0, -5.0));
        assert!((p.x - (-500.0)).abs() < 0.001);
        assert!(p.y.abs() < 0.001);

        let p = policy.apply(Vec2::new(9000.0, 9000.0));
        assert!((p.x - 9000.0).abs() < 0.001);
        assert!((p.y - 9000.0).abs() < 0.001);
    }

    #[test]
    fn test_unconstrained_is_identity() {
        let p = ClampPolicy::UNCONSTRAINED.apply(Vec2::new(-1.0, -2.0));
        assert_eq!(p, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_full_box() {
        let policy = ClampPolicy {
            min_x: Some(0.0),
            min_y: Some(0.0),
            max_x: Some(800.0),
            max_y: Some(600.0),
        };
        assert_eq!(policy.apply(Vec2::new(900.0, -3.0)), Vec2::new(800.0, 0.0));
        assert_eq!(policy.apply(Vec2::new(-3.0, 700.0)), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let policy = ClampPolicy {
            min_x: Some(10.0),
            max_x: Some(5.0),
            ..ClampPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(ConfigError::Invalid { field: "clamp.x", .. })));
        assert!(ClampPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_missing_json_fields_are_unset() {
        let policy: ClampPolicy = serde_json::from_str(r#"{ "max_y": 700.0 }"#).unwrap();
        assert_eq!(policy.max_y, Some(700.0));
        assert_eq!(policy.min_y, Some(0.0));
        assert_eq!(policy.min_x, None);
    }
}
