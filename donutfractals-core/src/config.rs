//! Engine settings.
//!
//! Every field carries a serde default so a partial settings file fills in
//! the rest.

use crate::{unit, DVec3, EngineError};
use serde::{Deserialize, Serialize};

/// Bounds of the iteration slider.
pub const MIN_SLIDER_ITERATIONS: u32 = 50;
pub const MAX_SLIDER_ITERATIONS: u32 = 1000;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_POWER: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Sinusoidal pink/orange cycling.
    #[default]
    Donut,
    /// Linear pink tint proportional to the value.
    Glaze,
}

/// Sphere-tracing and shading constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarchConfig {
    pub max_steps: u32,
    pub max_dist: f64,
    pub min_dist: f64,
    pub normal_epsilon: f64,
    /// Inner iteration cap of the distance estimator.
    pub de_iterations: u32,
    pub fov_degrees: f64,
    pub ambient: f64,
    pub diffuse: f64,
    pub light_dir: DVec3,
    /// Step length substituted for non-finite or negative estimates.
    pub far_distance: f64,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            max_steps: 100,
            max_dist: 10.0,
            min_dist: 0.001,
            normal_epsilon: 0.001,
            de_iterations: 10,
            fov_degrees: 45.0,
            ambient: 0.2,
            diffuse: 0.8,
            light_dir: DVec3::new(1.0, 1.0, -1.0),
            far_distance: 1.0e9,
        }
    }
}

impl MarchConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(EngineError::invalid(format!(
                    "{name} must be finite and positive, got {v}"
                )))
            }
        };
        positive("max_dist", self.max_dist)?;
        positive("min_dist", self.min_dist)?;
        positive("normal_epsilon", self.normal_epsilon)?;
        positive("far_distance", self.far_distance)?;
        if !(self.fov_degrees.is_finite() && self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(EngineError::invalid(format!(
                "fov_degrees must lie in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !(self.ambient.is_finite() && self.diffuse.is_finite()) {
            return Err(EngineError::invalid("shading weights must be finite"));
        }
        if self.max_steps == 0 {
            return Err(EngineError::invalid("max_steps must be at least 1"));
        }
        if self.de_iterations == 0 {
            return Err(EngineError::invalid("de_iterations must be at least 1"));
        }
        unit(self.light_dir)
            .map(|_| ())
            .map_err(|_| EngineError::invalid("light_dir must be non-zero and finite"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_iterations: u32,
    pub power: f64,
    pub color_scheme: ColorScheme,
    pub window: WindowConfig,
    pub march: MarchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            power: DEFAULT_POWER,
            color_scheme: ColorScheme::default(),
            window: WindowConfig::default(),
            march: MarchConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_iterations == 0 {
            return Err(EngineError::invalid("max_iterations must be at least 1"));
        }
        if !(self.power.is_finite() && self.power > 0.0) {
            return Err(EngineError::invalid(format!(
                "power must be finite and positive, got {}",
                self.power
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(EngineError::invalid("window must be non-empty"));
        }
        self.march.validate()
    }
}

/// Snap a slider value into its allowed range.
pub fn clamp_slider_iterations(value: u32) -> u32 {
    value.clamp(MIN_SLIDER_ITERATIONS, MAX_SLIDER_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design_values() {
        let config = EngineConfig::default();
        assert_eq!(config.max_iterations, 256);
        assert_eq!(config.power, 8.0);
        assert_eq!(config.march.max_steps, 100);
        assert_eq!(config.march.max_dist, 10.0);
        assert_eq!(config.march.min_dist, 0.001);
        assert_eq!(config.march.de_iterations, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{"max_iterations": 500, "march": {"max_steps": 40}}"#)
                .unwrap();
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.march.max_steps, 40);
        assert_eq!(config.march.min_dist, 0.001);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn color_scheme_is_lowercase() {
        let config = EngineConfig::from_json_str(r#"{"color_scheme": "glaze"}"#).unwrap();
        assert_eq!(config.color_scheme, ColorScheme::Glaze);
    }

    #[test]
    fn json_round_trip() {
        let config = EngineConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.power = 0.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.march.light_dir = DVec3::ZERO;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.march.fov_degrees = 180.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.march.de_iterations = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn light_dir_reads_as_a_triple() {
        let config =
            EngineConfig::from_json_str(r#"{"march": {"light_dir": [0.0, 1.0, 0.0]}}"#).unwrap();
        assert_eq!(config.march.light_dir, DVec3::new(0.0, 1.0, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn slider_clamps_into_range() {
        assert_eq!(clamp_slider_iterations(10), 50);
        assert_eq!(clamp_slider_iterations(256), 256);
        assert_eq!(clamp_slider_iterations(5000), 1000);
    }
}
