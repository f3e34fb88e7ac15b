//! Closed set of fractal families the engine can compute.

use crate::Complex;
use serde::{Deserialize, Serialize};

/// Escape-time recurrence selected once per fractal session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FractalVariant {
    /// z₀ = 0, c = pixel, z ← z² + c
    Mandelbrot,
    /// z₀ = pixel, c fixed, z ← z² + c
    Julia { c: Complex },
    /// z₀ = 0, c = pixel, z ← (|Re z| + i|Im z|)² + c
    BurningShip,
}

impl FractalVariant {
    /// Julia set with the classic dendrite parameter.
    pub const fn julia_default() -> Self {
        Self::Julia {
            c: Complex::new(-0.4, 0.6),
        }
    }

    pub fn default_center(&self) -> (f64, f64) {
        match self {
            Self::Mandelbrot | Self::Julia { .. } => (0.0, 0.0),
            Self::BurningShip => (-0.5, -0.5),
        }
    }

    pub fn default_zoom(&self) -> f64 {
        match self {
            Self::Mandelbrot | Self::Julia { .. } => 1.0,
            Self::BurningShip => 0.5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia { .. } => "Julia Set",
            Self::BurningShip => "Burning Ship",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

/// Kernel pipeline a resolved fractal selection runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pipeline {
    EscapeTime(FractalVariant),
    Mandelbulb,
}

impl Pipeline {
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::EscapeTime(_) => Dimension::TwoD,
            Self::Mandelbulb => Dimension::ThreeD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burning_ship_defaults_differ_from_mandelbrot() {
        assert_eq!(FractalVariant::BurningShip.default_center(), (-0.5, -0.5));
        assert_eq!(FractalVariant::BurningShip.default_zoom(), 0.5);
        assert_eq!(FractalVariant::Mandelbrot.default_center(), (0.0, 0.0));
        assert_eq!(FractalVariant::Mandelbrot.default_zoom(), 1.0);
    }

    #[test]
    fn pipeline_dimension() {
        assert_eq!(
            Pipeline::EscapeTime(FractalVariant::julia_default()).dimension(),
            Dimension::TwoD
        );
        assert_eq!(Pipeline::Mandelbulb.dimension(), Dimension::ThreeD);
    }

    #[test]
    fn variant_serialization_is_tagged() {
        let json = serde_json::to_string(&FractalVariant::julia_default()).unwrap();
        assert!(json.contains("\"kind\":\"Julia\""));
        let restored: FractalVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, FractalVariant::julia_default());
    }

    #[test]
    fn dimension_uses_short_names() {
        assert_eq!(serde_json::to_string(&Dimension::ThreeD).unwrap(), "\"3D\"");
    }
}
