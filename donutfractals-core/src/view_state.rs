//! Mutable mapping between screen pixels and fractal space.
//!
//! One view state lives per fractal session; renders take a copy so a
//! pan/zoom arriving mid-frame cannot tear the image.

use crate::{unit, DVec3, EngineError, FractalVariant, PixelGrid, PointOfInterest};
use serde::{Deserialize, Serialize};

/// Vertical extent of the 2D view at zoom 1.
pub const BASE_EXTENT: f64 = 4.0;

/// 2D view: center plus zoom, with the defaults `reset` returns to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState2D {
    pub center: (f64, f64),
    pub zoom: f64,
    pub default_center: (f64, f64),
    pub default_zoom: f64,
}

impl ViewState2D {
    pub fn new(center: (f64, f64), zoom: f64) -> Result<Self, EngineError> {
        let view = Self {
            center,
            zoom,
            default_center: center,
            default_zoom: zoom,
        };
        view.validate()?;
        Ok(view)
    }

    /// Default framing for a variant.
    pub fn for_variant(variant: &FractalVariant) -> Self {
        let center = variant.default_center();
        let zoom = variant.default_zoom();
        Self {
            center,
            zoom,
            default_center: center,
            default_zoom: zoom,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(EngineError::invalid(format!(
                "zoom must be finite and positive, got {}",
                self.zoom
            )));
        }
        if !(self.center.0.is_finite() && self.center.1.is_finite()) {
            return Err(EngineError::invalid("view center is not finite"));
        }
        Ok(())
    }

    /// Fractal-space distance covered by one screen pixel along x.
    pub fn units_per_pixel(&self, screen_width: u32) -> f64 {
        BASE_EXTENT / self.zoom / screen_width as f64
    }

    /// Drag the view by a pixel delta. The content follows the pointer, so
    /// the center moves opposite to the drag; a fixed drag always covers the
    /// same fraction of the screen whatever the zoom.
    pub fn pan(&mut self, dx: f64, dy: f64, screen_width: u32) -> Result<(), EngineError> {
        if screen_width == 0 {
            return Err(EngineError::invalid("cannot pan a zero-width screen"));
        }
        let scale = self.units_per_pixel(screen_width);
        let center = (self.center.0 - dx * scale, self.center.1 - dy * scale);
        if !(center.0.is_finite() && center.1.is_finite()) {
            return Err(EngineError::invalid("pan would leave a non-finite center"));
        }
        self.center = center;
        Ok(())
    }

    /// Multiplicative zoom; 1.1 zooms in, 0.9 zooms out.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), EngineError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(EngineError::invalid(format!(
                "zoom factor must be finite and positive, got {factor}"
            )));
        }
        let zoom = self.zoom * factor;
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(EngineError::invalid("zoom left the representable range"));
        }
        self.zoom = zoom;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.center = self.default_center;
        self.zoom = self.default_zoom;
    }

    pub fn jump_to(&mut self, poi: &PointOfInterest) -> Result<(), EngineError> {
        let target = Self {
            center: (poi.x, poi.y),
            zoom: poi.zoom,
            ..*self
        };
        target.validate()?;
        *self = target;
        Ok(())
    }

    /// Per-column and per-row fractal coordinates for a screen of this size.
    pub fn pixel_grid(&self, width: u32, height: u32) -> Result<PixelGrid, EngineError> {
        self.validate()?;
        PixelGrid::new(self.center, self.zoom, width, height)
    }
}

pub const DEFAULT_CAMERA_POS: DVec3 = DVec3::new(0.0, 0.0, -3.0);
pub const DEFAULT_CAMERA_TARGET: DVec3 = DVec3::ZERO;
pub const DEFAULT_CAMERA_UP: DVec3 = DVec3::new(0.0, 1.0, 0.0);

/// World units moved per dragged pixel.
const CAMERA_PAN_SPEED: f64 = 0.01;
/// Radians rotated per dragged pixel.
const CAMERA_ROTATE_SPEED: f64 = 0.01;

/// 3D camera pose. Rotation angles are unbounded radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState3D {
    pub camera_pos: DVec3,
    pub camera_target: DVec3,
    pub camera_up: DVec3,
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl Default for ViewState3D {
    fn default() -> Self {
        Self {
            camera_pos: DEFAULT_CAMERA_POS,
            camera_target: DEFAULT_CAMERA_TARGET,
            camera_up: DEFAULT_CAMERA_UP,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl ViewState3D {
    /// Unit vector to the camera's right, `(target - pos) × up`.
    ///
    /// Fails when `up` is parallel to the view direction or the camera sits
    /// on its target.
    pub fn camera_right(&self) -> Result<DVec3, EngineError> {
        let right = (self.camera_target - self.camera_pos).cross(self.camera_up);
        unit(right).map_err(|_| EngineError::DegenerateGeometry("camera up is parallel to view"))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let finite = self.camera_pos.is_finite()
            && self.camera_target.is_finite()
            && self.camera_up.is_finite()
            && self.rotation_x.is_finite()
            && self.rotation_y.is_finite();
        if !finite {
            return Err(EngineError::invalid("camera pose is not finite"));
        }
        self.camera_right()
            .map(|_| ())
            .map_err(|_| EngineError::invalid("degenerate camera basis"))
    }

    /// Translate the camera along its right and up axes.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), EngineError> {
        let right = self.camera_right()?;
        let pos = self.camera_pos
            + right * (dx * CAMERA_PAN_SPEED)
            + self.camera_up * (dy * CAMERA_PAN_SPEED);
        self.commit_position(pos)
    }

    /// Move the camera `(1 - factor) / 2` of the way toward its target.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), EngineError> {
        if !factor.is_finite() {
            return Err(EngineError::invalid("zoom factor is not finite"));
        }
        let direction = self.camera_target - self.camera_pos;
        let pos = self.camera_pos + direction * ((1.0 - factor) * 0.5);
        self.commit_position(pos)
    }

    pub fn rotate(&mut self, dx: f64, dy: f64) -> Result<(), EngineError> {
        let rotation_y = self.rotation_y + dx * CAMERA_ROTATE_SPEED;
        let rotation_x = self.rotation_x + dy * CAMERA_ROTATE_SPEED;
        if !(rotation_x.is_finite() && rotation_y.is_finite()) {
            return Err(EngineError::invalid("rotation is not finite"));
        }
        self.rotation_x = rotation_x;
        self.rotation_y = rotation_y;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotation angles in degrees, wrapped to [0, 360) for display.
    pub fn rotation_degrees(&self) -> (f64, f64) {
        (
            self.rotation_x.to_degrees().rem_euclid(360.0),
            self.rotation_y.to_degrees().rem_euclid(360.0),
        )
    }

    fn commit_position(&mut self, pos: DVec3) -> Result<(), EngineError> {
        let candidate = Self {
            camera_pos: pos,
            ..*self
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn pan_scales_inversely_with_zoom() {
        let mut shallow = ViewState2D::new((0.0, 0.0), 1.0).unwrap();
        let mut deep = ViewState2D::new((0.0, 0.0), 100.0).unwrap();
        shallow.pan(10.0, 0.0, 400).unwrap();
        deep.pan(10.0, 0.0, 400).unwrap();
        assert!(close(shallow.center.0, -0.1));
        assert!(close(deep.center.0, -0.001));
    }

    #[test]
    fn pan_round_trip_restores_center() {
        let mut view = ViewState2D::new((-0.75, 0.1), 37.0).unwrap();
        let before = view.center;
        view.pan(13.0, -7.0, 640).unwrap();
        view.pan(-13.0, 7.0, 640).unwrap();
        assert!(close(view.center.0, before.0));
        assert!(close(view.center.1, before.1));
    }

    #[test]
    fn pan_rejects_zero_width() {
        let mut view = ViewState2D::new((0.0, 0.0), 1.0).unwrap();
        assert!(view.pan(1.0, 1.0, 0).is_err());
        assert_eq!(view.center, (0.0, 0.0));
    }

    #[test]
    fn zoom_is_multiplicative_and_invertible() {
        let mut view = ViewState2D::new((0.0, 0.0), 2.0).unwrap();
        view.zoom_by(1.1).unwrap();
        view.zoom_by(1.1).unwrap();
        assert!(close(view.zoom, 2.0 * 1.1 * 1.1));
        view.zoom_by(1.0 / 1.1).unwrap();
        view.zoom_by(1.0 / 1.1).unwrap();
        assert!(close(view.zoom, 2.0));
    }

    #[test]
    fn zoom_rejects_non_positive_factor() {
        let mut view = ViewState2D::new((0.0, 0.0), 1.0).unwrap();
        assert!(view.zoom_by(0.0).is_err());
        assert!(view.zoom_by(-1.0).is_err());
        assert!(view.zoom_by(f64::NAN).is_err());
        assert_eq!(view.zoom, 1.0);
    }

    #[test]
    fn zoom_rejects_underflow_to_zero() {
        let mut view = ViewState2D::new((0.0, 0.0), 1e-300).unwrap();
        assert!(view.zoom_by(1e-300).is_err());
        assert_eq!(view.zoom, 1e-300);
    }

    #[test]
    fn new_rejects_bad_state() {
        assert!(ViewState2D::new((0.0, 0.0), 0.0).is_err());
        assert!(ViewState2D::new((f64::INFINITY, 0.0), 1.0).is_err());
    }

    #[test]
    fn reset_restores_variant_defaults() {
        let mut view = ViewState2D::for_variant(&FractalVariant::BurningShip);
        view.pan(50.0, 20.0, 300).unwrap();
        view.zoom_by(1.1).unwrap();
        view.reset();
        assert_eq!(view, ViewState2D::for_variant(&FractalVariant::BurningShip));
    }

    #[test]
    fn jump_to_rejects_invalid_zoom() {
        let mut view = ViewState2D::for_variant(&FractalVariant::Mandelbrot);
        let poi = PointOfInterest {
            name: "broken",
            x: 0.0,
            y: 0.0,
            zoom: 0.0,
        };
        assert!(view.jump_to(&poi).is_err());
        assert_eq!(view, ViewState2D::for_variant(&FractalVariant::Mandelbrot));
    }

    #[test]
    fn default_camera_right_axis() {
        let right = ViewState3D::default().camera_right().unwrap();
        assert!(close(right.x, -1.0));
        assert!(close(right.y, 0.0));
        assert!(close(right.z, 0.0));
    }

    #[test]
    fn camera_pan_moves_along_right_and_up() {
        let mut view = ViewState3D::default();
        view.pan(10.0, 5.0).unwrap();
        assert!(close(view.camera_pos.x, -0.1));
        assert!(close(view.camera_pos.y, 0.05));
        assert!(close(view.camera_pos.z, -3.0));
    }

    #[test]
    fn camera_zoom_moves_toward_target() {
        let mut view = ViewState3D::default();
        view.zoom_by(0.9).unwrap();
        // (1 - 0.9) * 0.5 = 5% of the way from -3 to 0
        assert!(close(view.camera_pos.z, -2.85));
        view.zoom_by(1.1).unwrap();
        assert!(close(view.camera_pos.z, -2.85 - 0.05 * 2.85));
    }

    #[test]
    fn camera_zoom_onto_target_is_rejected() {
        let mut view = ViewState3D::default();
        // factor -1 moves the camera the whole way onto the target
        assert!(view.zoom_by(-1.0).is_err());
        assert_eq!(view, ViewState3D::default());
    }

    #[test]
    fn parallel_up_is_degenerate() {
        let view = ViewState3D {
            camera_up: DVec3::new(0.0, 0.0, 1.0),
            ..ViewState3D::default()
        };
        assert!(view.validate().is_err());
        assert!(matches!(
            view.camera_right(),
            Err(EngineError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn rotate_accumulates_and_reset_clears() {
        let mut view = ViewState3D::default();
        view.rotate(100.0, -50.0).unwrap();
        assert!(close(view.rotation_y, 1.0));
        assert!(close(view.rotation_x, -0.5));
        view.pan(3.0, 4.0).unwrap();
        view.zoom_by(0.9).unwrap();
        view.reset();
        assert_eq!(view, ViewState3D::default());
    }

    #[test]
    fn rotation_degrees_wraps_for_display() {
        let view = ViewState3D {
            rotation_x: -std::f64::consts::FRAC_PI_2,
            rotation_y: 5.0 * std::f64::consts::PI,
            ..ViewState3D::default()
        };
        let (x, y) = view.rotation_degrees();
        assert!((x - 270.0).abs() < 1e-9);
        assert!((y - 180.0).abs() < 1e-9);
    }
}
