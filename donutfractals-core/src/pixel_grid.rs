use crate::view_state::BASE_EXTENT;
use crate::EngineError;
use serde::{Deserialize, Serialize};

/// Fractal-space coordinates of every pixel column and row.
///
/// The vertical extent is `4 / zoom`; the horizontal extent is stretched by
/// the aspect ratio. Endpoints are inclusive, so the first and last columns
/// sit exactly on the view edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
    pub x_coords: Vec<f64>,
    pub y_coords: Vec<f64>,
}

impl PixelGrid {
    pub fn new(
        center: (f64, f64),
        zoom: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::invalid(format!(
                "pixel grid needs a non-empty screen, got {width}x{height}"
            )));
        }
        let aspect = width as f64 / height as f64;
        let height_range = BASE_EXTENT / zoom;
        let width_range = height_range * aspect;

        let x_coords = linspace(
            center.0 - width_range / 2.0,
            center.0 + width_range / 2.0,
            width as usize,
        );
        let y_coords = linspace(
            center.1 - height_range / 2.0,
            center.1 + height_range / 2.0,
            height as usize,
        );

        Ok(Self {
            width,
            height,
            x_coords,
            y_coords,
        })
    }
}

/// `n` evenly spaced samples from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut coords: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            coords[n - 1] = stop;
            coords
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_requested_shape() {
        let grid = PixelGrid::new((0.0, 0.0), 1.0, 64, 48).unwrap();
        assert_eq!(grid.x_coords.len(), 64);
        assert_eq!(grid.y_coords.len(), 48);
    }

    #[test]
    fn grid_spans_aspect_corrected_extent() {
        let grid = PixelGrid::new((0.0, 0.0), 1.0, 200, 100).unwrap();
        assert_eq!(grid.y_coords[0], -2.0);
        assert_eq!(grid.y_coords[99], 2.0);
        assert_eq!(grid.x_coords[0], -4.0);
        assert_eq!(grid.x_coords[199], 4.0);
    }

    #[test]
    fn grid_extent_shrinks_with_zoom() {
        let grid = PixelGrid::new((-0.5, 0.25), 4.0, 10, 10).unwrap();
        assert!((grid.y_coords[0] - (0.25 - 0.5)).abs() < 1e-12);
        assert!((grid.y_coords[9] - (0.25 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn coordinates_increase_monotonically() {
        let grid = PixelGrid::new((0.3, -0.1), 7.5, 33, 17).unwrap();
        assert!(grid.x_coords.windows(2).all(|w| w[0] < w[1]));
        assert!(grid.y_coords.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_pixel_grid_uses_start() {
        let grid = PixelGrid::new((1.0, 1.0), 1.0, 1, 1).unwrap();
        assert_eq!(grid.x_coords, vec![-1.0]);
        assert_eq!(grid.y_coords, vec![-1.0]);
    }

    #[test]
    fn empty_screen_is_rejected() {
        assert!(PixelGrid::new((0.0, 0.0), 1.0, 0, 10).is_err());
    }
}
