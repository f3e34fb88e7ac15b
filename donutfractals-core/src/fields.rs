// donutfractals-core/src/fields.rs

use serde::{Deserialize, Serialize};

/// Escape iteration count per pixel, row-major.
///
/// A value equal to `max_iterations` means the orbit never escaped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationField {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub data: Vec<u32>,
}

impl IterationField {
    pub fn get(&self, row: u32, col: u32) -> u32 {
        self.data[(row * self.width + col) as usize]
    }

    /// Whether an iteration count marks a non-escaping point.
    ///
    /// With a zero iteration budget nothing is ever tested, so nothing is
    /// considered inside.
    #[inline]
    pub fn is_inside(&self, iterations: u32) -> bool {
        self.max_iterations > 0 && iterations >= self.max_iterations
    }

    /// Iteration count scaled to [0, 1]; zero when the budget is zero.
    #[inline]
    pub fn normalized(&self, iterations: u32) -> f64 {
        if self.max_iterations == 0 {
            0.0
        } else {
            iterations as f64 / self.max_iterations as f64
        }
    }
}

/// Result of marching one camera ray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    pub hit: bool,
    /// Ambient plus diffuse shading in [0, 1]; 0.0 on a miss.
    pub intensity: f64,
}

impl RayHit {
    pub const MISS: RayHit = RayHit {
        hit: false,
        intensity: 0.0,
    };

    pub fn hit(intensity: f64) -> Self {
        Self {
            hit: true,
            intensity: intensity.clamp(0.0, 1.0),
        }
    }
}

/// Ray-march results per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayHitField {
    pub width: u32,
    pub height: u32,
    pub data: Vec<RayHit>,
}

impl RayHitField {
    pub fn get(&self, row: u32, col: u32) -> RayHit {
        self.data[(row * self.width + col) as usize]
    }
}

/// Tightly packed 8-bit RGB, row-major, no stride padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbImage {
    pub const CHANNELS: usize = 3;

    pub fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * Self::CHANNELS
    }

    pub fn pixel(&self, row: u32, col: u32) -> [u8; 3] {
        let i = (row as usize * self.width as usize + col as usize) * Self::CHANNELS;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Bytes per row; always `width * 3`.
    pub fn stride(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}
