use donutfractals_core::{Complex, FractalVariant, IterationField, PixelGrid};
use rayon::prelude::*;

/// Orbits whose modulus exceeds this have escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Escape-time iteration for a single point using f64 arithmetic.
///
/// Returns the first iteration index `n` at which `|z| > 2` is observed,
/// or `max_iterations` if the orbit stays bounded. The modulus test sees
/// NaN as "not escaped", so a point whose orbit turns into NaN reports
/// `max_iterations` instead of an escape.
#[inline]
pub fn escape_iterations(x: f64, y: f64, variant: &FractalVariant, max_iterations: u32) -> u32 {
    let pixel = Complex::new(x, y);
    let (mut z, c) = match *variant {
        FractalVariant::Mandelbrot | FractalVariant::BurningShip => (Complex::ZERO, pixel),
        FractalVariant::Julia { c } => (pixel, c),
    };
    let fold = matches!(variant, FractalVariant::BurningShip);

    for n in 0..max_iterations {
        if z.abs() > ESCAPE_RADIUS {
            return n;
        }
        if fold {
            z = z.fold_abs();
        }
        z = z.square_add(c);
    }
    max_iterations
}

/// Compute the iteration field for every `(y, x)` pair of the coordinate
/// arrays. Rows are computed in parallel and land in row order.
pub fn compute_escape_field(
    x_coords: &[f64],
    y_coords: &[f64],
    variant: &FractalVariant,
    max_iterations: u32,
) -> IterationField {
    let width = x_coords.len();
    let height = y_coords.len();
    let mut data = vec![0u32; width * height];

    if width > 0 && max_iterations > 0 {
        data.par_chunks_mut(width)
            .zip(y_coords.par_iter())
            .for_each(|(row, &y)| {
                for (out, &x) in row.iter_mut().zip(x_coords) {
                    *out = escape_iterations(x, y, variant, max_iterations);
                }
            });
    }

    IterationField {
        width: width as u32,
        height: height as u32,
        max_iterations,
        data,
    }
}

/// Convenience wrapper over a precomputed grid.
pub fn compute_grid(
    grid: &PixelGrid,
    variant: &FractalVariant,
    max_iterations: u32,
) -> IterationField {
    compute_escape_field(&grid.x_coords, &grid.y_coords, variant, max_iterations)
}
