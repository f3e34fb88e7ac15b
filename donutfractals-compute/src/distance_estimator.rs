//! Mandelbulb distance estimator.
//!
//! Iterates the spherical power map z ← |z|ⁿ·(angles · n) + p while tracking
//! the running derivative, then returns the logarithmic bound
//! `0.5 · ln r · r / dr`.

use donutfractals_core::{unit, DVec3, EngineError};

/// Inner iteration cap when the caller has no preference.
pub const DEFAULT_DE_ITERATIONS: u32 = 10;
/// Central-difference step for normals.
pub const DEFAULT_NORMAL_EPSILON: f64 = 0.001;

const BAILOUT: f64 = 2.0;

/// Raw distance estimate to the power-`power` Mandelbulb.
///
/// Not clamped: `pos` at the origin gives NaN (`ln 0 · 0`), and points whose
/// orbit stays inside the unit sphere give negative values. Marchers pass
/// the result through [`clamp_distance`] before stepping.
pub fn distance_estimate(pos: DVec3, power: f64, iter_cap: u32) -> f64 {
    let mut z = pos;
    let mut dr = 1.0_f64;
    let mut r = 0.0_f64;

    for _ in 0..iter_cap {
        r = z.length();
        if r > BAILOUT {
            break;
        }

        let theta = (z.x * z.x + z.y * z.y).sqrt().atan2(z.z) * power;
        let phi = z.y.atan2(z.x) * power;

        dr = r.powf(power - 1.0) * power * dr + 1.0;

        let zr = r.powf(power);
        z = DVec3::new(
            theta.sin() * phi.cos(),
            phi.sin() * theta.sin(),
            theta.cos(),
        ) * zr
            + pos;
    }

    0.5 * r.ln() * r / dr
}

/// Make an estimate safe to step by: NaN, infinities and negative values
/// become `far`, which pushes the ray past its travel budget.
#[inline]
pub fn clamp_distance(distance: f64, far: f64) -> f64 {
    if distance.is_finite() && distance >= 0.0 {
        distance
    } else {
        far
    }
}

/// Surface normal at `pos` from the central-difference gradient of the
/// estimator.
///
/// Fails with `DegenerateGeometry` when the gradient is zero or not
/// finite; callers shade such points with ambient light only.
pub fn estimate_normal(
    pos: DVec3,
    power: f64,
    iter_cap: u32,
    eps: f64,
) -> Result<DVec3, EngineError> {
    let de = |offset: DVec3| distance_estimate(pos + offset, power, iter_cap);
    let gradient = DVec3::new(
        de(DVec3::new(eps, 0.0, 0.0)) - de(DVec3::new(-eps, 0.0, 0.0)),
        de(DVec3::new(0.0, eps, 0.0)) - de(DVec3::new(0.0, -eps, 0.0)),
        de(DVec3::new(0.0, 0.0, eps)) - de(DVec3::new(0.0, 0.0, -eps)),
    );
    unit(gradient).map_err(|_| EngineError::DegenerateGeometry("no usable surface normal"))
}
