//! Sphere tracing of the Mandelbulb from a [`ViewState3D`] camera.

use crate::distance_estimator::{clamp_distance, distance_estimate, estimate_normal};
use donutfractals_core::{unit, DVec3, EngineError, MarchConfig, RayHit, RayHitField, ViewState3D};
use rayon::prelude::*;

/// Per-frame constants shared by every ray.
#[derive(Clone, Copy, Debug)]
pub struct MarchContext {
    pub origin: DVec3,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub power: f64,
    pub width: u32,
    pub height: u32,
    pub aspect: f64,
    pub half_fov_tan: f64,
    pub light_dir: DVec3,
    pub config: MarchConfig,
}

impl MarchContext {
    /// Validate the frame parameters once and precompute shared constants.
    pub fn new(
        view: &ViewState3D,
        power: f64,
        width: u32,
        height: u32,
        config: &MarchConfig,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::invalid(format!(
                "screen must be non-empty, got {width}x{height}"
            )));
        }
        if !(power.is_finite() && power > 0.0) {
            return Err(EngineError::invalid(format!(
                "power must be finite and positive, got {power}"
            )));
        }
        view.validate()?;
        config.validate()?;

        Ok(Self {
            origin: view.camera_pos,
            rotation_x: view.rotation_x,
            rotation_y: view.rotation_y,
            power,
            width,
            height,
            aspect: width as f64 / height as f64,
            half_fov_tan: (config.fov_degrees / 2.0).to_radians().tan(),
            light_dir: unit(config.light_dir)?,
            config: *config,
        })
    }

    /// Unit ray direction through pixel `(x, y)`.
    pub fn ray_direction(&self, x: u32, y: u32) -> Result<DVec3, EngineError> {
        let px = (2.0 * x as f64 / self.width as f64 - 1.0) * self.aspect * self.half_fov_tan;
        let py = (1.0 - 2.0 * y as f64 / self.height as f64) * self.half_fov_tan;
        let dir = rotate_vector(DVec3::new(px, py, 1.0), self.rotation_x, self.rotation_y);
        unit(dir)
    }

    pub fn trace_pixel(&self, x: u32, y: u32) -> RayHit {
        match self.ray_direction(x, y) {
            Ok(dir) => march_ray(self.origin, dir, self),
            Err(_) => RayHit::MISS,
        }
    }

    /// Trace one screen row into `out`.
    pub fn trace_row(&self, y: u32, out: &mut [RayHit]) {
        for (x, hit) in out.iter_mut().enumerate() {
            *hit = self.trace_pixel(x as u32, y);
        }
    }
}

/// Rotate about the Y axis, then about the X axis.
pub fn rotate_vector(v: DVec3, angle_x: f64, angle_y: f64) -> DVec3 {
    let (sin_y, cos_y) = angle_y.sin_cos();
    let v = DVec3::new(v.x * cos_y - v.z * sin_y, v.y, v.x * sin_y + v.z * cos_y);

    let (sin_x, cos_x) = angle_x.sin_cos();
    DVec3::new(v.x, v.y * cos_x - v.z * sin_x, v.y * sin_x + v.z * cos_x)
}

/// Ambient plus Lambert diffuse. Without a usable normal only the ambient
/// term survives.
pub fn shade(normal: Result<DVec3, EngineError>, light_dir: DVec3, config: &MarchConfig) -> f64 {
    match normal {
        Ok(n) => config.ambient + config.diffuse * n.dot(light_dir).max(0.0),
        Err(_) => config.ambient,
    }
}

/// March from `origin` along unit `dir` until the estimate drops below
/// `min_dist`, the ray travels past `max_dist`, or `max_steps` run out.
///
/// A finite negative estimate is below `min_dist` and counts as a hit, so
/// only non-finite estimates ever reach the far clamp as a step length.
pub fn march_ray(origin: DVec3, dir: DVec3, ctx: &MarchContext) -> RayHit {
    let cfg = &ctx.config;
    let mut total_dist = 0.0;

    for _ in 0..cfg.max_steps {
        let pos = origin + dir * total_dist;
        let dist = distance_estimate(pos, ctx.power, cfg.de_iterations);

        if dist < cfg.min_dist {
            let normal = estimate_normal(pos, ctx.power, cfg.de_iterations, cfg.normal_epsilon);
            return RayHit::hit(shade(normal, ctx.light_dir, cfg));
        }

        total_dist += clamp_distance(dist, cfg.far_distance);
        if total_dist > cfg.max_dist {
            break;
        }
    }

    RayHit::MISS
}

/// Trace every pixel of a `width × height` screen. Rows run in parallel.
pub fn render_ray_march(
    view: &ViewState3D,
    power: f64,
    width: u32,
    height: u32,
    config: &MarchConfig,
) -> Result<RayHitField, EngineError> {
    let ctx = MarchContext::new(view, power, width, height, config)?;
    let mut data = vec![RayHit::MISS; width as usize * height as usize];

    data.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| ctx.trace_row(y as u32, row));

    Ok(RayHitField {
        width,
        height,
        data,
    })
}
