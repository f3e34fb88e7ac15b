//! f64 vectors for camera poses, rays and normals.

use crate::EngineError;
pub use glam::DVec3;

/// Unit vector in the same direction as `v`.
///
/// Fails for zero-length and non-finite vectors.
pub fn unit(v: DVec3) -> Result<DVec3, EngineError> {
    v.try_normalize()
        .ok_or(EngineError::DegenerateGeometry("zero or non-finite vector"))
}
