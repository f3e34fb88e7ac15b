//! Engine error types.

use thiserror::Error;

/// Why a frame (or a view mutation) was rejected.
///
/// Per-pixel numeric trouble never surfaces here; kernels clamp it locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported fractal: {0}")]
    UnsupportedVariant(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}

impl EngineError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
