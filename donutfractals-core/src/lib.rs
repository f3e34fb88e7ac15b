pub mod complex;
pub mod config;
pub mod error;
pub mod fields;
pub mod pixel_grid;
pub mod presets;
pub mod variant;
pub mod vec3;
pub mod view_state;

pub use complex::Complex;
pub use config::{
    clamp_slider_iterations, ColorScheme, EngineConfig, MarchConfig, WindowConfig,
    DEFAULT_MAX_ITERATIONS, DEFAULT_POWER, MAX_SLIDER_ITERATIONS, MIN_SLIDER_ITERATIONS,
};
pub use error::EngineError;
pub use fields::{IterationField, RayHit, RayHitField, RgbImage};
pub use pixel_grid::PixelGrid;
pub use presets::{
    julia_parameter, points_of_interest, JuliaParameter, PointOfInterest, JULIA_PARAMETERS,
};
pub use variant::{Dimension, FractalVariant, Pipeline};
pub use vec3::{unit, DVec3};
pub use view_state::{ViewState2D, ViewState3D};
