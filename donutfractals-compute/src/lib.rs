pub mod assembly;
pub mod cancellation;
pub mod colormap;
pub mod distance_estimator;
pub mod escape_time;
pub mod ray_marcher;
pub mod renderer;
pub mod session;

pub use assembly::{assemble_iterations, assemble_ray_hits};
pub use cancellation::{
    AtomicBoolChecker, CancellationChecker, GenerationChecker, NeverCancel, RenderGeneration,
};
pub use colormap::{colorize, colorize_with, IN_SET_COLOR};
pub use distance_estimator::{clamp_distance, distance_estimate, estimate_normal};
pub use escape_time::{compute_escape_field, compute_grid, escape_iterations};
pub use ray_marcher::{march_ray, render_ray_march, rotate_vector, MarchContext};
pub use renderer::{render_frame, FrameRequest, RenderOutcome, ViewSnapshot};
pub use session::{ExplorerSession, SessionView};

// Re-export core types for convenience
pub use donutfractals_core::*;
