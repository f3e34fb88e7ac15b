//! Frame pipeline: one immutable request in, one RGB buffer out.

use crate::assembly::{assemble_iterations, assemble_ray_hits};
use crate::cancellation::CancellationChecker;
use crate::escape_time::escape_iterations;
use crate::ray_marcher::MarchContext;
use donutfractals_core::{
    ColorScheme, EngineError, FractalVariant, IterationField, MarchConfig, Pipeline, RayHit,
    RayHitField, RgbImage, ViewState2D, ViewState3D,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Copy of the view state taken when a frame is requested.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ViewSnapshot {
    TwoD(ViewState2D),
    ThreeD(ViewState3D),
}

/// Everything a frame depends on. Nothing here changes while it renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRequest {
    pub pipeline: Pipeline,
    pub view: ViewSnapshot,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub power: f64,
    pub march: MarchConfig,
    pub color_scheme: ColorScheme,
}

impl FrameRequest {
    /// Whole-frame validation; a frame that fails here renders nothing.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::invalid(format!(
                "frame must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        match (&self.pipeline, &self.view) {
            (Pipeline::EscapeTime(_), ViewSnapshot::TwoD(view)) => {
                if self.max_iterations == 0 {
                    return Err(EngineError::invalid("max_iterations must be at least 1"));
                }
                view.validate()
            }
            (Pipeline::Mandelbulb, ViewSnapshot::ThreeD(view)) => {
                if !(self.power.is_finite() && self.power > 0.0) {
                    return Err(EngineError::invalid(format!(
                        "power must be finite and positive, got {}",
                        self.power
                    )));
                }
                view.validate()?;
                self.march.validate()
            }
            (pipeline, _) => Err(EngineError::invalid(format!(
                "{:?} pipeline given a view of the wrong dimension",
                pipeline.dimension()
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutcome {
    Completed(RgbImage),
    /// A newer request superseded this one before it finished.
    Cancelled,
}

impl RenderOutcome {
    pub fn into_image(self) -> Option<RgbImage> {
        match self {
            Self::Completed(image) => Some(image),
            Self::Cancelled => None,
        }
    }
}

struct Cancelled;

/// Render one frame, checking `checker` before every row.
pub fn render_frame<C: CancellationChecker>(
    request: &FrameRequest,
    checker: &C,
) -> Result<RenderOutcome, EngineError> {
    if let Err(e) = request.validate() {
        log::warn!("Frame rejected: {e}");
        return Err(e);
    }

    let started = std::time::Instant::now();
    let image = match (&request.pipeline, &request.view) {
        (Pipeline::EscapeTime(variant), ViewSnapshot::TwoD(view)) => {
            render_escape(request, variant, view, checker)?
        }
        (Pipeline::Mandelbulb, ViewSnapshot::ThreeD(view)) => render_bulb(request, view, checker)?,
        // unreachable after validate
        _ => return Err(EngineError::invalid("pipeline and view dimension differ")),
    };

    match image {
        Some(image) => {
            log::debug!(
                "Rendered {}x{} {:?} in {:.1}ms",
                request.width,
                request.height,
                request.pipeline,
                started.elapsed().as_secs_f64() * 1000.0
            );
            Ok(RenderOutcome::Completed(image))
        }
        None => {
            log::debug!(
                "Frame abandoned after {:.1}ms",
                started.elapsed().as_secs_f64() * 1000.0
            );
            Ok(RenderOutcome::Cancelled)
        }
    }
}

fn render_escape<C: CancellationChecker>(
    request: &FrameRequest,
    variant: &FractalVariant,
    view: &ViewState2D,
    checker: &C,
) -> Result<Option<RgbImage>, EngineError> {
    let grid = view.pixel_grid(request.width, request.height)?;
    let max_iterations = request.max_iterations;
    let mut data = vec![0u32; grid.x_coords.len() * grid.y_coords.len()];

    let rows = data
        .par_chunks_mut(grid.width as usize)
        .zip(grid.y_coords.par_iter())
        .try_for_each(|(row, &y)| {
            if checker.is_cancelled() {
                return Err(Cancelled);
            }
            for (out, &x) in row.iter_mut().zip(&grid.x_coords) {
                *out = escape_iterations(x, y, variant, max_iterations);
            }
            Ok(())
        });
    if rows.is_err() || checker.is_cancelled() {
        return Ok(None);
    }

    let field = IterationField {
        width: grid.width,
        height: grid.height,
        max_iterations,
        data,
    };
    Ok(Some(assemble_iterations(&field, request.color_scheme)))
}

fn render_bulb<C: CancellationChecker>(
    request: &FrameRequest,
    view: &ViewState3D,
    checker: &C,
) -> Result<Option<RgbImage>, EngineError> {
    let ctx = MarchContext::new(
        view,
        request.power,
        request.width,
        request.height,
        &request.march,
    )?;
    let len = request.width as usize * request.height as usize;
    let mut data = vec![RayHit::MISS; len];

    let rows = data
        .par_chunks_mut(request.width as usize)
        .enumerate()
        .try_for_each(|(y, row)| {
            if checker.is_cancelled() {
                return Err(Cancelled);
            }
            ctx.trace_row(y as u32, row);
            Ok(())
        });
    if rows.is_err() || checker.is_cancelled() {
        return Ok(None);
    }

    let field = RayHitField {
        width: request.width,
        height: request.height,
        data,
    };
    Ok(Some(assemble_ray_hits(&field, request.color_scheme)))
}
