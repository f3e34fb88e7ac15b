//! Interactive explorer state.
//!
//! The GUI forwards pointer, wheel and slider events here and asks for a
//! frame whenever something changed. Each request carries a snapshot of the
//! state and a checker that trips as soon as a newer request is issued.

use crate::cancellation::{GenerationChecker, RenderGeneration};
use crate::renderer::{FrameRequest, ViewSnapshot};
use donutfractals_core::{
    clamp_slider_iterations, ColorScheme, EngineConfig, EngineError, MarchConfig, Pipeline,
    PointOfInterest, ViewState2D, ViewState3D,
};

/// Zoom factor applied per wheel notch toward the user.
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Zoom factor applied per wheel notch away from the user.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionView {
    TwoD(ViewState2D),
    ThreeD(ViewState3D),
}

impl SessionView {
    fn for_pipeline(pipeline: &Pipeline) -> Self {
        match pipeline {
            Pipeline::EscapeTime(variant) => Self::TwoD(ViewState2D::for_variant(variant)),
            Pipeline::Mandelbulb => Self::ThreeD(ViewState3D::default()),
        }
    }
}

pub struct ExplorerSession {
    pipeline: Pipeline,
    view: SessionView,
    max_iterations: u32,
    power: f64,
    march: MarchConfig,
    color_scheme: ColorScheme,
    /// Last screen width seen, for 2D pan scaling.
    screen_width: u32,
    generation: RenderGeneration,
}

impl ExplorerSession {
    pub fn new(pipeline: Pipeline, config: &EngineConfig) -> Self {
        log::info!("Starting session for {pipeline:?}");
        Self {
            pipeline,
            view: SessionView::for_pipeline(&pipeline),
            max_iterations: clamp_slider_iterations(config.max_iterations),
            power: config.power,
            march: config.march,
            color_scheme: config.color_scheme,
            screen_width: config.window.width,
            generation: RenderGeneration::new(),
        }
    }

    pub fn pipeline(&self) -> Pipeline {
        self.pipeline
    }

    pub fn view(&self) -> SessionView {
        self.view
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Switch fractal. The old view state is discarded and any in-flight
    /// render is superseded.
    pub fn select(&mut self, pipeline: Pipeline) {
        log::info!("Selected {pipeline:?}");
        self.pipeline = pipeline;
        self.view = SessionView::for_pipeline(&pipeline);
        self.generation.invalidate();
    }

    /// Primary-button drag: pan in 2D, orbit in 3D.
    pub fn drag(&mut self, dx: f64, dy: f64) -> Result<(), EngineError> {
        match &mut self.view {
            SessionView::TwoD(view) => view.pan(dx, dy, self.screen_width),
            SessionView::ThreeD(view) => view.rotate(dx, dy),
        }
    }

    /// Modified drag: moves the 3D camera; pans in 2D.
    pub fn shift_drag(&mut self, dx: f64, dy: f64) -> Result<(), EngineError> {
        match &mut self.view {
            SessionView::TwoD(view) => view.pan(dx, dy, self.screen_width),
            SessionView::ThreeD(view) => view.pan(dx, dy),
        }
    }

    /// Only the sign of the wheel delta matters.
    pub fn wheel(&mut self, delta: f64) -> Result<(), EngineError> {
        let factor = if delta > 0.0 {
            WHEEL_ZOOM_IN
        } else {
            WHEEL_ZOOM_OUT
        };
        match &mut self.view {
            SessionView::TwoD(view) => view.zoom_by(factor),
            SessionView::ThreeD(view) => view.zoom_by(factor),
        }
    }

    /// Window resized; later 2D drags scale to the new width.
    pub fn resize(&mut self, width: u32) {
        self.screen_width = width;
    }

    pub fn set_max_iterations(&mut self, value: u32) {
        self.max_iterations = clamp_slider_iterations(value);
    }

    pub fn set_power(&mut self, power: f64) -> Result<(), EngineError> {
        if !(power.is_finite() && power > 0.0) {
            return Err(EngineError::invalid(format!(
                "power must be finite and positive, got {power}"
            )));
        }
        self.power = power;
        Ok(())
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
    }

    pub fn jump_to(&mut self, poi: &PointOfInterest) -> Result<(), EngineError> {
        match &mut self.view {
            SessionView::TwoD(view) => view.jump_to(poi),
            SessionView::ThreeD(_) => Err(EngineError::invalid(
                "points of interest only apply to 2D fractals",
            )),
        }
    }

    pub fn reset(&mut self) {
        match &mut self.view {
            SessionView::TwoD(view) => view.reset(),
            SessionView::ThreeD(view) => view.reset(),
        }
    }

    /// Snapshot the current state for a `width × height` frame.
    pub fn request_frame(&mut self, width: u32, height: u32) -> (FrameRequest, GenerationChecker) {
        self.screen_width = width;
        let view = match self.view {
            SessionView::TwoD(v) => ViewSnapshot::TwoD(v),
            SessionView::ThreeD(v) => ViewSnapshot::ThreeD(v),
        };
        let request = FrameRequest {
            pipeline: self.pipeline,
            view,
            width,
            height,
            max_iterations: self.max_iterations,
            power: self.power,
            march: self.march,
            color_scheme: self.color_scheme,
        };
        (request, self.generation.begin())
    }
}
