//! Headless renderer: one frame from the command line to an image file.

mod args;
mod catalog;
mod error;
mod export;
mod settings;

use args::Args;
use clap::Parser;
use donutfractals_compute::{
    render_frame, ExplorerSession, RenderOutcome, SessionView, ViewSnapshot,
};
use donutfractals_core::{
    julia_parameter, points_of_interest, Dimension, EngineConfig, FractalVariant, Pipeline,
};
use error::CliError;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    if args.list {
        print_catalog();
        return Ok(());
    }

    let mut config = settings::load_config(&args.config);
    if let Err(e) = config.validate() {
        log::warn!("Ignoring invalid settings: {e}");
        config = EngineConfig::default();
    }
    if let Some(scheme) = args.scheme {
        config.color_scheme = scheme.into();
    }
    if args.save_config {
        return settings::save_config(&config, &args.config)
            .map_err(|e| {
                CliError::Usage(format!("cannot save {}: {e}", args.config.display()))
            });
    }

    // Fail on a bad extension before spending time on the render.
    export::format_for(&args.output)?;

    let pipeline = select_pipeline(args)?;
    let (width, height) = args
        .size
        .unwrap_or((config.window.width, config.window.height));
    let mut session = ExplorerSession::new(pipeline, &config);
    session.resize(width);
    if let Some(n) = args.iterations {
        session.set_max_iterations(n);
    }
    if let Some(power) = args.power {
        session.set_power(power)?;
    }
    if let Some(name) = &args.bookmark {
        let variant = match pipeline {
            Pipeline::EscapeTime(variant) => variant,
            Pipeline::Mandelbulb => {
                return Err(CliError::Usage(
                    "bookmarks only apply to 2D fractals".into(),
                ));
            }
        };
        let poi = points_of_interest(&variant)
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CliError::Usage(format!("no bookmark named {name:?}")))?;
        session.jump_to(poi)?;
    }
    if let Some((dx, dy)) = args.drag {
        session.drag(dx, dy)?;
    }
    if let SessionView::ThreeD(view) = session.view() {
        let (rx, ry) = view.rotation_degrees();
        log::info!("Camera rotation {rx:.1} deg about X, {ry:.1} deg about Y");
    }

    let (mut request, checker) = session.request_frame(width, height);
    if args.center.is_some() || args.zoom.is_some() {
        match &mut request.view {
            ViewSnapshot::TwoD(view) => {
                if let Some(center) = args.center {
                    view.center = center;
                }
                if let Some(zoom) = args.zoom {
                    view.zoom = zoom;
                }
            }
            ViewSnapshot::ThreeD(_) => {
                return Err(CliError::Usage(
                    "--center and --zoom only apply to 2D fractals".into(),
                ));
            }
        }
    }

    log::info!(
        "Rendering {} at {width}x{height}, {} iterations",
        describe(&pipeline),
        request.max_iterations
    );
    let image = match render_frame(&request, &checker)? {
        RenderOutcome::Completed(image) => image,
        RenderOutcome::Cancelled => return Err(CliError::Cancelled),
    };
    export::save_image(&image, &args.output)
}

fn select_pipeline(args: &Args) -> Result<Pipeline, CliError> {
    if let Some(name) = &args.julia {
        let param = julia_parameter(name)
            .ok_or_else(|| CliError::Usage(format!("unknown Julia parameter {name:?}")))?;
        return Ok(Pipeline::EscapeTime(param.variant()));
    }
    Ok(catalog::resolve(&args.fractal)?)
}

fn describe(pipeline: &Pipeline) -> String {
    match pipeline {
        Pipeline::EscapeTime(FractalVariant::Julia { c }) => {
            format!("Julia Set (c = {} + {}i)", c.re, c.im)
        }
        Pipeline::EscapeTime(variant) => variant.display_name().to_string(),
        Pipeline::Mandelbulb => "Mandelbulb".to_string(),
    }
}

fn print_catalog() {
    for (dimension, title) in [(Dimension::TwoD, "2D"), (Dimension::ThreeD, "3D")] {
        println!("{title} fractals:");
        for entry in catalog::entries(dimension) {
            let status = if entry.pipeline.is_some() { "" } else { " (planned)" };
            println!(
                "  {:<20} {}{}  [complexity {}]",
                entry.name, entry.description, status, entry.complexity
            );
        }
    }
}
