//! Command-line options.

use crate::settings::DEFAULT_CONFIG_PATH;
use clap::{Parser, ValueEnum};
use donutfractals_core::ColorScheme;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    Donut,
    Glaze,
}

impl From<SchemeArg> for ColorScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Donut => ColorScheme::Donut,
            SchemeArg::Glaze => ColorScheme::Glaze,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "donutfractals")]
#[command(about = "Render one fractal frame to a PNG or JPEG file")]
pub struct Args {
    /// Settings file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Catalog name to render
    #[arg(short, long, default_value = "Mandelbrot")]
    pub fractal: String,

    /// Named Julia parameter, e.g. "Douady Rabbit"
    #[arg(long)]
    pub julia: Option<String>,

    /// Output size as WIDTHxHEIGHT (default: window size from settings)
    #[arg(short, long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Iteration slider value, clamped to 50..=1000
    #[arg(short, long)]
    pub iterations: Option<u32>,

    /// Mandelbulb power
    #[arg(long)]
    pub power: Option<f64>,

    /// 2D view center as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub center: Option<(f64, f64)>,

    /// 2D zoom
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Pointer drag in pixels as DX,DY: pans in 2D, orbits the camera in 3D
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub drag: Option<(f64, f64)>,

    /// Jump to a named point of interest
    #[arg(long)]
    pub bookmark: Option<String>,

    /// Colour scheme
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Output image, .png or .jpg
    #[arg(short, long, default_value = "fractal.png")]
    pub output: PathBuf,

    /// List the fractal catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Write the effective settings to --config and exit
    #[arg(long)]
    pub save_config: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("bad size component {v:?}: {e}"))
    };
    Ok((parse(w)?, parse(h)?))
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("donutfractals").chain(list.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(args.fractal, "Mandelbrot");
        assert_eq!(args.output, PathBuf::from("fractal.png"));
        assert_eq!(args.size, None);
        assert!(!args.list);
    }

    #[test]
    fn parses_full_command_line() {
        let args = parse(&[
            "--fractal",
            "Burning Ship",
            "--size",
            "320x200",
            "--iterations",
            "500",
            "--center",
            "-1.75,-0.03",
            "--zoom",
            "100",
            "--scheme",
            "glaze",
            "-o",
            "ship.jpg",
        ])
        .unwrap();
        assert_eq!(args.fractal, "Burning Ship");
        assert_eq!(args.size, Some((320, 200)));
        assert_eq!(args.iterations, Some(500));
        assert_eq!(args.center, Some((-1.75, -0.03)));
        assert_eq!(args.zoom, Some(100.0));
        assert_eq!(args.scheme.map(ColorScheme::from), Some(ColorScheme::Glaze));
        assert_eq!(args.output, PathBuf::from("ship.jpg"));
    }

    #[test]
    fn drag_accepts_negative_deltas() {
        let args = parse(&["--fractal", "Mandelbulb", "--drag", "-40,12"]).unwrap();
        assert_eq!(args.drag, Some((-40.0, 12.0)));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(parse(&["--size"]).is_err());
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(parse(&["--size", "320"]).is_err());
        assert!(parse(&["--size", "wide x tall"]).is_err());
        assert!(parse(&["--center", "0.5"]).is_err());
        assert!(parse(&["--zoom", "deep"]).is_err());
        assert!(parse(&["--scheme", "rainbow"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
    }
}
