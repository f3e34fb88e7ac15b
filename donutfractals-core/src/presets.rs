//! Named places worth visiting in each escape-time family.

use crate::{Complex, FractalVariant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointOfInterest {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JuliaParameter {
    pub name: &'static str,
    pub c: Complex,
}

impl JuliaParameter {
    pub fn variant(&self) -> FractalVariant {
        FractalVariant::Julia { c: self.c }
    }
}

const fn poi(name: &'static str, x: f64, y: f64, zoom: f64) -> PointOfInterest {
    PointOfInterest { name, x, y, zoom }
}

pub static MANDELBROT_POINTS: &[PointOfInterest] = &[
    poi("Seahorse Valley", -0.75, 0.1, 100.0),
    poi("Elephant Valley", 0.3, 0.03, 50.0),
    poi("Triple Spiral", -0.761, 0.0852, 200.0),
    poi("Needle", -0.7, 0.3, 150.0),
    poi("Dendrite", -0.1592, 1.0317, 300.0),
    poi("San Marco", -0.75, 0.0, 50.0),
];

pub static BURNING_SHIP_POINTS: &[PointOfInterest] = &[
    poi("Main Ship", -0.5, -0.5, 1.0),
    poi("Mast Detail", -1.75, -0.03, 100.0),
    poi("Bow", -1.76, -0.02, 200.0),
    poi("Coastline", -1.625, -0.06, 150.0),
];

const fn julia(name: &'static str, re: f64, im: f64) -> JuliaParameter {
    JuliaParameter {
        name,
        c: Complex::new(re, im),
    }
}

pub static JULIA_PARAMETERS: &[JuliaParameter] = &[
    julia("Dendrite", -0.4, 0.6),
    julia("Dragon", -0.8, 0.156),
    julia("Douady Rabbit", -0.123, 0.745),
    julia("San Marco", -0.75, 0.0),
    julia("Siegel Disk", -0.391, -0.587),
    julia("Spiral", 0.285, 0.01),
    julia("Snowflake", -0.4, -0.59),
];

/// Bookmarks for a variant. Julia sets are explored by parameter instead.
pub fn points_of_interest(variant: &FractalVariant) -> &'static [PointOfInterest] {
    match variant {
        FractalVariant::Mandelbrot => MANDELBROT_POINTS,
        FractalVariant::BurningShip => BURNING_SHIP_POINTS,
        FractalVariant::Julia { .. } => &[],
    }
}

pub fn julia_parameter(name: &str) -> Option<&'static JuliaParameter> {
    JULIA_PARAMETERS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
