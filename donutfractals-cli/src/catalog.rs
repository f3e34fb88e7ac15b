//! Fractal catalog shown to users.
//!
//! Most entries are names only; `resolve` fails closed for anything without
//! a kernel instead of quietly rendering a Mandelbrot.

use donutfractals_core::{Dimension, EngineError, FractalVariant, Pipeline};

pub struct CatalogEntry {
    pub name: &'static str,
    pub dimension: Dimension,
    pub description: &'static str,
    /// 1 (simple) to 5 (demanding).
    pub complexity: u8,
    pub pipeline: Option<Pipeline>,
}

const fn planned(
    name: &'static str,
    dimension: Dimension,
    description: &'static str,
    complexity: u8,
) -> CatalogEntry {
    CatalogEntry {
        name,
        dimension,
        description,
        complexity,
        pipeline: None,
    }
}

#[rustfmt::skip]
pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Mandelbrot",
        dimension: Dimension::TwoD,
        description: "Classic Mandelbrot set - the most famous fractal",
        complexity: 3,
        pipeline: Some(Pipeline::EscapeTime(FractalVariant::Mandelbrot)),
    },
    CatalogEntry {
        name: "Julia Set",
        dimension: Dimension::TwoD,
        description: "Beautiful Julia set with customizable parameters",
        complexity: 3,
        pipeline: Some(Pipeline::EscapeTime(FractalVariant::julia_default())),
    },
    CatalogEntry {
        name: "Burning Ship",
        dimension: Dimension::TwoD,
        description: "The burning ship fractal - dramatic coastline appearance",
        complexity: 4,
        pipeline: Some(Pipeline::EscapeTime(FractalVariant::BurningShip)),
    },
    planned("Newton", Dimension::TwoD, "Newton's method fractal - colorful basin boundaries", 3),
    planned("Phoenix", Dimension::TwoD, "Phoenix fractal - rising from complex dynamics", 4),
    planned("Tricorn", Dimension::TwoD, "Mandelbar or Tricorn - conjugate Mandelbrot", 3),
    planned("Barnsley Fern", Dimension::TwoD, "Iterated function system fern", 2),
    planned("Sierpinski", Dimension::TwoD, "Sierpinski triangle", 2),
    planned("Dragon Curve", Dimension::TwoD, "Heighway dragon curve", 2),
    planned("Koch Snowflake", Dimension::TwoD, "Koch snowflake curve", 2),
    planned("Apollonian", Dimension::TwoD, "Apollonian gasket - circle packing fractal", 3),
    planned("Lyapunov", Dimension::TwoD, "Lyapunov fractal - chaos theory visualization", 4),
    planned("Bifurcation", Dimension::TwoD, "Logistic map bifurcation diagram", 3),
    planned("Hilbert Curve", Dimension::TwoD, "Space-filling Hilbert curve", 2),
    planned("Gosper Curve", Dimension::TwoD, "Gosper or flowsnake curve", 3),
    CatalogEntry {
        name: "Mandelbulb",
        dimension: Dimension::ThreeD,
        description: "3D Mandelbrot - stunning bulbous fractal",
        complexity: 5,
        pipeline: Some(Pipeline::Mandelbulb),
    },
    planned("Menger Sponge", Dimension::ThreeD, "3D Sierpinski - infinite holes", 4),
    planned("Sierpinski 3D", Dimension::ThreeD, "Tetrahedral Sierpinski pyramid", 3),
    planned("Julia 3D", Dimension::ThreeD, "3D Julia set - mesmerizing complexity", 4),
    planned("Quaternion", Dimension::ThreeD, "4D quaternion Julia in 3D space", 5),
    planned("Mandelbox", Dimension::ThreeD, "Box-like fractal with amazing detail", 5),
    planned("Klein Bottle", Dimension::ThreeD, "Non-orientable surface fractal", 4),
    planned("Lorenz", Dimension::ThreeD, "Chaotic Lorenz attractor butterfly", 3),
    planned("Cube Fractal", Dimension::ThreeD, "Recursive cube subdivision", 3),
    planned("Dodecahedron", Dimension::ThreeD, "12-sided polyhedron fractal", 4),
    planned("Icosahedron", Dimension::ThreeD, "20-sided polyhedron fractal", 4),
    planned("Tree 3D", Dimension::ThreeD, "3D fractal tree structure", 3),
    planned("Apollonian 3D", Dimension::ThreeD, "3D sphere packing fractal", 4),
    planned("Tetrahedron", Dimension::ThreeD, "Tetrahedral fractal subdivision", 3),
    planned("Octahedron", Dimension::ThreeD, "8-sided octahedral fractal", 3),
];

pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Resolve a catalog name to the pipeline that renders it.
pub fn resolve(name: &str) -> Result<Pipeline, EngineError> {
    match find(name) {
        Some(CatalogEntry {
            pipeline: Some(pipeline),
            ..
        }) => Ok(*pipeline),
        Some(entry) => Err(EngineError::UnsupportedVariant(format!(
            "{} has no renderer yet",
            entry.name
        ))),
        None => Err(EngineError::UnsupportedVariant(format!(
            "unknown fractal {name:?}"
        ))),
    }
}

pub fn entries(dimension: Dimension) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |e| e.dimension == dimension)
}
