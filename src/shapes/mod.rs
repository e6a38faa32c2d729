//! Shape generation layer
//!
//! Pure functions from (kind, parameters) to geometry. Nothing in here
//! touches the screen; each sampler returns plain point data that the
//! viewer projects and draws. Every call rebuilds its output from scratch,
//! so identical inputs always give identical geometry.
//!
//! One module per category:
//! - fractal: escape-time Mandelbrot/Julia coloring
//! - surface: parametric (u,v) surfaces on an n×n grid
//! - field: analytic vector fields on a lattice
//! - chaos: Lorenz/Rössler trajectories (forward Euler)
//! - curve: parametric curve families
//! - polyhedron: standard solids as wireframes

pub mod chaos;
pub mod curve;
pub mod field;
pub mod fractal;
pub mod polyhedron;
pub mod surface;

use thiserror::Error;

/// Errors raised before generation runs. Singularities inside a formula
/// (gravity at the origin, lemniscate gaps) are handled locally and never
/// surface as errors.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GenError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GenError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Check a float parameter for NaN/infinity before it reaches a formula.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, GenError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GenError::invalid(name, format!("must be finite, got {value}")))
    }
}

/// A generated shape, handed to the viewer as a single owned value.
/// Replacing it drops the previous one; nothing is shared or cached.
#[derive(Debug, Clone, serde::Serialize)]
pub enum Geometry {
    /// resolution×resolution grid of surface points, row-major.
    Surface(surface::SurfaceGrid),
    /// Sparse lattice of field arrows.
    Field(Vec<field::FieldArrow>),
    /// Time-ordered attractor trajectory.
    Trajectory(Vec<[f32; 3]>),
    /// Ordered curve samples.
    Curve(Vec<[f32; 3]>),
    /// Solid wireframe: vertices plus edge index pairs.
    Wireframe(polyhedron::Polyhedron),
}

impl Geometry {
    /// Number of points backing this shape (stats bar).
    pub fn point_count(&self) -> usize {
        match self {
            Geometry::Surface(grid) => grid.points.len(),
            Geometry::Field(arrows) => arrows.len(),
            Geometry::Trajectory(points) => points.len(),
            Geometry::Curve(points) => points.len(),
            Geometry::Wireframe(poly) => poly.vertices.len(),
        }
    }
}
