//! Viewer State - Single Source of Truth (SSOT)
//!
//! Owns the active category, one parameter set per category, and the single
//! live geometry handle. All the numeric work lives in `crate::shapes`;
//! this module is pure dispatch.

use crate::params::{
    ChaosParams, CurveParams, FieldParams, FractalParams, PolyhedronParams, SurfaceParams,
};
use crate::shapes::{self, GenError, Geometry};
use num_complex::Complex64;

/// The six gallery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Fractals,
    Surfaces,
    Fields,
    Chaos,
    Polyhedra,
    Curves,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Fractals,
        Category::Surfaces,
        Category::Fields,
        Category::Chaos,
        Category::Polyhedra,
        Category::Curves,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Fractals => "fractals",
            Category::Surfaces => "surfaces",
            Category::Fields => "fields",
            Category::Chaos => "chaos",
            Category::Polyhedra => "polyhedra",
            Category::Curves => "curves",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fractals => "Fractals",
            Category::Surfaces => "Surfaces",
            Category::Fields => "Vector Fields",
            Category::Chaos => "Chaos",
            Category::Polyhedra => "Polyhedra",
            Category::Curves => "Curves",
        }
    }

    /// Parse a category name. Unknown names fall back to fractals.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fractals" => Category::Fractals,
            "surfaces" => Category::Surfaces,
            "fields" | "vector" => Category::Fields,
            "chaos" => Category::Chaos,
            "polyhedra" => Category::Polyhedra,
            "curves" => Category::Curves,
            other => {
                tracing::warn!("unknown category '{}', defaulting to fractals", other);
                Category::Fractals
            }
        }
    }

    /// Home camera position when this category is entered.
    pub fn camera_home(&self) -> [f32; 3] {
        match self {
            Category::Fractals => [0.0, 0.0, 5.0],
            Category::Surfaces => [8.0, 8.0, 8.0],
            Category::Fields => [15.0, 15.0, 15.0],
            Category::Chaos => [15.0, 15.0, 15.0],
            Category::Polyhedra => [5.0, 5.0, 5.0],
            Category::Curves => [8.0, 8.0, 8.0],
        }
    }
}

/// Explicit viewer state, passed around instead of ambient globals.
pub struct ViewerState {
    pub category: Category,
    pub fractal: FractalParams,
    pub surface: SurfaceParams,
    pub field: FieldParams,
    pub chaos: ChaosParams,
    pub polyhedron: PolyhedronParams,
    pub curve: CurveParams,
    geometry: Option<Geometry>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            category: Category::Fractals,
            fractal: FractalParams::default(),
            surface: SurfaceParams::default(),
            field: FieldParams::default(),
            chaos: ChaosParams::default(),
            polyhedron: PolyhedronParams::default(),
            curve: CurveParams::default(),
            geometry: None,
        }
    }

    /// The single live geometry handle, if the active category has one.
    /// Fractals render through the per-pixel pass instead.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Switch categories: drop the old geometry and build the new
    /// category's shape from its current parameters.
    pub fn switch_category(&mut self, category: Category) -> Result<(), GenError> {
        tracing::info!("switching category to {}", category.name());
        self.geometry = None;
        self.category = category;
        self.regenerate()
    }

    /// Rebuild only the active category's geometry. The previous handle is
    /// replaced only when generation succeeds, so an invalid parameter
    /// leaves the displayed shape untouched.
    pub fn regenerate(&mut self) -> Result<(), GenError> {
        let built = match self.category {
            Category::Fractals => {
                // Validated here so a broken value is caught before the
                // render pass runs; the image itself is produced by
                // crate::render on demand.
                let p = &self.fractal;
                shapes::fractal::validate_inputs(
                    p.max_iterations,
                    p.zoom,
                    Complex64::new(p.offset_x, p.offset_y),
                    Complex64::new(p.c_re, p.c_im),
                )?;
                self.geometry = None;
                return Ok(());
            }
            Category::Surfaces => {
                let p = &self.surface;
                Geometry::Surface(shapes::surface::sample_surface(p.kind, p.resolution, p.scale)?)
            }
            Category::Fields => {
                let p = &self.field;
                Geometry::Field(shapes::field::sample_field(
                    p.kind,
                    p.density,
                    p.intensity,
                    p.seed,
                )?)
            }
            Category::Chaos => {
                let p = &self.chaos;
                Geometry::Trajectory(shapes::chaos::integrate_chaos(
                    p.kind, p.sigma, p.rho, p.beta, p.speed, p.steps,
                )?)
            }
            Category::Polyhedra => {
                let p = &self.polyhedron;
                Geometry::Wireframe(shapes::polyhedron::build_polyhedron(p.kind, p.size)?)
            }
            Category::Curves => {
                let p = &self.curve;
                Geometry::Curve(shapes::curve::sample_curve(
                    p.kind,
                    p.param_a,
                    p.param_b,
                    p.resolution,
                )?)
            }
        };

        tracing::debug!(
            category = self.category.name(),
            points = built.point_count(),
            "geometry rebuilt"
        );
        self.geometry = Some(built);
        Ok(())
    }

    /// Name of the active shape within the current category.
    pub fn active_shape_name(&self) -> &'static str {
        match self.category {
            Category::Fractals => self.fractal.mode.name(),
            Category::Surfaces => self.surface.kind.name(),
            Category::Fields => self.field.kind.name(),
            Category::Chaos => self.chaos.kind.name(),
            Category::Polyhedra => self.polyhedron.kind.name(),
            Category::Curves => self.curve.kind.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::surface::SurfaceKind;

    #[test]
    fn switching_builds_the_category_default() {
        let mut state = ViewerState::new();
        state.switch_category(Category::Surfaces).unwrap();
        match state.geometry() {
            Some(Geometry::Surface(grid)) => {
                assert_eq!(grid.points.len(), grid.resolution * grid.resolution);
            }
            other => panic!(
                "expected surface geometry, got {:?}",
                other.map(|g| g.point_count())
            ),
        }
    }

    #[test]
    fn switching_discards_previous_geometry() {
        let mut state = ViewerState::new();
        state.switch_category(Category::Polyhedra).unwrap();
        assert!(state.geometry().is_some());
        state.switch_category(Category::Fractals).unwrap();
        assert!(state.geometry().is_none()); // fractals use the render pass
    }

    #[test]
    fn invalid_parameter_keeps_previous_shape() {
        let mut state = ViewerState::new();
        state.switch_category(Category::Surfaces).unwrap();
        let before = match state.geometry().unwrap() {
            Geometry::Surface(grid) => grid.points.clone(),
            _ => unreachable!(),
        };

        state.surface.resolution = 1; // below the declared minimum
        assert!(state.regenerate().is_err());

        match state.geometry().unwrap() {
            Geometry::Surface(grid) => assert_eq!(grid.points, before),
            _ => panic!("geometry replaced despite error"),
        }
    }

    #[test]
    fn parameter_change_regenerates_only_active_shape() {
        let mut state = ViewerState::new();
        state.switch_category(Category::Surfaces).unwrap();
        state.surface.kind = SurfaceKind::Sphere;
        state.surface.resolution = 12;
        state.regenerate().unwrap();
        match state.geometry().unwrap() {
            Geometry::Surface(grid) => assert_eq!(grid.points.len(), 144),
            _ => panic!("wrong geometry kind"),
        }
    }

    #[test]
    fn camera_homes_differ_per_category() {
        assert_eq!(Category::Fractals.camera_home(), [0.0, 0.0, 5.0]);
        assert_eq!(Category::Chaos.camera_home(), [15.0, 15.0, 15.0]);
    }
}
