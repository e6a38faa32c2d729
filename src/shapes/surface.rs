//! Parametric surfaces
//!
//! Six closed-form mappings (u,v) ∈ [0,1]² → (x,y,z), sampled on a
//! resolution×resolution grid and scaled uniformly.

use std::f64::consts::PI;

use super::{require_finite, GenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SurfaceKind {
    Torus,
    Klein,
    Mobius,
    Sphere,
    Paraboloid,
    Catenoid,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 6] = [
        SurfaceKind::Torus,
        SurfaceKind::Klein,
        SurfaceKind::Mobius,
        SurfaceKind::Sphere,
        SurfaceKind::Paraboloid,
        SurfaceKind::Catenoid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::Torus => "torus",
            SurfaceKind::Klein => "klein",
            SurfaceKind::Mobius => "mobius",
            SurfaceKind::Sphere => "sphere",
            SurfaceKind::Paraboloid => "paraboloid",
            SurfaceKind::Catenoid => "catenoid",
        }
    }

    /// Parse a surface name. Unknown names fall back to the torus.
    pub fn from_name(name: &str) -> Self {
        match name {
            "torus" => SurfaceKind::Torus,
            "klein" => SurfaceKind::Klein,
            "mobius" => SurfaceKind::Mobius,
            "sphere" => SurfaceKind::Sphere,
            "paraboloid" => SurfaceKind::Paraboloid,
            "catenoid" => SurfaceKind::Catenoid,
            other => {
                tracing::warn!("unknown surface type '{}', defaulting to torus", other);
                SurfaceKind::Torus
            }
        }
    }
}

/// Row-major grid of surface points.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SurfaceGrid {
    pub resolution: usize,
    pub points: Vec<[f32; 3]>,
}

impl SurfaceGrid {
    /// Point at grid position (i, j).
    pub fn at(&self, i: usize, j: usize) -> [f32; 3] {
        self.points[j * self.resolution + i]
    }
}

/// Evaluate one surface at normalized parameters (u,v) ∈ [0,1]².
pub fn surface_point(kind: SurfaceKind, u: f64, v: f64, scale: f64) -> [f64; 3] {
    match kind {
        SurfaceKind::Torus => {
            // Ring radius 2·scale, tube radius 0.8·scale.
            let (major, minor) = (2.0 * scale, 0.8 * scale);
            let (a, b) = (u * 2.0 * PI, v * 2.0 * PI);
            [
                (major + minor * b.cos()) * a.cos(),
                (major + minor * b.cos()) * a.sin(),
                minor * b.sin(),
            ]
        }
        SurfaceKind::Klein => klein_point(u * 2.0 * PI, v * 2.0 * PI, scale),
        SurfaceKind::Mobius => {
            let a = u * 2.0 * PI;
            let w = v * 2.0 - 1.0; // strip coordinate in [-1, 1]
            [
                (1.0 + (w / 2.0) * (a / 2.0).cos()) * a.cos() * scale,
                (1.0 + (w / 2.0) * (a / 2.0).cos()) * a.sin() * scale,
                (w / 2.0) * (a / 2.0).sin() * scale,
            ]
        }
        SurfaceKind::Sphere => {
            let r = 2.0 * scale;
            let (theta, phi) = (u * 2.0 * PI, v * PI);
            [
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ]
        }
        SurfaceKind::Paraboloid => {
            // Saddle z = (x² − y²)·0.2 over [-2, 2]².
            let x = (u - 0.5) * 4.0;
            let y = (v - 0.5) * 4.0;
            [x * scale, y * scale, (x * x - y * y) * 0.2 * scale]
        }
        SurfaceKind::Catenoid => {
            let a = u * 2.0 * PI;
            let h = (v - 0.5) * 4.0;
            [
                a.cos() * h.cosh() * scale,
                a.sin() * h.cosh() * scale,
                h * scale,
            ]
        }
    }
}

/// Figure-8 immersion of the Klein bottle, piecewise in u.
/// The two halves share the same value at u = π; changing either branch
/// opens a visible seam there.
fn klein_point(u: f64, v: f64, scale: f64) -> [f64; 3] {
    let (x, z) = if u < PI {
        (
            3.0 * u.cos() * (1.0 + u.sin()) + 2.0 * (1.0 - u.cos() / 2.0) * u.cos() * v.cos(),
            -8.0 * u.sin() - 2.0 * (1.0 - u.cos() / 2.0) * u.sin() * v.cos(),
        )
    } else {
        (
            3.0 * u.cos() * (1.0 + u.sin()) + 2.0 * (1.0 - u.cos() / 2.0) * (v + PI).cos(),
            -8.0 * u.sin(),
        )
    };
    let y = -2.0 * (1.0 - u.cos() / 2.0) * v.sin();
    [x * 0.15 * scale, y * 0.15 * scale, z * 0.15 * scale]
}

/// Sample a surface on a resolution×resolution grid.
///
/// Returns exactly resolution² points; endpoints of the parameter square are
/// included (u = i/(resolution−1)).
pub fn sample_surface(
    kind: SurfaceKind,
    resolution: usize,
    scale: f64,
) -> Result<SurfaceGrid, GenError> {
    if resolution < 2 {
        return Err(GenError::invalid(
            "resolution",
            format!("must be at least 2, got {resolution}"),
        ));
    }
    require_finite("scale", scale)?;
    if scale <= 0.0 {
        return Err(GenError::invalid("scale", format!("must be positive, got {scale}")));
    }

    let step = 1.0 / (resolution - 1) as f64;
    let mut points = Vec::with_capacity(resolution * resolution);
    for j in 0..resolution {
        let v = j as f64 * step;
        for i in 0..resolution {
            let u = i as f64 * step;
            let p = surface_point(kind, u, v, scale);
            points.push([p[0] as f32, p[1] as f32, p[2] as f32]);
        }
    }

    Ok(SurfaceGrid { resolution, points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torus_grid_count_and_bounds() {
        let scale = 1.5;
        let grid = sample_surface(SurfaceKind::Torus, 20, scale).unwrap();
        assert_eq!(grid.points.len(), 400);

        // Everything lies within the outer radius (2 + 0.8)·scale.
        let bound = (2.0 + 0.8) * scale as f32 + 1e-4;
        for p in &grid.points {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!(r <= bound, "point {:?} outside bounding torus", p);
        }
    }

    #[test]
    fn klein_halves_join_at_seam() {
        // Both branch formulas must agree at u = π for every v.
        let eps = 1e-9;
        for k in 0..16 {
            let v = k as f64 / 16.0 * 2.0 * PI;
            let below = klein_point(PI - eps, v, 1.0);
            let above = klein_point(PI, v, 1.0);
            for axis in 0..3 {
                assert!(
                    (below[axis] - above[axis]).abs() < 1e-6,
                    "seam gap at v={v}: {below:?} vs {above:?}"
                );
            }
        }
    }

    #[test]
    fn degenerate_resolution_rejected() {
        assert!(sample_surface(SurfaceKind::Sphere, 1, 1.0).is_err());
        assert!(sample_surface(SurfaceKind::Sphere, 0, 1.0).is_err());
    }

    #[test]
    fn non_finite_scale_rejected() {
        assert!(sample_surface(SurfaceKind::Torus, 10, f64::NAN).is_err());
        assert!(sample_surface(SurfaceKind::Torus, 10, -1.0).is_err());
    }

    #[test]
    fn sphere_points_on_radius() {
        let grid = sample_surface(SurfaceKind::Sphere, 12, 1.0).unwrap();
        for p in &grid.points {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((r - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        let a = sample_surface(SurfaceKind::Mobius, 16, 1.0).unwrap();
        let b = sample_surface(SurfaceKind::Mobius, 16, 1.0).unwrap();
        assert_eq!(a.points, b.points);
    }
}
