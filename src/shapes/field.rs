//! Vector fields
//!
//! Analytic vector functions of (x,y,z), sampled on a lattice spanning a
//! fixed 10-unit cube. The field formulas are deterministic; only the
//! sparsification draw (which arrows to keep) consumes randomness, and the
//! caller supplies the seed so a given (parameters, seed) pair always
//! produces the same arrows.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{require_finite, GenError};

/// Edge length of the sampled cube.
pub const GRID_SIZE: f64 = 10.0;

/// Fraction of lattice points kept; the rest are skipped so the view
/// stays readable at high densities.
const KEEP_PROBABILITY: f64 = 0.3;

/// Softening added under the square root near the origin.
const SOFTENING: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    Curl,
    Gravity,
    Spiral,
    Uniform,
    Dipole,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Curl,
        FieldKind::Gravity,
        FieldKind::Spiral,
        FieldKind::Uniform,
        FieldKind::Dipole,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Curl => "curl",
            FieldKind::Gravity => "gravity",
            FieldKind::Spiral => "spiral",
            FieldKind::Uniform => "uniform",
            FieldKind::Dipole => "dipole",
        }
    }

    /// Parse a field name. Unknown names fall back to curl.
    pub fn from_name(name: &str) -> Self {
        match name {
            "curl" => FieldKind::Curl,
            "gravity" => FieldKind::Gravity,
            "spiral" => FieldKind::Spiral,
            "uniform" => FieldKind::Uniform,
            "dipole" => FieldKind::Dipole,
            other => {
                tracing::warn!("unknown field type '{}', defaulting to curl", other);
                FieldKind::Curl
            }
        }
    }
}

/// One sampled arrow: where it sits, which way it points, how strong the
/// field is there (drives color and length in the viewer).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FieldArrow {
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub magnitude: f32,
}

/// Evaluate the field vector at a point. Exact and total: the singular
/// fields (gravity, dipole) are softened so the origin sample is finite.
pub fn field_at(kind: FieldKind, x: f64, y: f64, z: f64, intensity: f64) -> [f64; 3] {
    match kind {
        FieldKind::Curl => [-y * intensity, x * intensity, 0.0],
        FieldKind::Gravity => {
            let r = (x * x + y * y + z * z + SOFTENING).sqrt();
            let k = intensity * 10.0 / (r * r * r);
            [-x * k, -y * k, -z * k]
        }
        FieldKind::Spiral => [-y * intensity, x * intensity, 0.5 * intensity],
        FieldKind::Uniform => [intensity, 0.0, 0.0],
        FieldKind::Dipole => {
            let r2 = x * x + y * y + z * z + SOFTENING;
            let r5 = r2 * r2 * r2.sqrt();
            let k = intensity * 100.0 / r5;
            [3.0 * x * z * k, 3.0 * y * z * k, (3.0 * z * z - r2) * k]
        }
    }
}

/// Sample a field on the lattice: density+1 points per axis spanning
/// [-5, 5], spacing `GRID_SIZE / density`. Each lattice point is kept with
/// probability 0.3 drawn from `seed`.
pub fn sample_field(
    kind: FieldKind,
    density: u32,
    intensity: f64,
    seed: u64,
) -> Result<Vec<FieldArrow>, GenError> {
    if density == 0 {
        return Err(GenError::invalid("density", "must be positive"));
    }
    require_finite("intensity", intensity)?;

    let step = GRID_SIZE / density as f64;
    let half = GRID_SIZE / 2.0;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arrows = Vec::new();

    for i in 0..=density {
        let x = -half + i as f64 * step;
        for j in 0..=density {
            let y = -half + j as f64 * step;
            for k in 0..=density {
                let z = -half + k as f64 * step;

                if rng.gen::<f64>() >= KEEP_PROBABILITY {
                    continue;
                }

                let v = field_at(kind, x, y, z, intensity);
                let magnitude = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
                let direction = if magnitude > 0.0 {
                    [
                        (v[0] / magnitude) as f32,
                        (v[1] / magnitude) as f32,
                        (v[2] / magnitude) as f32,
                    ]
                } else {
                    [0.0, 0.0, 0.0]
                };

                arrows.push(FieldArrow {
                    position: [x as f32, y as f32, z as f32],
                    direction,
                    magnitude: magnitude as f32,
                });
            }
        }
    }

    Ok(arrows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_density_rejected() {
        assert!(sample_field(FieldKind::Curl, 0, 1.0, 7).is_err());
    }

    #[test]
    fn non_finite_intensity_rejected() {
        assert!(sample_field(FieldKind::Curl, 4, f64::INFINITY, 7).is_err());
    }

    #[test]
    fn curl_is_exact() {
        let v = field_at(FieldKind::Curl, 1.0, 2.0, 3.0, 2.0);
        assert_eq!(v, [-4.0, 2.0, 0.0]);
    }

    #[test]
    fn singular_fields_finite_at_origin() {
        for kind in [FieldKind::Gravity, FieldKind::Dipole] {
            let v = field_at(kind, 0.0, 0.0, 0.0, 1.0);
            assert!(v.iter().all(|c| c.is_finite()), "{:?} at origin: {:?}", kind, v);
        }
    }

    #[test]
    fn same_seed_same_arrows() {
        let a = sample_field(FieldKind::Spiral, 6, 1.5, 42).unwrap();
        let b = sample_field(FieldKind::Spiral, 6, 1.5, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_sparsification() {
        let a = sample_field(FieldKind::Spiral, 6, 1.5, 1).unwrap();
        let b = sample_field(FieldKind::Spiral, 6, 1.5, 2).unwrap();
        // Same lattice, different subsets; positions should differ.
        let pa: Vec<_> = a.iter().map(|w| w.position).collect();
        let pb: Vec<_> = b.iter().map(|w| w.position).collect();
        assert_ne!(pa, pb);
    }

    #[test]
    fn directions_are_unit_length() {
        let arrows = sample_field(FieldKind::Gravity, 5, 1.0, 11).unwrap();
        assert!(!arrows.is_empty());
        for arrow in &arrows {
            let d = arrow.direction;
            let n = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
            assert!((n - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn lattice_spans_the_cube() {
        let arrows = sample_field(FieldKind::Uniform, 10, 1.0, 3).unwrap();
        for arrow in &arrows {
            for c in arrow.position {
                assert!(c >= -5.0 - 1e-4 && c <= 5.0 + 1e-4);
            }
        }
    }
}
