//! Parametric curves
//!
//! Six closed-form families sampled over t ∈ [0, 2π·param_b]. Output is a
//! bare ordered polyline; whether the viewer sweeps a tube along it is a
//! presentation choice, not the sampler's.

use std::f64::consts::PI;

use super::{require_finite, GenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CurveKind {
    Spiral,
    Helix,
    Lissajous,
    Rose,
    Cardioid,
    Lemniscate,
}

impl CurveKind {
    pub const ALL: [CurveKind; 6] = [
        CurveKind::Spiral,
        CurveKind::Helix,
        CurveKind::Lissajous,
        CurveKind::Rose,
        CurveKind::Cardioid,
        CurveKind::Lemniscate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Spiral => "spiral",
            CurveKind::Helix => "helix",
            CurveKind::Lissajous => "lissajous",
            CurveKind::Rose => "rose",
            CurveKind::Cardioid => "cardioid",
            CurveKind::Lemniscate => "lemniscate",
        }
    }

    /// Parse a curve name. Unknown names fall back to the spiral.
    pub fn from_name(name: &str) -> Self {
        match name {
            "spiral" => CurveKind::Spiral,
            "helix" => CurveKind::Helix,
            "lissajous" => CurveKind::Lissajous,
            "rose" => CurveKind::Rose,
            "cardioid" => CurveKind::Cardioid,
            "lemniscate" => CurveKind::Lemniscate,
            other => {
                tracing::warn!("unknown curve type '{}', defaulting to spiral", other);
                CurveKind::Spiral
            }
        }
    }
}

/// Evaluate one curve at parameter t. Returns None for lemniscate samples
/// where cos 2t < 0, where the radius is undefined over the reals.
fn curve_point(kind: CurveKind, t: f64, a: f64, b: f64) -> Option<[f64; 3]> {
    match kind {
        CurveKind::Spiral => Some([a * t * t.cos(), a * t * t.sin(), t * 0.5]),
        CurveKind::Helix => Some([a * t.cos(), a * t.sin(), t]),
        CurveKind::Lissajous => Some([
            (a * t).sin(),
            (b * t + PI / 2.0).sin(),
            (3.0 * t).sin() * 0.5,
        ]),
        CurveKind::Rose => {
            let k = 3.0 / b;
            let r = (k * t).cos() * a;
            Some([r * t.cos(), r * t.sin(), 0.0])
        }
        CurveKind::Cardioid => {
            let r = a * (1.0 + t.cos());
            Some([r * t.cos(), r * t.sin(), 0.0])
        }
        CurveKind::Lemniscate => {
            let c = (2.0 * t).cos();
            if c < 0.0 {
                return None;
            }
            let r = a * c.sqrt();
            Some([r * t.cos(), r * t.sin(), 0.0])
        }
    }
}

/// Sample `resolution + 1` parameter values over [0, 2π·param_b].
///
/// Most curves return exactly resolution+1 points. The lemniscate skips the
/// samples where cos 2t < 0 instead of emitting NaN coordinates, so its
/// polyline holds only the real lobes and may be shorter.
pub fn sample_curve(
    kind: CurveKind,
    param_a: f64,
    param_b: f64,
    resolution: u32,
) -> Result<Vec<[f32; 3]>, GenError> {
    if resolution == 0 {
        return Err(GenError::invalid("resolution", "must be positive"));
    }
    require_finite("param_a", param_a)?;
    require_finite("param_b", param_b)?;
    if kind == CurveKind::Rose && param_b == 0.0 {
        return Err(GenError::invalid("param_b", "must be nonzero for the rose curve"));
    }

    let mut points = Vec::with_capacity(resolution as usize + 1);
    for i in 0..=resolution {
        let t = (i as f64 / resolution as f64) * PI * 2.0 * param_b;
        if let Some(p) = curve_point(kind, t, param_a, param_b) {
            points.push([p[0] as f32, p[1] as f32, p[2] as f32]);
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helix_has_monotonic_z() {
        let points = sample_curve(CurveKind::Helix, 1.0, 3.0, 200).unwrap();
        assert_eq!(points.len(), 201);
        for pair in points.windows(2) {
            assert!(pair[1][2] > pair[0][2], "z must strictly increase");
        }
    }

    #[test]
    fn spiral_count_matches_resolution() {
        let points = sample_curve(CurveKind::Spiral, 0.5, 2.0, 150).unwrap();
        assert_eq!(points.len(), 151);
    }

    #[test]
    fn lemniscate_never_emits_nan() {
        let points = sample_curve(CurveKind::Lemniscate, 2.0, 1.0, 400).unwrap();
        // cos 2t < 0 over half of each period, so samples were dropped.
        assert!(points.len() < 401);
        assert!(!points.is_empty());
        for p in &points {
            assert!(p.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn cardioid_touches_origin() {
        // r = a(1 + cos t) vanishes at t = π.
        let points = sample_curve(CurveKind::Cardioid, 1.0, 1.0, 360).unwrap();
        let min_r = points
            .iter()
            .map(|p| (p[0] * p[0] + p[1] * p[1]).sqrt())
            .fold(f32::INFINITY, f32::min);
        assert!(min_r < 1e-3);
    }

    #[test]
    fn lissajous_stays_in_unit_box() {
        let points = sample_curve(CurveKind::Lissajous, 3.0, 2.0, 500).unwrap();
        for p in &points {
            assert!(p[0].abs() <= 1.0 + 1e-5);
            assert!(p[1].abs() <= 1.0 + 1e-5);
            assert!(p[2].abs() <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn rose_with_zero_b_rejected() {
        assert!(sample_curve(CurveKind::Rose, 1.0, 0.0, 100).is_err());
    }

    #[test]
    fn zero_resolution_rejected() {
        assert!(sample_curve(CurveKind::Helix, 1.0, 1.0, 0).is_err());
    }

    #[test]
    fn sampling_is_idempotent() {
        let a = sample_curve(CurveKind::Rose, 1.5, 2.0, 300).unwrap();
        let b = sample_curve(CurveKind::Rose, 1.5, 2.0, 300).unwrap();
        assert_eq!(a, b);
    }
}
