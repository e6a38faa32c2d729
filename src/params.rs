//! Per-category parameter sets
//!
//! One plain struct per category with the slider defaults and declared
//! ranges. The UI clamps to the ranges; the samplers still reject
//! non-positive counts and non-finite floats on their own.

use serde::{Deserialize, Serialize};

use crate::shapes::chaos::ChaosKind;
use crate::shapes::curve::CurveKind;
use crate::shapes::field::FieldKind;
use crate::shapes::fractal::{FractalMode, Palette};
use crate::shapes::polyhedron::PolyhedronKind;
use crate::shapes::surface::SurfaceKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalParams {
    pub mode: FractalMode,
    pub max_iterations: u32,
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub c_re: f64,
    pub c_im: f64,
    pub smooth: bool,
    pub palette: Palette,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            mode: FractalMode::Mandelbrot,
            max_iterations: 100,
            zoom: 1.0,
            offset_x: -0.5,
            offset_y: 0.0,
            c_re: -0.7,
            c_im: 0.27,
            smooth: true,
            palette: Palette::Rainbow,
        }
    }
}

impl FractalParams {
    pub const ITERATIONS_RANGE: std::ops::RangeInclusive<u32> = 10..=500;
    pub const ZOOM_RANGE: std::ops::RangeInclusive<f64> = 0.01..=10.0;
    pub const OFFSET_RANGE: std::ops::RangeInclusive<f64> = -2.0..=2.0;
    pub const C_RANGE: std::ops::RangeInclusive<f64> = -1.0..=1.0;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceParams {
    pub kind: SurfaceKind,
    pub resolution: usize,
    pub scale: f64,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            kind: SurfaceKind::Torus,
            resolution: 48,
            scale: 1.0,
        }
    }
}

impl SurfaceParams {
    pub const RESOLUTION_RANGE: std::ops::RangeInclusive<usize> = 8..=128;
    pub const SCALE_RANGE: std::ops::RangeInclusive<f64> = 0.2..=3.0;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldParams {
    pub kind: FieldKind,
    pub density: u32,
    pub intensity: f64,
    /// Sparsification seed; reseeding redraws which arrows are shown.
    pub seed: u64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            kind: FieldKind::Curl,
            density: 8,
            intensity: 1.0,
            seed: 0,
        }
    }
}

impl FieldParams {
    pub const DENSITY_RANGE: std::ops::RangeInclusive<u32> = 2..=20;
    pub const INTENSITY_RANGE: std::ops::RangeInclusive<f64> = 0.1..=5.0;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaosParams {
    pub kind: ChaosKind,
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    pub speed: f64,
    pub steps: u32,
}

impl Default for ChaosParams {
    fn default() -> Self {
        Self {
            kind: ChaosKind::Lorenz,
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            speed: 1.0,
            steps: 3000,
        }
    }
}

impl ChaosParams {
    pub const SIGMA_RANGE: std::ops::RangeInclusive<f64> = 0.1..=20.0;
    pub const RHO_RANGE: std::ops::RangeInclusive<f64> = 0.1..=50.0;
    pub const BETA_RANGE: std::ops::RangeInclusive<f64> = 0.1..=5.0;
    pub const SPEED_RANGE: std::ops::RangeInclusive<f64> = 0.1..=3.0;
    pub const STEPS_RANGE: std::ops::RangeInclusive<u32> = 100..=10000;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyhedronParams {
    pub kind: PolyhedronKind,
    pub size: f64,
}

impl Default for PolyhedronParams {
    fn default() -> Self {
        Self {
            kind: PolyhedronKind::Icosahedron,
            size: 2.0,
        }
    }
}

impl PolyhedronParams {
    pub const SIZE_RANGE: std::ops::RangeInclusive<f64> = 0.5..=4.0;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveParams {
    pub kind: CurveKind,
    pub param_a: f64,
    pub param_b: f64,
    pub resolution: u32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            kind: CurveKind::Spiral,
            param_a: 1.0,
            param_b: 3.0,
            resolution: 500,
        }
    }
}

impl CurveParams {
    pub const PARAM_A_RANGE: std::ops::RangeInclusive<f64> = 0.1..=5.0;
    pub const PARAM_B_RANGE: std::ops::RangeInclusive<f64> = 0.5..=10.0;
    pub const RESOLUTION_RANGE: std::ops::RangeInclusive<u32> = 50..=2000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_inside_declared_ranges() {
        let f = FractalParams::default();
        assert!(FractalParams::ITERATIONS_RANGE.contains(&f.max_iterations));
        assert!(FractalParams::ZOOM_RANGE.contains(&f.zoom));
        assert!(FractalParams::OFFSET_RANGE.contains(&f.offset_x));
        assert!(FractalParams::C_RANGE.contains(&f.c_re));

        let s = SurfaceParams::default();
        assert!(SurfaceParams::RESOLUTION_RANGE.contains(&s.resolution));

        let c = ChaosParams::default();
        assert!(ChaosParams::SIGMA_RANGE.contains(&c.sigma));
        assert!(ChaosParams::STEPS_RANGE.contains(&c.steps));

        let k = CurveParams::default();
        assert!(CurveParams::RESOLUTION_RANGE.contains(&k.resolution));
    }
}
