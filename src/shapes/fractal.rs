//! Escape-time fractals
//!
//! Per-sample Mandelbrot/Julia iteration z → z² + c with optional smooth
//! (continuous) coloring and five palettes. The evaluator runs once per
//! displayed pixel; the render pass in `crate::render` drives it over a
//! whole image.

use num_complex::Complex64;
use std::f64::consts::LN_2;

use super::{require_finite, GenError};

/// Which set is being iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FractalMode {
    /// z₀ = 0, c = sample
    Mandelbrot,
    /// z₀ = sample, c fixed
    Julia,
}

impl FractalMode {
    /// Parse a mode name. Unknown names fall back to Mandelbrot.
    pub fn from_name(name: &str) -> Self {
        match name {
            "mandelbrot" => FractalMode::Mandelbrot,
            "julia" => FractalMode::Julia,
            other => {
                tracing::warn!("unknown fractal mode '{}', defaulting to mandelbrot", other);
                FractalMode::Mandelbrot
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FractalMode::Mandelbrot => "mandelbrot",
            FractalMode::Julia => "julia",
        }
    }
}

/// Color ramp applied to the normalized escape value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Palette {
    Rainbow,
    Ice,
    Fire,
    Neon,
    Sunset,
}

impl Palette {
    pub const ALL: [Palette; 5] = [
        Palette::Rainbow,
        Palette::Ice,
        Palette::Fire,
        Palette::Neon,
        Palette::Sunset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Rainbow => "rainbow",
            Palette::Ice => "ice",
            Palette::Fire => "fire",
            Palette::Neon => "neon",
            Palette::Sunset => "sunset",
        }
    }

    /// Parse a palette name. Unknown names fall back to rainbow.
    pub fn from_name(name: &str) -> Self {
        match name {
            "rainbow" => Palette::Rainbow,
            "ice" => Palette::Ice,
            "fire" => Palette::Fire,
            "neon" => Palette::Neon,
            "sunset" => Palette::Sunset,
            other => {
                tracing::warn!("unknown palette '{}', defaulting to rainbow", other);
                Palette::Rainbow
            }
        }
    }
}

/// Outcome of iterating a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Escape {
    /// The orbit left the radius-2 disk.
    Outside {
        /// Completed iterations before the escape was detected.
        iterations: u32,
        /// Raw iteration count, or the continuous value when smoothing is on.
        value: f64,
    },
    /// Still bounded after max_iterations.
    Inside,
}

/// Iterate z → z² + c until |z|² > 4 or `max_iterations` is reached.
///
/// With smoothing, the value is `i + 1 − log₂(log₂|z|)` evaluated on the
/// first escaped iterate, which removes the integer banding.
pub fn escape_time(
    sample: Complex64,
    mode: FractalMode,
    c: Complex64,
    max_iterations: u32,
    smooth: bool,
) -> Escape {
    let (mut z, c) = match mode {
        FractalMode::Mandelbrot => (Complex64::new(0.0, 0.0), sample),
        FractalMode::Julia => (sample, c),
    };

    for i in 0..max_iterations {
        let w = z * z + c;
        if w.norm_sqr() > 4.0 {
            let value = if smooth {
                let log_zn = w.norm_sqr().ln() / 2.0;
                let nu = (log_zn / LN_2).ln() / LN_2;
                i as f64 + 1.0 - nu
            } else {
                i as f64
            };
            return Escape::Outside {
                iterations: i,
                value,
            };
        }
        z = w;
    }

    Escape::Inside
}

/// Map a normalized escape value t ∈ [0,1] through a palette.
pub fn palette_color(t: f64, palette: Palette) -> [f32; 3] {
    let t = t as f32;
    match palette {
        Palette::Rainbow => {
            let hue = |offset: f32| 0.5 + 0.5 * (6.28318 * (t + offset)).cos();
            [hue(0.0), hue(0.33), hue(0.67)]
        }
        Palette::Ice => [0.0, 0.2 * t, 0.5 + 0.5 * t],
        Palette::Fire => [t, t * 0.5, 0.0],
        Palette::Neon => [t * 0.5, t, t * 0.5],
        Palette::Sunset => [t, t * 0.7, 0.0],
    }
}

/// Full per-sample contract: escape value normalized by max_iterations,
/// mapped through the palette. Non-escaping samples are pure black no matter
/// which palette is selected.
pub fn evaluate_fractal(
    sample: Complex64,
    mode: FractalMode,
    c: Complex64,
    max_iterations: u32,
    smooth: bool,
    palette: Palette,
) -> [f32; 3] {
    match escape_time(sample, mode, c, max_iterations, smooth) {
        Escape::Inside => [0.0, 0.0, 0.0],
        Escape::Outside { value, .. } => {
            let t = value / max_iterations as f64;
            palette_color(t, palette)
        }
    }
}

/// Map viewport coordinates (u,v) ∈ [0,1]² to the complex plane:
/// a 4-unit window scaled by zoom and recentered by offset.
pub fn plane_sample(u: f64, v: f64, zoom: f64, offset: Complex64) -> Complex64 {
    Complex64::new((u - 0.5) * 4.0 * zoom, (v - 0.5) * 4.0 * zoom) + offset
}

/// Validate evaluator inputs shared by the render pass. A non-finite
/// offset would poison every sample (NaN never exceeds the escape radius),
/// so it is rejected here like zoom and c.
pub fn validate_inputs(
    max_iterations: u32,
    zoom: f64,
    offset: Complex64,
    c: Complex64,
) -> Result<(), GenError> {
    if max_iterations == 0 {
        return Err(GenError::invalid("max_iterations", "must be at least 1"));
    }
    require_finite("zoom", zoom)?;
    require_finite("offset.re", offset.re)?;
    require_finite("offset.im", offset.im)?;
    require_finite("c.re", c.re)?;
    require_finite("c.im", c.im)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_sample_escapes_immediately() {
        // |sample| > 2 means z₁ = c already escapes, at iteration 0.
        let s = Complex64::new(3.0, 0.0);
        match escape_time(s, FractalMode::Mandelbrot, Complex64::new(0.0, 0.0), 100, false) {
            Escape::Outside { iterations, value } => {
                assert_eq!(iterations, 0);
                assert_eq!(value, 0.0);
            }
            Escape::Inside => panic!("sample outside radius 2 must escape"),
        }
    }

    #[test]
    fn interior_sample_is_black_for_every_palette() {
        // c = -0.5 lies in the main cardioid.
        let s = Complex64::new(-0.5, 0.0);
        for palette in Palette::ALL {
            let origin = Complex64::new(0.0, 0.0);
            let rgb = evaluate_fractal(s, FractalMode::Mandelbrot, origin, 500, true, palette);
            assert_eq!(rgb, [0.0, 0.0, 0.0], "palette {:?}", palette);
        }
    }

    #[test]
    fn unsmoothed_values_are_quantized() {
        let max_iter = 64;
        for k in 0..32 {
            let s = Complex64::new(-2.0 + k as f64 * 0.12, 0.7);
            if let Escape::Outside { value, .. } =
                escape_time(s, FractalMode::Mandelbrot, Complex64::new(0.0, 0.0), max_iter, false)
            {
                let t = value / max_iter as f64;
                let steps = t * max_iter as f64;
                assert!((steps - steps.round()).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn smoothing_stays_close_to_integer_count() {
        let s = Complex64::new(0.3, 0.5);
        let raw = escape_time(s, FractalMode::Mandelbrot, Complex64::new(0.0, 0.0), 200, false);
        let smooth = escape_time(s, FractalMode::Mandelbrot, Complex64::new(0.0, 0.0), 200, true);
        match (raw, smooth) {
            (Escape::Outside { iterations: i, .. }, Escape::Outside { value, .. }) => {
                assert!((value - i as f64).abs() < 2.0);
            }
            _ => panic!("expected both evaluations to escape"),
        }
    }

    #[test]
    fn julia_uses_fixed_constant() {
        let c = Complex64::new(-0.8, 0.156);
        let a = escape_time(Complex64::new(0.1, 0.1), FractalMode::Julia, c, 300, false);
        let b = escape_time(Complex64::new(0.1, 0.1), FractalMode::Julia, c, 300, false);
        assert_eq!(a, b); // pure function
    }

    #[test]
    fn plane_mapping_centers_on_offset() {
        let offset = Complex64::new(-0.5, 0.0);
        let center = plane_sample(0.5, 0.5, 1.0, offset);
        assert!((center - offset).norm() < 1e-12);
    }

    #[test]
    fn non_finite_inputs_rejected() {
        let ok = Complex64::new(0.0, 0.0);
        assert!(validate_inputs(100, 1.0, ok, ok).is_ok());
        assert!(validate_inputs(100, f64::NAN, ok, ok).is_err());
        assert!(validate_inputs(100, 1.0, Complex64::new(f64::NAN, 0.0), ok).is_err());
        assert!(validate_inputs(100, 1.0, Complex64::new(0.0, f64::INFINITY), ok).is_err());
        assert!(validate_inputs(100, 1.0, ok, Complex64::new(f64::NAN, 0.0)).is_err());
        assert!(validate_inputs(0, 1.0, ok, ok).is_err());
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(FractalMode::from_name("fern"), FractalMode::Mandelbrot);
        assert_eq!(Palette::from_name("vaporwave"), Palette::Rainbow);
    }
}
