//! CPU fractal render pass
//!
//! Evaluates the escape-time coloring once per pixel and produces an RGB
//! image for the GUI texture or PNG export.

use image::{Rgb, RgbImage};
use num_complex::Complex64;

use crate::params::FractalParams;
use crate::shapes::fractal::{evaluate_fractal, plane_sample, validate_inputs};
use crate::shapes::GenError;

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render a fractal view at the given pixel size.
pub fn render_fractal(
    params: &FractalParams,
    width: u32,
    height: u32,
) -> Result<RgbImage, GenError> {
    if width == 0 || height == 0 {
        return Err(GenError::invalid("size", "image dimensions must be positive"));
    }
    let c = Complex64::new(params.c_re, params.c_im);
    let offset = Complex64::new(params.offset_x, params.offset_y);
    validate_inputs(params.max_iterations, params.zoom, offset, c)?;

    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let u = (x as f64 + 0.5) / width as f64;
        // Image rows grow downward; the complex plane's imaginary axis
        // grows upward.
        let v = 1.0 - (y as f64 + 0.5) / height as f64;
        let sample = plane_sample(u, v, params.zoom, offset);
        let rgb = evaluate_fractal(
            sample,
            params.mode,
            c,
            params.max_iterations,
            params.smooth,
            params.palette,
        );
        *pixel = Rgb([channel(rgb[0]), channel(rgb[1]), channel(rgb[2])]);
    }

    Ok(img)
}

/// Render and flatten to raw RGB bytes (GUI texture upload).
pub fn render_fractal_rgb(
    params: &FractalParams,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, GenError> {
    Ok(render_fractal(params, width, height)?.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_has_requested_dimensions() {
        let img = render_fractal(&FractalParams::default(), 32, 24).unwrap();
        assert_eq!(img.dimensions(), (32, 24));
    }

    #[test]
    fn default_view_center_is_inside_the_set() {
        // The default view centers on offset (-0.5, 0), inside the main
        // cardioid, so the middle pixel is black.
        let params = FractalParams {
            max_iterations: 300,
            ..FractalParams::default()
        };
        let img = render_fractal(&params, 65, 65).unwrap();
        assert_eq!(img.get_pixel(32, 32), &Rgb([0, 0, 0]));
    }

    #[test]
    fn rendering_is_idempotent() {
        let params = FractalParams::default();
        let a = render_fractal_rgb(&params, 48, 48).unwrap();
        let b = render_fractal_rgb(&params, 48, 48).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn corners_escape_in_default_view() {
        // The default 4-unit window puts the corners well outside radius 2.
        let img = render_fractal(&FractalParams::default(), 64, 64).unwrap();
        assert_ne!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn zero_size_rejected() {
        assert!(render_fractal(&FractalParams::default(), 0, 10).is_err());
    }

    #[test]
    fn non_finite_offset_rejected() {
        // A NaN offset would otherwise make every sample non-escaping and
        // silently produce an all-black image.
        let params = FractalParams {
            offset_x: f64::NAN,
            ..FractalParams::default()
        };
        assert!(render_fractal(&params, 16, 16).is_err());

        let params = FractalParams {
            offset_y: f64::INFINITY,
            ..FractalParams::default()
        };
        assert!(render_fractal(&params, 16, 16).is_err());
    }
}
