//! Configuration loader - YAML presets + .env settings

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::params::FractalParams;
use crate::shapes::fractal::{FractalMode, Palette};

/// A named fractal view: a known-interesting location in the Mandelbrot
/// set or a classic Julia constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalPreset {
    pub id: String,
    pub name: String,
    pub mode: String,
    pub c_re: f64,
    pub c_im: f64,
    #[serde(default = "default_offset_x")]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_offset_x() -> f64 {
    -0.5
}

fn default_zoom() -> f64 {
    1.0
}

impl FractalPreset {
    /// Apply this preset onto a parameter set, keeping the user's
    /// iteration count, palette and smoothing choices.
    pub fn apply(&self, params: &mut FractalParams) {
        params.mode = FractalMode::from_name(&self.mode);
        params.c_re = self.c_re;
        params.c_im = self.c_im;
        params.offset_x = self.offset_x;
        params.offset_y = self.offset_y;
        params.zoom = self.zoom;
    }
}

/// Main configuration loaded from presets.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub presets: Vec<FractalPreset>,
    #[serde(default = "default_palette_name")]
    pub default_palette: String,
}

fn default_palette_name() -> String {
    "rainbow".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Get a preset by ID.
    pub fn get_preset(&self, id: &str) -> Option<&FractalPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn default_palette(&self) -> Palette {
        Palette::from_name(&self.default_palette)
    }
}

impl Default for Config {
    /// Built-in presets used when no presets.yaml exists: classic Julia
    /// constants and named Mandelbrot regions.
    fn default() -> Self {
        let m = |id: &str, name: &str, re: f64, im: f64, zoom: f64| FractalPreset {
            id: id.to_string(),
            name: name.to_string(),
            mode: "mandelbrot".to_string(),
            c_re: -0.7,
            c_im: 0.27,
            offset_x: re,
            offset_y: im,
            zoom,
        };
        let j = |id: &str, name: &str, re: f64, im: f64| FractalPreset {
            id: id.to_string(),
            name: name.to_string(),
            mode: "julia".to_string(),
            c_re: re,
            c_im: im,
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        };

        Config {
            presets: vec![
                m("home", "Full set", -0.5, 0.0, 1.0),
                m("seahorse", "Seahorse valley", -0.75, 0.1, 0.1),
                m("elephant", "Elephant valley", 0.275, 0.0, 0.1),
                m("antenna", "Antenna", -1.768, 0.001, 0.05),
                j("rabbit", "Douady's rabbit", -0.123, 0.745),
                j("dragon", "Dragon", -0.8, 0.156),
                j("spiral_julia", "Spiral", -0.4, 0.6),
                j("siegel", "Siegel disk", -0.391, -0.587),
                j("dendrite", "Dendrite", 0.0, 1.0),
                j("san_marco", "San Marco", -0.75, 0.0),
            ],
            default_palette: default_palette_name(),
        }
    }
}

/// Settings loaded from .env
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_dir: String,
    pub export_dir: String,
}

impl Settings {
    /// Load settings from environment (.env respected).
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Settings {
            log_dir: std::env::var("MATHSCOPE_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            export_dir: std::env::var("MATHSCOPE_EXPORT_DIR")
                .unwrap_or_else(|_| "exports".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_cover_both_modes() {
        let config = Config::default();
        assert!(config.presets.iter().any(|p| p.mode == "mandelbrot"));
        assert!(config.presets.iter().any(|p| p.mode == "julia"));
        assert!(config.get_preset("rabbit").is_some());
        assert!(config.get_preset("missing").is_none());
    }

    #[test]
    fn preset_apply_keeps_user_choices() {
        let config = Config::default();
        let mut params = FractalParams {
            max_iterations: 250,
            smooth: false,
            ..FractalParams::default()
        };
        config.get_preset("rabbit").unwrap().apply(&mut params);
        assert_eq!(params.mode, FractalMode::Julia);
        assert_eq!(params.c_re, -0.123);
        assert_eq!(params.max_iterations, 250);
        assert!(!params.smooth);
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.presets.len(), config.presets.len());
    }
}
