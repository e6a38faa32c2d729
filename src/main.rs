//! Mathscope - a mathematical shape gallery
//!
//! Interactive viewer for escape-time fractals, parametric surfaces,
//! vector fields, chaotic attractors, polyhedra and parametric curves,
//! with headless render/export subcommands.

mod config;
mod gui;
mod logging;
mod params;
mod render;
mod shapes;
mod state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::config::{Config, Settings};
use crate::params::{
    ChaosParams, CurveParams, FieldParams, FractalParams, PolyhedronParams, SurfaceParams,
};
use crate::shapes::chaos::ChaosKind;
use crate::shapes::curve::CurveKind;
use crate::shapes::field::FieldKind;
use crate::shapes::fractal::{FractalMode, Palette};
use crate::shapes::polyhedron::PolyhedronKind;
use crate::shapes::surface::SurfaceKind;
use crate::shapes::Geometry;
use crate::state::Category;

#[derive(Parser)]
#[command(name = "mathscope")]
#[command(about = "Mathematical shape gallery - fractals, surfaces, fields, chaos, solids, curves")]
struct Cli {
    /// Path to the presets file
    #[arg(long, default_value = "presets.yaml")]
    config: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive viewer (default)
    Gui,
    /// List categories, shapes and fractal presets
    List,
    /// Render a fractal view to a PNG file
    Render {
        /// Apply a named preset before other options
        #[arg(long)]
        preset: Option<String>,
        /// mandelbrot or julia
        #[arg(long, default_value = "mandelbrot")]
        mode: String,
        #[arg(long, default_value_t = 100)]
        iterations: u32,
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,
        #[arg(long, default_value_t = -0.5)]
        offset_x: f64,
        #[arg(long, default_value_t = 0.0)]
        offset_y: f64,
        /// Julia constant, real part
        #[arg(long, default_value_t = -0.7)]
        c_re: f64,
        /// Julia constant, imaginary part
        #[arg(long, default_value_t = 0.27)]
        c_im: f64,
        /// rainbow, ice, fire, neon or sunset
        #[arg(long, default_value = "rainbow")]
        palette: String,
        /// Disable smooth coloring (integer bands)
        #[arg(long)]
        banded: bool,
        /// Image width and height in pixels
        #[arg(long, default_value_t = 1024)]
        size: u32,
        /// Output PNG path
        #[arg(short, long, default_value = "fractal.png")]
        output: String,
    },
    /// Generate a shape and write its geometry as JSON
    Export {
        /// surfaces, fields, chaos, polyhedra or curves
        category: String,
        /// Shape name within the category (e.g. torus, lorenz, icosahedron)
        #[arg(long)]
        shape: Option<String>,
        /// Grid resolution (surfaces) or sample count (curves)
        #[arg(long)]
        resolution: Option<u32>,
        /// Uniform scale (surfaces) or circumradius (polyhedra)
        #[arg(long)]
        scale: Option<f64>,
        /// Lattice density per axis (fields)
        #[arg(long)]
        density: Option<u32>,
        /// Field strength multiplier
        #[arg(long)]
        intensity: Option<f64>,
        /// Sparsification seed (fields)
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Trajectory length (chaos)
        #[arg(long)]
        steps: Option<u32>,
        /// Output JSON path
        #[arg(short, long, default_value = "shape.json")]
        output: String,
    },
}

fn main() -> Result<()> {
    let settings = Settings::load();
    logging::init_logging(&settings.log_dir);

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => {
            info!("loaded {} presets from {}", config.presets.len(), cli.config);
            config
        }
        Err(e) => {
            warn!("could not load {}: {}; using built-in presets", cli.config, e);
            Config::default()
        }
    };

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => gui::run_viewer(config, settings.export_dir),
        Commands::List => {
            cmd_list(&config);
            Ok(())
        }
        Commands::Render {
            preset,
            mode,
            iterations,
            zoom,
            offset_x,
            offset_y,
            c_re,
            c_im,
            palette,
            banded,
            size,
            output,
        } => {
            let mut params = FractalParams {
                mode: FractalMode::from_name(&mode),
                max_iterations: iterations,
                zoom,
                offset_x,
                offset_y,
                c_re,
                c_im,
                smooth: !banded,
                palette: Palette::from_name(&palette),
            };
            if let Some(id) = preset {
                let p = config
                    .get_preset(&id)
                    .with_context(|| format!("unknown preset '{}'", id))?;
                p.apply(&mut params);
            }
            cmd_render(&params, size, &output)
        }
        Commands::Export {
            category,
            shape,
            resolution,
            scale,
            density,
            intensity,
            seed,
            steps,
            output,
        } => cmd_export(
            &category, shape, resolution, scale, density, intensity, seed, steps, &output,
        ),
    }
}

fn cmd_list(config: &Config) {
    println!("Categories and shapes:");
    for category in Category::ALL {
        let shapes: Vec<&str> = match category {
            Category::Fractals => vec!["mandelbrot", "julia"],
            Category::Surfaces => SurfaceKind::ALL.iter().map(|k| k.name()).collect(),
            Category::Fields => FieldKind::ALL.iter().map(|k| k.name()).collect(),
            Category::Chaos => ChaosKind::ALL.iter().map(|k| k.name()).collect(),
            Category::Polyhedra => PolyhedronKind::ALL.iter().map(|k| k.name()).collect(),
            Category::Curves => CurveKind::ALL.iter().map(|k| k.name()).collect(),
        };
        println!("  {:<12} {}", category.name(), shapes.join(", "));
    }
    println!("\nFractal presets:");
    for preset in &config.presets {
        println!("  {:<14} {} ({})", preset.id, preset.name, preset.mode);
    }
}

fn cmd_render(params: &FractalParams, size: u32, output: &str) -> Result<()> {
    info!(
        "rendering {} at {}x{} ({} iterations)",
        params.mode.name(),
        size,
        size,
        params.max_iterations
    );
    let img = render::render_fractal(params, size, size)?;
    img.save(output)
        .with_context(|| format!("failed to write {}", output))?;
    println!("Wrote {}", output);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_export(
    category: &str,
    shape: Option<String>,
    resolution: Option<u32>,
    scale: Option<f64>,
    density: Option<u32>,
    intensity: Option<f64>,
    seed: u64,
    steps: Option<u32>,
    output: &str,
) -> Result<()> {
    let category = Category::from_name(category);

    let (shape_name, geometry) = match category {
        Category::Fractals => {
            anyhow::bail!("fractals are image-based; use the render subcommand")
        }
        Category::Surfaces => {
            let d = SurfaceParams::default();
            let kind = shape.map_or(d.kind, |s| SurfaceKind::from_name(&s));
            let grid = shapes::surface::sample_surface(
                kind,
                resolution.map_or(d.resolution, |r| r as usize),
                scale.unwrap_or(d.scale),
            )?;
            (kind.name(), Geometry::Surface(grid))
        }
        Category::Fields => {
            let d = FieldParams::default();
            let kind = shape.map_or(d.kind, |s| FieldKind::from_name(&s));
            let arrows = shapes::field::sample_field(
                kind,
                density.unwrap_or(d.density),
                intensity.unwrap_or(d.intensity),
                seed,
            )?;
            (kind.name(), Geometry::Field(arrows))
        }
        Category::Chaos => {
            let d = ChaosParams::default();
            let kind = shape.map_or(d.kind, |s| ChaosKind::from_name(&s));
            let trajectory = shapes::chaos::integrate_chaos(
                kind,
                d.sigma,
                d.rho,
                d.beta,
                d.speed,
                steps.unwrap_or(d.steps),
            )?;
            (kind.name(), Geometry::Trajectory(trajectory))
        }
        Category::Polyhedra => {
            let d = PolyhedronParams::default();
            let kind = shape.map_or(d.kind, |s| PolyhedronKind::from_name(&s));
            let poly = shapes::polyhedron::build_polyhedron(kind, scale.unwrap_or(d.size))?;
            (kind.name(), Geometry::Wireframe(poly))
        }
        Category::Curves => {
            let d = CurveParams::default();
            let kind = shape.map_or(d.kind, |s| CurveKind::from_name(&s));
            let points = shapes::curve::sample_curve(
                kind,
                d.param_a,
                d.param_b,
                resolution.unwrap_or(d.resolution),
            )?;
            (kind.name(), Geometry::Curve(points))
        }
    };

    let points = geometry.point_count();
    let data = serde_json::json!({
        "generated": chrono::Local::now().to_rfc3339(),
        "category": category.name(),
        "shape": shape_name,
        "points": points,
        "geometry": geometry,
    });

    std::fs::write(output, serde_json::to_string_pretty(&data)?)
        .with_context(|| format!("failed to write {}", output))?;
    println!("Wrote {} ({} points)", output, points);
    Ok(())
}
