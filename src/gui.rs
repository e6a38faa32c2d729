//! Native GUI viewer using egui
//!
//! Category gallery with per-shape parameter sliders, a 3D-projected plot
//! viewport with mouse orbit controls, and a texture view for the fractal
//! render pass.

use eframe::egui;
use tracing::{info, warn};

use crate::config::Config;
use crate::params::{
    ChaosParams, CurveParams, FieldParams, FractalParams, PolyhedronParams, SurfaceParams,
};
use crate::render;
use crate::shapes::chaos::ChaosKind;
use crate::shapes::curve::CurveKind;
use crate::shapes::field::FieldKind;
use crate::shapes::fractal::{FractalMode, Palette};
use crate::shapes::polyhedron::PolyhedronKind;
use crate::shapes::surface::SurfaceKind;
use crate::shapes::Geometry;
use crate::state::{Category, ViewerState};

/// Pixel size of the fractal texture shown in the viewport.
const FRACTAL_VIEW_SIZE: u32 = 512;

/// Run the native GUI viewer.
pub fn run_viewer(config: Config, export_dir: String) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Mathscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Mathscope",
        options,
        Box::new(|cc| Ok(Box::new(ScopeApp::new(cc, config, export_dir)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

struct ScopeApp {
    config: Config,
    state: ViewerState,
    export_dir: String,
    // Camera state
    camera_distance: f32,
    camera_angle_x: f32, // Pitch (up/down)
    camera_angle_y: f32, // Yaw (left/right)
    camera_target: [f32; 2], // Pan offset
    // UI state
    show_grid: bool,
    line_width: f32,
    arrow_size: f32,
    auto_rotate: bool,
    last_error: Option<String>,
    // Fractal texture
    fractal_texture: Option<egui::TextureHandle>,
    fractal_dirty: bool,
}

impl ScopeApp {
    fn new(cc: &eframe::CreationContext<'_>, config: Config, export_dir: String) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut state = ViewerState::new();
        state.fractal.palette = config.default_palette();
        if let Err(e) = state.regenerate() {
            warn!("initial generation failed: {}", e);
        }

        let mut app = Self {
            config,
            state,
            export_dir,
            camera_distance: 1.0,
            camera_angle_x: 0.0,
            camera_angle_y: 0.0,
            camera_target: [0.0, 0.0],
            show_grid: true,
            line_width: 1.5,
            arrow_size: 1.0,
            auto_rotate: false,
            last_error: None,
            fractal_texture: None,
            fractal_dirty: true,
        };
        app.frame_camera();
        app
    }

    /// Apply regenerated parameters; on error keep the previous shape and
    /// surface the message in the status line.
    fn apply_changes(&mut self) {
        match self.state.regenerate() {
            Ok(()) => {
                self.last_error = None;
                if self.state.category == Category::Fractals {
                    self.fractal_dirty = true;
                }
            }
            Err(e) => {
                warn!("regeneration rejected: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn switch_category(&mut self, category: Category) {
        if let Err(e) = self.state.switch_category(category) {
            warn!("category switch failed: {}", e);
            self.last_error = Some(e.to_string());
        } else {
            self.last_error = None;
        }
        self.fractal_dirty = true;
        self.frame_camera();
    }

    /// Reset the camera to the active category's home framing.
    fn frame_camera(&mut self) {
        let [x, y, z] = self.state.category.camera_home();
        let horizontal = (x * x + z * z).sqrt();
        self.camera_angle_y = x.atan2(z);
        self.camera_angle_x = y.atan2(horizontal);
        self.camera_distance = ((x * x + y * y + z * z).sqrt() / 10.0).max(0.2);
        self.camera_target = [0.0, 0.0];
    }

    fn project_point(&self, p: [f32; 3]) -> [f64; 2] {
        let cos_x = self.camera_angle_x.cos();
        let sin_x = self.camera_angle_x.sin();
        let cos_y = self.camera_angle_y.cos();
        let sin_y = self.camera_angle_y.sin();

        // Rotate around Y axis (yaw)
        let x1 = p[0] * cos_y + p[2] * sin_y;
        let z1 = -p[0] * sin_y + p[2] * cos_y;

        // Rotate around X axis (pitch)
        let y1 = p[1] * cos_x - z1 * sin_x;

        [
            (x1 + self.camera_target[0]) as f64,
            (y1 + self.camera_target[1]) as f64,
        ]
    }

    fn ensure_fractal_texture(&mut self, ctx: &egui::Context) {
        if !self.fractal_dirty && self.fractal_texture.is_some() {
            return;
        }
        match render::render_fractal_rgb(&self.state.fractal, FRACTAL_VIEW_SIZE, FRACTAL_VIEW_SIZE)
        {
            Ok(rgb) => {
                let size = [FRACTAL_VIEW_SIZE as usize, FRACTAL_VIEW_SIZE as usize];
                let img = egui::ColorImage::from_rgb(size, &rgb);
                self.fractal_texture =
                    Some(ctx.load_texture("fractal", img, egui::TextureOptions::LINEAR));
                self.fractal_dirty = false;
            }
            Err(e) => {
                warn!("fractal render failed: {}", e);
                self.last_error = Some(e.to_string());
                self.fractal_dirty = false;
            }
        }
    }

    fn save_fractal_png(&mut self) {
        if let Err(e) = std::fs::create_dir_all(&self.export_dir) {
            self.last_error = Some(format!("cannot create export dir: {e}"));
            return;
        }
        let path = format!(
            "{}/fractal-{}.png",
            self.export_dir,
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        match render::render_fractal(&self.state.fractal, 1024, 1024) {
            Ok(img) => match img.save(&path) {
                Ok(()) => {
                    info!("saved fractal to {}", path);
                    self.last_error = None;
                }
                Err(e) => self.last_error = Some(format!("save failed: {e}")),
            },
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    fn export_geometry_json(&mut self) {
        if self.state.geometry().is_none() {
            self.last_error = Some("nothing to export in this category".to_string());
            return;
        }
        if let Err(e) = std::fs::create_dir_all(&self.export_dir) {
            self.last_error = Some(format!("cannot create export dir: {e}"));
            return;
        }
        let path = format!(
            "{}/{}-{}.json",
            self.export_dir,
            self.state.active_shape_name(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        let data = serde_json::json!({
            "generated": chrono::Local::now().to_rfc3339(),
            "category": self.state.category.name(),
            "shape": self.state.active_shape_name(),
            "geometry": self.state.geometry(),
        });
        match serde_json::to_string_pretty(&data)
            .map_err(anyhow::Error::from)
            .and_then(|s| std::fs::write(&path, s).map_err(anyhow::Error::from))
        {
            Ok(()) => {
                info!("exported geometry to {}", path);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("export failed: {e}")),
        }
    }

    // ---- left panel controls, one block per category ----

    fn fractal_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let p = &mut self.state.fractal;
        let mut dirty = false;

        egui::ComboBox::from_label("Type")
            .selected_text(p.mode.name())
            .show_ui(ui, |ui| {
                for mode in [FractalMode::Mandelbrot, FractalMode::Julia] {
                    dirty |= ui.selectable_value(&mut p.mode, mode, mode.name()).changed();
                }
            });

        dirty |= ui
            .add(
                egui::Slider::new(&mut p.max_iterations, FractalParams::ITERATIONS_RANGE)
                    .text("Iterations"),
            )
            .changed();
        dirty |= ui
            .add(
                egui::Slider::new(&mut p.zoom, FractalParams::ZOOM_RANGE)
                    .logarithmic(true)
                    .text("Zoom"),
            )
            .changed();
        dirty |= ui
            .add(egui::Slider::new(&mut p.offset_x, FractalParams::OFFSET_RANGE).text("Offset X"))
            .changed();
        dirty |= ui
            .add(egui::Slider::new(&mut p.offset_y, FractalParams::OFFSET_RANGE).text("Offset Y"))
            .changed();

        if p.mode == FractalMode::Julia {
            dirty |= ui
                .add(egui::Slider::new(&mut p.c_re, FractalParams::C_RANGE).text("c real"))
                .changed();
            dirty |= ui
                .add(egui::Slider::new(&mut p.c_im, FractalParams::C_RANGE).text("c imag"))
                .changed();
        }

        dirty |= ui.checkbox(&mut p.smooth, "Smooth coloring").changed();

        ui.horizontal(|ui| {
            ui.label("Palette:");
            for palette in Palette::ALL {
                dirty |= ui
                    .selectable_value(&mut p.palette, palette, palette.name())
                    .changed();
            }
        });

        ui.separator();
        egui::ComboBox::from_label("Preset")
            .selected_text("apply...")
            .show_ui(ui, |ui| {
                let mut chosen: Option<usize> = None;
                for (i, preset) in self.config.presets.iter().enumerate() {
                    if ui.selectable_label(false, &preset.name).clicked() {
                        chosen = Some(i);
                    }
                }
                if let Some(i) = chosen {
                    self.config.presets[i].apply(p);
                    dirty = true;
                }
            });

        if ui.button("Random fractal").clicked() {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            p.mode = if rng.gen_bool(0.5) {
                FractalMode::Mandelbrot
            } else {
                FractalMode::Julia
            };
            p.offset_x = rng.gen_range(-1.5..1.5);
            p.offset_y = rng.gen_range(-1.5..1.5);
            p.c_re = rng.gen_range(-1.0..1.0);
            p.c_im = rng.gen_range(-1.0..1.0);
            p.zoom = rng.gen_range(0.5..2.5);
            dirty = true;
        }

        if ui.button("Save PNG").clicked() {
            self.save_fractal_png();
        }

        dirty
    }

    fn surface_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let p = &mut self.state.surface;
        let mut dirty = false;

        egui::ComboBox::from_label("Type")
            .selected_text(p.kind.name())
            .show_ui(ui, |ui| {
                for kind in SurfaceKind::ALL {
                    dirty |= ui.selectable_value(&mut p.kind, kind, kind.name()).changed();
                }
            });

        dirty |= ui
            .add(
                egui::Slider::new(&mut p.resolution, SurfaceParams::RESOLUTION_RANGE)
                    .text("Resolution"),
            )
            .changed();
        dirty |= ui
            .add(egui::Slider::new(&mut p.scale, SurfaceParams::SCALE_RANGE).text("Scale"))
            .changed();

        if ui.button("Random surface").clicked() {
            use rand::Rng;
            p.kind = SurfaceKind::ALL[rand::thread_rng().gen_range(0..SurfaceKind::ALL.len())];
            dirty = true;
        }

        dirty
    }

    fn field_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let p = &mut self.state.field;
        let mut dirty = false;

        egui::ComboBox::from_label("Type")
            .selected_text(p.kind.name())
            .show_ui(ui, |ui| {
                for kind in FieldKind::ALL {
                    dirty |= ui.selectable_value(&mut p.kind, kind, kind.name()).changed();
                }
            });

        dirty |= ui
            .add(egui::Slider::new(&mut p.density, FieldParams::DENSITY_RANGE).text("Density"))
            .changed();
        dirty |= ui
            .add(
                egui::Slider::new(&mut p.intensity, FieldParams::INTENSITY_RANGE)
                    .text("Intensity"),
            )
            .changed();
        ui.add(egui::Slider::new(&mut self.arrow_size, 0.2..=3.0).text("Arrow size"));

        if ui.button("Redraw arrows").clicked() {
            // New seed, new sparsification subset; the field itself is
            // unchanged.
            p.seed = p.seed.wrapping_add(1);
            dirty = true;
        }

        dirty
    }

    fn chaos_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let p = &mut self.state.chaos;
        let mut dirty = false;

        egui::ComboBox::from_label("System")
            .selected_text(p.kind.name())
            .show_ui(ui, |ui| {
                for kind in ChaosKind::ALL {
                    dirty |= ui.selectable_value(&mut p.kind, kind, kind.name()).changed();
                }
            });

        let lorenz = p.kind == ChaosKind::Lorenz;
        ui.add_enabled_ui(lorenz, |ui| {
            dirty |= ui
                .add(egui::Slider::new(&mut p.sigma, ChaosParams::SIGMA_RANGE).text("sigma"))
                .changed();
            dirty |= ui
                .add(egui::Slider::new(&mut p.rho, ChaosParams::RHO_RANGE).text("rho"))
                .changed();
            dirty |= ui
                .add(egui::Slider::new(&mut p.beta, ChaosParams::BETA_RANGE).text("beta"))
                .changed();
        });
        dirty |= ui
            .add(egui::Slider::new(&mut p.speed, ChaosParams::SPEED_RANGE).text("Speed"))
            .changed();
        dirty |= ui
            .add(egui::Slider::new(&mut p.steps, ChaosParams::STEPS_RANGE).text("Points"))
            .changed();

        if ui.button("Random parameters").clicked() {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            p.sigma = rng.gen_range(5.0..15.0);
            p.rho = rng.gen_range(15.0..45.0);
            p.beta = rng.gen_range(1.5..4.5);
            dirty = true;
        }

        dirty
    }

    fn polyhedron_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let p = &mut self.state.polyhedron;
        let mut dirty = false;

        egui::ComboBox::from_label("Solid")
            .selected_text(p.kind.name())
            .show_ui(ui, |ui| {
                for kind in PolyhedronKind::ALL {
                    dirty |= ui.selectable_value(&mut p.kind, kind, kind.name()).changed();
                }
            });

        dirty |= ui
            .add(egui::Slider::new(&mut p.size, PolyhedronParams::SIZE_RANGE).text("Size"))
            .changed();

        if ui.button("Random solid").clicked() {
            use rand::Rng;
            let i = rand::thread_rng().gen_range(0..PolyhedronKind::ALL.len());
            p.kind = PolyhedronKind::ALL[i];
            dirty = true;
        }

        dirty
    }

    fn curve_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let p = &mut self.state.curve;
        let mut dirty = false;

        egui::ComboBox::from_label("Type")
            .selected_text(p.kind.name())
            .show_ui(ui, |ui| {
                for kind in CurveKind::ALL {
                    dirty |= ui.selectable_value(&mut p.kind, kind, kind.name()).changed();
                }
            });

        dirty |= ui
            .add(egui::Slider::new(&mut p.param_a, CurveParams::PARAM_A_RANGE).text("Param A"))
            .changed();
        dirty |= ui
            .add(egui::Slider::new(&mut p.param_b, CurveParams::PARAM_B_RANGE).text("Param B"))
            .changed();
        dirty |= ui
            .add(
                egui::Slider::new(&mut p.resolution, CurveParams::RESOLUTION_RANGE)
                    .text("Resolution"),
            )
            .changed();

        if ui.button("Random curve").clicked() {
            use rand::Rng;
            p.kind = CurveKind::ALL[rand::thread_rng().gen_range(0..CurveKind::ALL.len())];
            dirty = true;
        }

        dirty
    }

    // ---- plot drawing ----

    fn draw_geometry(&self, plot_ui: &mut egui_plot::PlotUi) {
        let Some(geometry) = self.state.geometry() else {
            return;
        };

        let accent = egui::Color32::from_rgb(0x4a, 0x8c, 0xff);

        match geometry {
            Geometry::Surface(grid) => {
                let n = grid.resolution;
                // Wireframe: one polyline per row and per column.
                for j in 0..n {
                    let row: Vec<[f64; 2]> =
                        (0..n).map(|i| self.project_point(grid.at(i, j))).collect();
                    plot_ui.line(
                        egui_plot::Line::new(egui_plot::PlotPoints::from(row))
                            .color(accent)
                            .width(self.line_width * 0.6),
                    );
                }
                for i in 0..n {
                    let col: Vec<[f64; 2]> =
                        (0..n).map(|j| self.project_point(grid.at(i, j))).collect();
                    plot_ui.line(
                        egui_plot::Line::new(egui_plot::PlotPoints::from(col))
                            .color(accent)
                            .width(self.line_width * 0.6),
                    );
                }
            }
            Geometry::Field(arrows) => {
                let intensity = self.state.field.intensity as f32;
                for arrow in arrows {
                    let len = arrow.magnitude * self.arrow_size * 0.5;
                    let tip = [
                        arrow.position[0] + arrow.direction[0] * len,
                        arrow.position[1] + arrow.direction[1] * len,
                        arrow.position[2] + arrow.direction[2] * len,
                    ];
                    // Blue (weak) through red (strong).
                    let norm = (arrow.magnitude / (intensity * 2.0)).min(1.0);
                    let rgb = hsv_to_rgb(0.7 - norm * 0.7, 1.0, 0.8);
                    let color = egui::Color32::from_rgb(
                        (rgb[0] * 255.0) as u8,
                        (rgb[1] * 255.0) as u8,
                        (rgb[2] * 255.0) as u8,
                    );
                    let seg = vec![self.project_point(arrow.position), self.project_point(tip)];
                    plot_ui.line(
                        egui_plot::Line::new(egui_plot::PlotPoints::from(seg))
                            .color(color)
                            .width(self.line_width),
                    );
                }
            }
            Geometry::Trajectory(points) | Geometry::Curve(points) => {
                let projected: Vec<[f64; 2]> =
                    points.iter().map(|&p| self.project_point(p)).collect();
                plot_ui.line(
                    egui_plot::Line::new(egui_plot::PlotPoints::from(projected))
                        .color(accent)
                        .width(self.line_width),
                );
            }
            Geometry::Wireframe(poly) => {
                for &[i, j] in &poly.edges {
                    let seg = vec![
                        self.project_point(poly.vertices[i]),
                        self.project_point(poly.vertices[j]),
                    ];
                    plot_ui.line(
                        egui_plot::Line::new(egui_plot::PlotPoints::from(seg))
                            .color(accent)
                            .width(self.line_width),
                    );
                }
            }
        }
    }
}

impl eframe::App for ScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if self.auto_rotate {
            self.camera_angle_y += 0.005;
        }

        // Left panel - category gallery and controls
        egui::SidePanel::left("controls_panel").min_width(260.0).show(ctx, |ui| {
            ui.heading("Mathscope");
            ui.separator();

            let mut switch_to: Option<Category> = None;
            ui.horizontal_wrapped(|ui| {
                for category in Category::ALL {
                    let active = self.state.category == category;
                    if ui.selectable_label(active, category.label()).clicked() && !active {
                        switch_to = Some(category);
                    }
                }
            });
            if let Some(category) = switch_to {
                self.switch_category(category);
            }

            ui.separator();

            let dirty = match self.state.category {
                Category::Fractals => self.fractal_controls(ui),
                Category::Surfaces => self.surface_controls(ui),
                Category::Fields => self.field_controls(ui),
                Category::Chaos => self.chaos_controls(ui),
                Category::Polyhedra => self.polyhedron_controls(ui),
                Category::Curves => self.curve_controls(ui),
            };
            if dirty {
                self.apply_changes();
            }

            ui.separator();
            ui.label(describe(self.state.active_shape_name()));

            if self.state.geometry().is_some() {
                ui.separator();
                if ui.button("Export JSON").clicked() {
                    self.export_geometry_json();
                }
            }

            if let Some(err) = &self.last_error {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, err);
            }
        });

        // Bottom panel - camera controls
        egui::TopBottomPanel::bottom("camera_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_grid, "Grid");
                ui.checkbox(&mut self.auto_rotate, "Auto-rotate");

                ui.separator();
                ui.label("Rotate:");
                ui.add(egui::DragValue::new(&mut self.camera_angle_x).speed(0.02).prefix("X:"));
                ui.add(egui::DragValue::new(&mut self.camera_angle_y).speed(0.02).prefix("Y:"));

                ui.separator();
                ui.add(egui::Slider::new(&mut self.line_width, 0.5..=4.0).text("Width"));

                ui.separator();
                if ui.button("Center").clicked() {
                    self.frame_camera();
                }

                ui.separator();
                let points = self.state.geometry().map(Geometry::point_count).unwrap_or(0);
                ui.label(format!(
                    "{} / {} | {} points",
                    self.state.category.label(),
                    self.state.active_shape_name(),
                    points
                ));
            });
        });

        // Central panel - viewport
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.category == Category::Fractals {
                self.ensure_fractal_texture(ctx);
                if let Some(texture) = &self.fractal_texture {
                    ui.centered_and_justified(|ui| {
                        ui.image(texture);
                    });
                }
                return;
            }

            ui.horizontal(|ui| {
                ui.label("Right-drag: rotate | Middle-drag: pan | Scroll: zoom");
            });

            ctx.input(|i| {
                if i.key_down(egui::Key::ArrowLeft) {
                    self.camera_angle_y -= 0.03;
                }
                if i.key_down(egui::Key::ArrowRight) {
                    self.camera_angle_y += 0.03;
                }
                if i.key_down(egui::Key::ArrowUp) {
                    self.camera_angle_x -= 0.03;
                }
                if i.key_down(egui::Key::ArrowDown) {
                    self.camera_angle_x += 0.03;
                }
                if i.key_pressed(egui::Key::Home) {
                    self.frame_camera();
                }
                if i.raw_scroll_delta.y != 0.0 {
                    self.camera_distance *= 1.0 - i.raw_scroll_delta.y * 0.002;
                }
                if i.pointer.secondary_down() {
                    let delta = i.pointer.delta();
                    self.camera_angle_y += delta.x * 0.005;
                    self.camera_angle_x += delta.y * 0.005;
                }
                if i.pointer.middle_down() {
                    let delta = i.pointer.delta();
                    self.camera_target[0] -= delta.x * 0.05;
                    self.camera_target[1] += delta.y * 0.05;
                }
            });

            self.camera_angle_x = self.camera_angle_x.clamp(-1.5, 1.5);
            self.camera_distance = self.camera_distance.clamp(0.1, 10.0);

            let view_range = 10.0 * self.camera_distance as f64;

            let plot = egui_plot::Plot::new("shape_plot")
                .data_aspect(1.0)
                .allow_drag(true)
                .allow_zoom(true)
                .allow_scroll(true)
                .show_axes(false)
                .show_grid(self.show_grid)
                .include_x(-view_range)
                .include_x(view_range)
                .include_y(-view_range)
                .include_y(view_range);

            plot.show(ui, |plot_ui| {
                self.draw_geometry(plot_ui);
            });
        });
    }
}

/// One-line description of the active shape (status panel).
fn describe(shape: &str) -> &'static str {
    match shape {
        "mandelbrot" => "The Mandelbrot set: iterate f(z) = z\u{b2} + c over the complex plane.",
        "julia" => "Julia sets: each constant c generates its own fractal.",
        "torus" => "Surface of revolution of a circle around a coplanar axis.",
        "klein" => "The Klein bottle: a closed non-orientable surface with no interior.",
        "mobius" => "The M\u{f6}bius band: one side, one edge.",
        "sphere" => "Points equidistant from a center in 3-space.",
        "paraboloid" => "Hyperbolic paraboloid: a saddle with negative curvature.",
        "catenoid" => "Minimal surface between two parallel circles.",
        "curl" => "Rotational field circling the z axis.",
        "gravity" => "Inverse-square attraction toward the origin (softened).",
        "spiral" => "Rotation plus a constant axial push.",
        "uniform" => "Same vector everywhere.",
        "dipole" => "Field pattern around two opposite poles.",
        "lorenz" => "The Lorenz attractor: chaotic, butterfly-shaped.",
        "rossler" => "The R\u{f6}ssler attractor: chaos from a single nonlinearity.",
        "helix" => "A curve advancing along an axis while circling it.",
        "lissajous" => "Harmonic oscillations in two perpendicular directions.",
        "rose" => "Rhodonea: sinusoidal petals in polar form.",
        "cardioid" => "Heart-shaped curve traced by a rolling circle.",
        "lemniscate" => "Bernoulli's figure-eight; defined only where cos 2t \u{2265} 0.",
        "tetrahedron" => "4 triangular faces, 6 edges, 4 vertices.",
        "cube" => "6 square faces, 12 edges, 8 vertices.",
        "octahedron" => "8 triangular faces, 12 edges, 6 vertices.",
        "dodecahedron" => "12 pentagonal faces, 30 edges, 20 vertices.",
        "icosahedron" => "20 triangular faces, 30 edges, 12 vertices.",
        "truncated_icosahedron" => "The football: 12 pentagons and 20 hexagons.",
        _ => "",
    }
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}
