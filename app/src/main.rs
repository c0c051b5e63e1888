use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;

use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle, Vec2};
use fault_core::config::{MIN_FAULTS, MIN_SIDE, MIN_THREADS};
use fault_core::{CancelToken, Palette, Terrain, TerrainConfig, TerrainEngine, render, save_png};

// A generation running on a background thread
struct Job {
    cancel: CancelToken,
    rx: Receiver<fault_core::Result<Terrain>>,
}

struct FaultApp {
    // parameters
    width: usize,
    height: usize,
    threads: usize,
    faults: usize,
    palette: Palette,

    job: Option<Job>,

    // last finished terrain and its texture
    terrain: Option<Terrain>,
    terrain_texture: Option<TextureHandle>,
    texture_palette: Palette,

    status_message: String,
}

impl Default for FaultApp {
    fn default() -> Self {
        let config = TerrainConfig::default();
        Self {
            width: config.width,
            height: config.height,
            threads: config.threads,
            faults: config.faults,
            palette: Palette::Ocean,
            job: None,
            terrain: None,
            terrain_texture: None,
            texture_palette: Palette::Ocean,
            status_message: String::new(),
        }
    }
}

impl FaultApp {
    fn config(&self) -> TerrainConfig {
        TerrainConfig::new(self.width, self.height, self.threads, self.faults)
    }

    fn start_job(&mut self, ctx: &egui::Context) {
        let engine = match TerrainEngine::new(self.config()) {
            Ok(engine) => engine,
            Err(e) => {
                self.status_message = format!("Invalid settings: {e}");
                return;
            }
        };

        let cancel = CancelToken::new();
        let (tx, rx) = channel();
        let token = cancel.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = engine.generate_with_cancel(&token);
            // receiver is gone if the window closed mid-run
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.job = Some(Job { cancel, rx });
        self.status_message = "Generating…".into();
    }

    // Pick up a finished job, if any
    fn poll_job(&mut self, ctx: &egui::Context) {
        let received = self.job.as_ref().map(|job| job.rx.try_recv());

        match received {
            None | Some(Err(TryRecvError::Empty)) => {}
            Some(Ok(Ok(terrain))) => {
                self.status_message = if terrain.is_complete() {
                    format!(
                        "Generated {} faults in {} ms",
                        terrain.faults_applied,
                        terrain.elapsed.as_millis()
                    )
                } else {
                    format!(
                        "Cancelled after {} of {} faults ({} ms)",
                        terrain.faults_applied,
                        terrain.config.faults,
                        terrain.elapsed.as_millis()
                    )
                };
                self.terrain = Some(terrain);
                self.terrain_texture = None;
                self.job = None;
            }
            Some(Ok(Err(e))) => {
                self.status_message = format!("Generation failed: {e}");
                self.job = None;
            }
            Some(Err(TryRecvError::Disconnected)) => {
                self.status_message = "Generation thread stopped unexpectedly".into();
                self.job = None;
            }
        }

        if self.terrain_texture.is_none() || self.texture_palette != self.palette {
            if let Some(terrain) = &self.terrain {
                let img = render(&terrain.grid, self.palette);
                let size = [img.width() as usize, img.height() as usize];
                let color_image = ColorImage::from_rgb(size, img.as_raw());
                self.terrain_texture =
                    Some(ctx.load_texture("terrain", color_image, egui::TextureOptions::NEAREST));
                self.texture_palette = self.palette;
            }
        }
    }
}

impl App for FaultApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_job(ctx);
        let running = self.job.is_some();

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Fault-Line Terrain");
            ui.separator();

            ui.add_enabled_ui(!running, |ui| {
                ui.label("Width");
                ui.add(egui::Slider::new(&mut self.width, MIN_SIDE..=2048));
                ui.label("Height");
                ui.add(egui::Slider::new(&mut self.height, MIN_SIDE..=2048));
                ui.label("Threads");
                ui.add(egui::Slider::new(&mut self.threads, MIN_THREADS..=32));
                ui.label("Faults");
                ui.add(
                    egui::Slider::new(&mut self.faults, MIN_FAULTS..=20_000).logarithmic(true),
                );
            });

            ui.label("Palette");
            egui::ComboBox::from_label("Colours")
                .selected_text(format!("{:?}", self.palette))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.palette, Palette::Ocean, "Ocean");
                    ui.selectable_value(&mut self.palette, Palette::Terrain, "Terrain");
                });

            ui.separator();

            if running {
                ui.horizontal(|ui| {
                    ui.spinner();
                    if ui.button("Cancel").clicked() {
                        if let Some(job) = &self.job {
                            job.cancel.cancel();
                        }
                    }
                });
            } else if ui.button("Generate Terrain").clicked() {
                self.start_job(ctx);
            }

            // Save to PNG
            if ui
                .add_enabled(self.terrain.is_some(), egui::Button::new("Save PNG…"))
                .clicked()
            {
                if let Some(terrain) = &self.terrain {
                    let picked = rfd::FileDialog::new()
                        .add_filter("PNG image", &["png"])
                        .set_file_name("terrain.png")
                        .save_file();
                    if let Some(path) = picked {
                        self.status_message = match save_png(&terrain.grid, self.palette, &path) {
                            Ok(()) => format!("Saved {}", path.display()),
                            Err(e) => format!("Save failed: {e}"),
                        };
                    }
                }
            }

            ui.separator();
            ui.label(&self.status_message);
            if let Some(terrain) = &self.terrain {
                ui.label(format!(
                    "Heights {}..={}",
                    terrain.grid.min_height(),
                    terrain.grid.max_height()
                ));
            }
        });

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let (Some(tex), Some(terrain)) = (&self.terrain_texture, &self.terrain) {
                // Fit the grid into the panel without stretching it
                let available = ui.available_size();
                let (w, h) = (terrain.width() as f32, terrain.height() as f32);
                let scale = (available.x / w).min(available.y / h);
                ui.image((tex.id(), Vec2::new(w * scale, h * scale)));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Generate Terrain” to start");
                });
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Fault-Line Terrain Generator",
        opts,
        Box::new(|_cc| Ok(Box::new(FaultApp::default()))),
    )
}
