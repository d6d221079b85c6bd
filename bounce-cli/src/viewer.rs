//! Interactive viewer for the bounce simulation
//!
//! The canvas is the arena: resizing the window resizes the arena, hovering
//! moves the attraction point, and accepted impacts flash the body involved.
//! The config file, when given, is watched and the world is rebuilt on change.

use bounce_core::{
    build_simulation_context, get_body_states, step_simulation, MonotonicClock, SimConfig,
    SimulationContext,
};
use eframe::egui;
use glam::Vec2;
use notify::{Event, RecommendedWatcher, Watcher};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{debug, warn};

/// How long a body stays highlighted after an accepted impact, in seconds
const FLASH_SECONDS: f64 = 0.15;

pub fn launch(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Bounce"),
        ..Default::default()
    };

    eframe::run_native(
        "Bounce",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(config_path, cc)))),
    )
    .map_err(|e| format!("viewer failed: {}", e))?;

    Ok(())
}

pub struct ViewerApp {
    config_path: Option<PathBuf>,
    ctx_opt: Option<SimulationContext>,
    last_load_error: Option<String>,
    started: bool,
    playing: bool,
    speed_multiplier: f32,
    canvas: Option<egui::Vec2>,
    clock: MonotonicClock,
    last_hit: HashMap<usize, f64>,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
    needs_reload: bool,
}

impl ViewerApp {
    pub fn new(config_path: Option<PathBuf>, _cc: &eframe::CreationContext<'_>) -> Self {
        // Watcher events carry absolute paths
        let config_path = config_path.map(|p| std::fs::canonicalize(&p).unwrap_or(p));
        let (tx, rx) = mpsc::channel();

        let mut watcher = None;
        if let Some(path) = &config_path {
            watcher = notify::recommended_watcher(move |res| {
                // The receiver is gone during shutdown
                let _ = tx.send(res);
            })
            .ok();

            if let Some(ref mut w) = watcher {
                if let Err(e) = w.watch(path, notify::RecursiveMode::NonRecursive) {
                    warn!(error = %e, path = %path.display(), "not watching config");
                }
            }
        }

        Self {
            config_path,
            ctx_opt: None,
            last_load_error: None,
            started: false,
            playing: false,
            speed_multiplier: 1.0,
            canvas: None,
            clock: MonotonicClock::new(),
            last_hit: HashMap::new(),
            file_watcher: watcher,
            file_receiver: rx,
            needs_reload: false,
        }
    }

    fn load_config(&self) -> Result<SimConfig, String> {
        let mut config = match &self.config_path {
            Some(path) => SimConfig::from_path(path).map_err(|e| e.to_string())?,
            None => SimConfig::default(),
        };
        // The arena always follows the canvas
        if let Some(size) = self.canvas {
            config.arena_width = size.x;
            config.arena_height = size.y;
        }
        Ok(config)
    }

    fn reload_context(&mut self) {
        let built = self
            .load_config()
            .and_then(|config| build_simulation_context(&config).map_err(|e| e.to_string()));

        match built {
            Ok(ctx) => {
                self.ctx_opt = Some(ctx);
                self.last_load_error = None;
                self.last_hit.clear();
            }
            Err(e) => {
                warn!(error = %e, "failed to build world");
                self.last_load_error = Some(e);
                self.ctx_opt = None;
                self.playing = false;
            }
        }
    }

    fn check_file_changes(&mut self) {
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if let Some(path) = &self.config_path {
                        if paths.contains(path) {
                            debug!(path = %path.display(), "config changed");
                            self.needs_reload = true;
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "file watcher error");
                }
            }
        }

        if self.needs_reload && self.started {
            self.reload_context();
        }
        self.needs_reload = false;
    }

    fn start(&mut self) {
        self.started = true;
        self.reload_context();
        self.playing = self.ctx_opt.is_some();
    }

    fn advance(&mut self) {
        let Some(ctx) = self.ctx_opt.as_mut() else {
            return;
        };
        let now = self.clock.now();
        for event in step_simulation(ctx, now) {
            debug!(body = event.body, note = event.note(), kind = ?event.kind, "impact");
            self.last_hit.insert(event.body, now);
        }
    }

    fn body_color(&self, index: usize, now: f64) -> egui::Color32 {
        match self.last_hit.get(&index) {
            Some(hit) if now - hit < FLASH_SECONDS => egui::Color32::LIGHT_BLUE,
            _ => egui::Color32::BLUE,
        }
    }
}

/// Enabled state and label of the attraction toggle; inert until a world exists
fn attraction_button(sim: Option<&SimulationContext>) -> (bool, &'static str) {
    match sim {
        Some(sim) if sim.world.attraction_enabled() => (true, "Attraction: on"),
        Some(_) => (true, "Attraction: off"),
        None => (false, "Attraction"),
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        self.started,
                        egui::Button::new(if self.playing { "⏸ Pause" } else { "▶ Play" }),
                    )
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                if ui.add_enabled(self.started, egui::Button::new("⏮ Reset")).clicked() {
                    self.reload_context();
                    self.playing = false;
                }

                if ui.add_enabled(self.started, egui::Button::new("⏭ Step")).clicked() {
                    self.advance();
                }

                ui.separator();

                let (enabled, label) = attraction_button(self.ctx_opt.as_ref());
                if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                    if let Some(ref mut sim) = self.ctx_opt {
                        sim.world.toggle_attraction();
                    }
                }

                ui.separator();

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=10.0));

                ui.separator();

                if let Some(ref sim) = self.ctx_opt {
                    ui.label(format!(
                        "Tick: {}  Bodies: {}",
                        sim.current_tick,
                        sim.world.bodies.len()
                    ));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let response = ui.allocate_rect(rect, egui::Sense::click());
            let painter = ui.painter_at(rect);

            self.canvas = Some(rect.size());

            if !self.started {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Click to start",
                    egui::FontId::proportional(24.0),
                    egui::Color32::WHITE,
                );
                if response.clicked() {
                    self.start();
                }
                return;
            }

            let now = self.clock.now();

            if let Some(ref mut sim) = self.ctx_opt {
                sim.world.set_arena(rect.width(), rect.height());
                if let Some(pos) = response.hover_pos() {
                    sim.world
                        .set_pointer(Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
                }
            }

            if let Some(ref sim) = self.ctx_opt {
                for body in get_body_states(sim) {
                    let body_rect = egui::Rect::from_min_size(
                        rect.min + egui::vec2(body.pos[0], body.pos[1]),
                        egui::vec2(body.size[0], body.size[1]),
                    );
                    painter.rect_filled(body_rect, 0.0, self.body_color(body.index, now));
                }

                if let Some(point) = sim.world.attraction_snapshot() {
                    painter.circle_filled(
                        rect.min + egui::vec2(point.x, point.y),
                        5.0,
                        egui::Color32::RED,
                    );
                }
            }

            if let Some(ref error) = self.last_load_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(rect.height() * 0.4);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED)
                            .size(16.0),
                    );
                });
            }
        });

        if self.playing {
            let steps_per_frame = self.speed_multiplier.max(0.1).round().max(1.0) as usize;
            for _ in 0..steps_per_frame {
                self.advance();
            }
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_core::World;

    #[test]
    fn test_attraction_button_disabled_without_world() {
        assert_eq!(attraction_button(None), (false, "Attraction"));
    }

    #[test]
    fn test_attraction_button_reflects_world_state() {
        let world = World::new(Vec2::new(800.0, 600.0));
        let mut sim = SimulationContext::from_world(world, SimConfig::default());
        assert_eq!(attraction_button(Some(&sim)), (true, "Attraction: on"));

        sim.world.toggle_attraction();
        assert_eq!(attraction_button(Some(&sim)), (true, "Attraction: off"));
    }
}
