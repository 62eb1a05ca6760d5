// ui.rs - Draws the board, resolves clicks to cells, and drives the controller

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use tokio::runtime::Runtime;
use torus_life::{Controller, RunState, PATTERNS};

const LIVE_COLOR: Color32 = Color32::from_rgb(220, 30, 30);
const DEAD_COLOR: Color32 = Color32::from_rgb(0, 120, 240);
const SPACING: f32 = 2.0;
const MAX_PITCH: f32 = 18.0;
const MIN_PITCH: f32 = 4.0;

pub struct LifeView {
    // Declared before the runtime so the clock is cancelled before the runtime shuts down
    controller: Controller,
    _runtime: Runtime,
    selected_pattern: usize,
    seed: u64,
    status: Option<String>,
}

impl LifeView {
    pub fn new(controller: Controller, runtime: Runtime) -> Self {
        Self {
            controller,
            _runtime: runtime,
            selected_pattern: 0,
            seed: 0,
            status: None,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let running = self.controller.state() == RunState::Running;

        ui.horizontal(|ui| {
            let button_text = if running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                if running {
                    self.controller.stop_game();
                } else {
                    self.controller.start_game();
                }
            }

            if ui.add_enabled(!running, egui::Button::new("⏭ Step")).clicked() {
                if let Err(err) = self.controller.step_game() {
                    self.status = Some(err.to_string());
                }
            }

            if ui.button("⏹ Reset").clicked() {
                self.controller.reset_game();
                self.status = None;
            }

            if ui.button("🎲 Random").clicked() {
                self.controller.stop_game();
                self.seed = self.seed.wrapping_add(1);
                self.controller.randomize(self.seed);
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.controller.stop_game();
                self.controller.load_pattern(&PATTERNS[self.selected_pattern]);
            }
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let snapshot = self.controller.snapshot();
        let (width, height) = (snapshot.width(), snapshot.height());

        let pitch = (ui.available_width() / width as f32).clamp(MIN_PITCH, MAX_PITCH);
        let cell = pitch - SPACING;
        let total_size = Vec2::new(pitch * width as f32 - SPACING, pitch * height as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for y in 0..height {
            for x in 0..width {
                let rect = Rect::from_min_size(
                    egui::pos2(origin.x + x as f32 * pitch, origin.y + y as f32 * pitch),
                    Vec2::splat(cell),
                );
                let color = if snapshot.get(x, y) { LIVE_COLOR } else { DEAD_COLOR };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        if response.clicked() {
            let picked = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(pos, origin, pitch, cell, width, height));
            if let Some((x, y)) = picked {
                if let Err(err) = self.controller.on_cell_picked(x, y) {
                    self.status = Some(err.to_string());
                }
            }
        }

        ui.separator();

        let live = snapshot.population();
        let total = width * height;
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", snapshot.generation()));
            ui.label(format!("Live cells: {live}"));
            ui.label(format!("Dead cells: {}", total - live));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
        });
    }
}

impl eframe::App for LifeView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(err) = self.controller.take_error() {
            self.status = Some(err.to_string());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life on a Torus");

            self.controls(ui);
            ui.separator();

            ui.label("Click cells to toggle them alive/dead, running or not. Edges wrap around.");
            if let Some(status) = &self.status {
                ui.colored_label(Color32::YELLOW, status.as_str());
            }
            ui.separator();

            self.board(ui);
        });
    }
}

/// The cell under `pos`, or `None` for clicks outside the board or in the gaps.
fn cell_at(pos: Pos2, origin: Pos2, pitch: f32, cell: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    let local = pos - origin;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let x = (local.x / pitch) as usize;
    let y = (local.y / pitch) as usize;
    if x >= width || y >= height {
        return None;
    }
    let inside = local.x - x as f32 * pitch <= cell && local.y - y as f32 * pitch <= cell;
    inside.then_some((x, y))
}
