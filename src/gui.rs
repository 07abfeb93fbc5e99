// src/gui.rs
use std::time::Instant;
use eframe::egui;
use egui::{Color32, Stroke, Vec2};
use pressure_widget::drivers::{
    ReadoutPanel, RetainedSurface, SignalSimulator, SimulationConfig, TickScheduler, WidgetError,
};
use pressure_widget::{Controller, WidgetCommand};

type WidgetController = Controller<SignalSimulator, RetainedSurface, ReadoutPanel>;

pub struct PressureWidgetApp {
    controller: WidgetController,
    scheduler: TickScheduler,
}

impl PressureWidgetApp {
    pub fn new(config: SimulationConfig) -> Result<Self, WidgetError> {
        let source = SignalSimulator::from_entropy(&config);
        let scheduler = TickScheduler::new(config.tick_interval(), Instant::now());
        let controller =
            Controller::new(config, source, RetainedSurface::new(), ReadoutPanel::new())?;
        Ok(Self {
            controller,
            scheduler,
        })
    }

    // Paint the retained display list into a fixed-size canvas
    fn draw_chart(&self, ui: &mut egui::Ui) {
        let config = self.controller.config();
        let size = Vec2::new(config.canvas_width as f32, config.canvas_height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        let painter = painter.with_clip_rect(rect);
        for line in self.controller.surface().lines() {
            let seg = &line.segment;
            let color = Color32::from_rgb(seg.color.0, seg.color.1, seg.color.2);
            painter.line_segment(
                [
                    rect.min + Vec2::new(seg.x1 as f32, seg.y1 as f32),
                    rect.min + Vec2::new(seg.x2 as f32, seg.y2 as f32),
                ],
                Stroke::new(line.thickness, color),
            );
        }
    }
}

impl eframe::App for PressureWidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Timer: the scheduler keeps firing while paused, the controller ignores it
        let now = Instant::now();
        if self.scheduler.poll(now) {
            self.controller.dispatch(WidgetCommand::Tick);
        }
        ctx.request_repaint_after(self.scheduler.until_next(now));

        // 2. UI
        ctx.set_visuals(egui::Visuals::light());
        let modal_open = self.controller.readouts().notification.is_some();
        let mut commands = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_chart(ui);
            ui.add_space(8.0);

            let readouts = self.controller.readouts();
            ui.horizontal(|ui| {
                ui.label(format!("Current value: {}", readouts.live_text));
                if !readouts.average_text.is_empty() {
                    ui.separator();
                    ui.label(format!("Average: {}", readouts.average_text));
                }
            });
            ui.add_enabled_ui(!modal_open, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(readouts.run_label.as_str()).clicked() {
                        commands.push(WidgetCommand::ToggleRun);
                    }
                    if ui.button("Average").clicked() {
                        commands.push(WidgetCommand::ShowAverage);
                    }
                });
            });
        });

        // 3. Average notification, shown until acknowledged
        let mut dismissed = false;
        if let Some(note) = &self.controller.readouts().notification {
            egui::Window::new(note.title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(note.message.as_str());
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }
        if dismissed {
            self.controller.readouts_mut().dismiss();
        }

        for command in commands {
            self.controller.dispatch(command);
        }
    }
}
