// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod gui;
use eframe::egui;
use pressure_widget::SimulationConfig;
// Entry point
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = SimulationConfig::default();
    let app = gui::PressureWidgetApp::new(config.clone())?;
    // Canvas plus room for the readouts and buttons
    let inner_size = [
        config.canvas_width as f32 + 40.0,
        config.canvas_height as f32 + 110.0,
    ];
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(inner_size)
        .with_min_inner_size(inner_size)
        .with_title("Pressure monitor");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Pressure monitor",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the widget window: {e}"))
}
