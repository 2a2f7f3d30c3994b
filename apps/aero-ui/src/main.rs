#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::collapsible_if)]

mod app;
mod views;

use app::AeroSimApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_title("AeroSim"),
        ..Default::default()
    };

    eframe::run_native(
        "AeroSim",
        options,
        Box::new(|cc| Ok(Box::new(AeroSimApp::new(cc)))),
    )
}
