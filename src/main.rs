mod app;
mod color;
mod data;
mod geo;
mod render;
mod state;
mod ui;

use std::path::PathBuf;

use app::DemographApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional positional argument: dataset to load at startup.
    let dataset_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Demograph – Fertility & GDP Dashboard",
        options,
        Box::new(move |_cc| {
            let mut app = DemographApp::default();
            if let Some(path) = dataset_path {
                app.state.load_path(&path);
            }
            Ok(Box::new(app))
        }),
    )
}
