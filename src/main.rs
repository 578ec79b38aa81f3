mod app;
mod state;
mod ui;

use app::TrackerApp;
use eframe::egui;
use movebank_tracker::config::ViewerConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match ViewerConfig::discover() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Ignoring unusable config: {e:#}");
            ViewerConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Movebank Tracker",
        options,
        Box::new(|_cc| Ok(Box::new(TrackerApp::new(config)))),
    )
}
