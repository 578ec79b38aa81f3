use eframe::egui;

use movebank_tracker::config::ViewerConfig;

use crate::state::AppState;
use crate::ui::{panels, plot, track_view};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrackerApp {
    pub state: AppState,
}

impl TrackerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: studies, animals, statistics ----
        egui::SidePanel::left("catalog_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: trajectory, distance chart, point table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            track_view::track_canvas(ui, &mut self.state);
            ui.add_space(8.0);
            plot::distance_plot(ui, &self.state);
            if self.state.show_point_table {
                ui.add_space(8.0);
                track_view::point_table(ui, &self.state);
            }
        });
    }
}
