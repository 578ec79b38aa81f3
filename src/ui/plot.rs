use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};
use movebank_tracker::color;

use super::color32;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cumulative distance chart (central panel, below the track)
// ---------------------------------------------------------------------------

pub fn distance_plot(ui: &mut Ui, state: &AppState) {
    let (series, by_time) = state.distance_series();
    if series.len() < 2 {
        return;
    }

    let x_label = if by_time { "Days since first fix" } else { "Fix number" };
    let points: PlotPoints = series.into_iter().collect();
    let line = Line::new(points)
        .name("Distance travelled")
        .color(color32(color::TRACK_LINE))
        .width(1.5);

    Plot::new("distance_plot")
        .height(160.0)
        .x_axis_label(x_label)
        .y_axis_label("km")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
