use eframe::egui::{self, Align2, FontId, Pos2, Sense, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use movebank_tracker::color::{self, MarkerRole};

use super::color32;
use crate::state::AppState;

/// Hover distance in pixels for the point tooltip.
const HOVER_RADIUS: f32 = 8.0;

// ---------------------------------------------------------------------------
// Trajectory canvas
// ---------------------------------------------------------------------------

/// Paint the projected track at the panel's width and the configured height.
pub fn track_canvas(ui: &mut Ui, state: &mut AppState) {
    let width = ui.available_width();
    let height = state.config.viewport_height as f32;
    state.fit_track_to(width as f64);

    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, color32(color::TRACK_BACKGROUND));

    let Some(track) = state.track.as_ref().filter(|t| !t.is_empty()) else {
        let hint = if state.track.is_some() {
            "No tracking data available"
        } else {
            "Open tracking data to view a trajectory  (File → Open tracking data…)"
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            hint,
            FontId::proportional(16.0),
            egui::Color32::GRAY,
        );
        return;
    };

    // Projected coordinates are relative to the canvas origin.
    let screen: Vec<Pos2> = track
        .projected
        .iter()
        .map(|p| rect.min + egui::vec2(p.x as f32, p.y as f32))
        .collect();

    if state.config.color_by_time && screen.len() > 1 {
        let gradient = color::time_gradient(screen.len() - 1);
        for (leg, c) in screen.windows(2).zip(gradient) {
            painter.line_segment([leg[0], leg[1]], Stroke::new(2.0, color32(c)));
        }
    } else {
        painter.add(egui::Shape::line(
            screen.clone(),
            Stroke::new(2.0, color32(color::TRACK_LINE)),
        ));
    }

    let len = screen.len();
    for (i, pos) in screen.iter().enumerate() {
        let role = color::marker_role(i, len);
        let radius = match role {
            MarkerRole::Point => state.config.marker_radius,
            MarkerRole::Start | MarkerRole::End => state.config.endpoint_radius,
        };
        painter.circle(
            *pos,
            radius,
            color32(color::marker_color(role)),
            Stroke::new(2.0, egui::Color32::WHITE),
        );
    }

    if let Some(hover) = response.hover_pos() {
        let nearest = screen
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(hover)))
            .filter(|(_, d)| *d <= HOVER_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((i, _)) = nearest {
            response.on_hover_text_at_pointer(track.points[i].label());
        }
    }
}

// ---------------------------------------------------------------------------
// Point table
// ---------------------------------------------------------------------------

pub fn point_table(ui: &mut Ui, state: &AppState) {
    let Some(track) = &state.track else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(240.0)
        .column(Column::auto())
        .column(Column::auto().at_least(160.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["#", "Timestamp", "Latitude", "Longitude", "Distance (km)"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, track.points.len(), |mut row| {
                let i = row.index();
                let p = &track.points[i];
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                row.col(|ui| {
                    ui.label(p.timestamp.as_deref().unwrap_or("Unknown time"));
                });
                row.col(|ui| {
                    ui.label(format!("{:.5}", p.latitude));
                });
                row.col(|ui| {
                    ui.label(format!("{:.5}", p.longitude));
                });
                row.col(|ui| {
                    let km = state.cumulative_km.get(i).copied().unwrap_or(0.0);
                    ui.label(format!("{km:.1}"));
                });
            });
        });
}
