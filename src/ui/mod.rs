pub mod panels;
pub mod plot;
pub mod track_view;

use eframe::egui::Color32;
use movebank_tracker::color::Rgb;

pub fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}
