use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use movebank_tracker::track::loader;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – studies, animals, trip statistics
// ---------------------------------------------------------------------------

/// Render the left catalog panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            studies_section(ui, state);
            ui.separator();
            individuals_section(ui, state);
            ui.separator();
            stats_section(ui, state);
        });
}

fn studies_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Studies");
    if state.studies.is_empty() {
        ui.label("No studies loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search");
        if ui.text_edit_singleline(&mut state.study_query).changed() {
            state.refilter_studies();
        }
    });

    if state.visible_studies.is_empty() {
        ui.label("No studies found");
        return;
    }

    for idx in state.visible_studies.clone() {
        let study = &state.studies[idx];
        let selected = state.selected_study == Some(idx);
        let response = ui
            .selectable_label(selected, RichText::new(study.display_name()).strong())
            .on_hover_text(format!(
                "PI: {}\nLicense: {}\nID: {}",
                or_na(&study.principal_investigator_name),
                or_na(&study.license_type),
                study.id
            ));
        if response.clicked() {
            state.select_study(idx);
        }
    }
}

fn individuals_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Animals");
    if state.individuals.is_empty() {
        ui.label("No animals found");
        return;
    }

    for idx in 0..state.individuals.len() {
        let animal = &state.individuals[idx];
        let selected = state.selected_individual == Some(idx);
        let text = format!("{}  ·  {}", animal.display_name(), animal.species());
        if ui.selectable_label(selected, text).clicked() {
            state.selected_individual = Some(idx);
        }
    }

    if let Some(animal) = state.selected_individual.map(|i| &state.individuals[i]) {
        ui.add_space(4.0);
        egui::Grid::new("animal_details")
            .num_columns(2)
            .show(ui, |ui: &mut Ui| {
                ui.label("Species:");
                ui.label(animal.species());
                ui.end_row();
                ui.label("Sex:");
                ui.label(or_unknown(&animal.animal_sex));
                ui.end_row();
                ui.label("Individual ID:");
                ui.label(&animal.id);
                ui.end_row();
            });
    }
}

fn stats_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Tracking Statistics");
    let Some(summary) = state.track.as_ref().and_then(|t| t.summary.as_ref()) else {
        ui.label("No tracking data available");
        return;
    };

    let date = |t: Option<chrono::NaiveDateTime>| {
        t.map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    };

    egui::Grid::new("trip_stats")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Total Points:");
            ui.label(summary.point_count.to_string());
            ui.end_row();
            ui.label("Start Date:");
            ui.label(date(summary.start_time()));
            ui.end_row();
            ui.label("End Date:");
            ui.label(date(summary.end_time()));
            ui.end_row();
            ui.label("Duration:");
            ui.label(format!("{:.0} days", summary.duration_days));
            ui.end_row();
            ui.label("Total Distance:");
            ui.label(format!("{:.0} km", summary.total_distance_km));
            ui.end_row();
        });
}

fn or_na(s: &str) -> &str {
    if s.is_empty() { "N/A" } else { s }
}

fn or_unknown(s: &str) -> &str {
    if s.is_empty() { "Unknown" } else { s }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open studies…").clicked() {
                open_file_dialog(state, Export::Studies);
                ui.close_menu();
            }
            if ui.button("Open animals…").clicked() {
                open_file_dialog(state, Export::Individuals);
                ui.close_menu();
            }
            if ui.button("Open tracking data…").clicked() {
                open_file_dialog(state, Export::Events);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(track), Some(source)) = (&state.track, &state.track_source) {
            ui.label(format!("{source}: {} points", track.points.len()));
            ui.separator();
        }

        if ui
            .selectable_label(state.config.color_by_time, "Color by time")
            .clicked()
        {
            state.config.color_by_time = !state.config.color_by_time;
        }
        if ui
            .selectable_label(state.show_point_table, "Point table")
            .clicked()
        {
            state.show_point_table = !state.show_point_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub enum Export {
    Studies,
    Individuals,
    Events,
}

pub fn open_file_dialog(state: &mut AppState, kind: Export) {
    let title = match kind {
        Export::Studies => "Open study export",
        Export::Individuals => "Open animal export",
        Export::Events => "Open tracking data export",
    };
    let file = rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Direct-read export", loader::SUPPORTED_EXTENSIONS)
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = load_export(state, kind, &path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn load_export(state: &mut AppState, kind: Export, path: &Path) -> anyhow::Result<()> {
    match kind {
        Export::Studies => {
            let records = loader::load_records(path)?;
            state.set_studies(&records);
            log::info!("Loaded {} studies", state.studies.len());
        }
        Export::Individuals => {
            let records = loader::load_records(path)?;
            state.set_individuals(&records);
            log::info!("Loaded {} animals", state.individuals.len());
        }
        Export::Events => {
            let body = loader::read_body(path)?;
            let source = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let width = state.track_viewport.map(|v| v.width).unwrap_or(600.0);
            state.set_track(&body, source, width);
        }
    }
    Ok(())
}
