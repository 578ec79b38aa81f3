use movebank_tracker::catalog::{self, Individual, Study};
use movebank_tracker::config::ViewerConfig;
use movebank_tracker::track::{self, TabularRecord, TrackResult, Viewport, project, trip};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI session, owned by the app and passed to every panel.
pub struct AppState {
    pub config: ViewerConfig,

    /// Studies from the last opened study export.
    pub studies: Vec<Study>,
    /// Search box contents for the study list.
    pub study_query: String,
    /// Indices into `studies` matching `study_query` (cached).
    pub visible_studies: Vec<usize>,
    pub selected_study: Option<usize>,

    /// Individuals from the last opened individual export.
    pub individuals: Vec<Individual>,
    pub selected_individual: Option<usize>,
    /// Study that was selected when `individuals` was opened, if any.
    pub individuals_study: Option<usize>,

    /// Last pipeline run (None until an event export is opened).
    pub track: Option<TrackResult>,
    /// File name the track came from.
    pub track_source: Option<String>,
    /// Running distance per point, for the chart.
    pub cumulative_km: Vec<f64>,
    /// Viewport the current `track.projected` was computed for.
    pub track_viewport: Option<Viewport>,

    pub show_point_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            studies: Vec::new(),
            study_query: String::new(),
            visible_studies: Vec::new(),
            selected_study: None,
            individuals: Vec::new(),
            selected_individual: None,
            individuals_study: None,
            track: None,
            track_source: None,
            cumulative_km: Vec::new(),
            track_viewport: None,
            show_point_table: false,
            status_message: None,
        }
    }

    pub fn set_studies(&mut self, records: &[TabularRecord]) {
        self.studies = catalog::studies_from_records(records);
        self.selected_study = None;
        self.refilter_studies();
        self.status_message = None;
    }

    /// Recompute `visible_studies` after the search text changed.
    pub fn refilter_studies(&mut self) {
        self.visible_studies = catalog::filter_studies(&self.studies, &self.study_query);
    }

    pub fn select_study(&mut self, index: usize) {
        if self.selected_study == Some(index) {
            return;
        }
        self.selected_study = Some(index);
        // Animals opened for another study no longer apply; ones opened
        // before any study was picked are kept.
        if self.individuals_study.is_some_and(|study| study != index) {
            self.individuals.clear();
            self.selected_individual = None;
            self.individuals_study = None;
            self.status_message =
                Some("Animal list cleared for the new study; open its animals".to_string());
        }
    }

    pub fn set_individuals(&mut self, records: &[TabularRecord]) {
        self.individuals = catalog::individuals_from_records(records);
        self.selected_individual = None;
        self.individuals_study = self.selected_study;
        self.status_message = None;
    }

    /// Run the pipeline over a freshly loaded event export.
    pub fn set_track(&mut self, body: &str, source: String, width: f64) {
        let viewport = self.config.viewport(width);
        let result = track::run_with_viewport(body, &viewport);

        self.cumulative_km = trip::cumulative_distance_km(&result.points);
        self.status_message = result
            .is_empty()
            .then(|| "No tracking data available".to_string());
        self.track = Some(result);
        self.track_source = Some(source);
        self.track_viewport = Some(viewport);
    }

    /// Re-project the current track when the canvas size changed.
    pub fn fit_track_to(&mut self, width: f64) {
        let viewport = self.config.viewport(width);
        if self.track_viewport == Some(viewport) {
            return;
        }
        if let Some(result) = &mut self.track {
            result.projected = project::project(&result.points, &viewport);
            self.track_viewport = Some(viewport);
        }
    }

    /// `[x, km]` pairs for the distance chart. x is days since the first fix
    /// when every timestamp parses, otherwise the point index.
    pub fn distance_series(&self) -> (Vec<[f64; 2]>, bool) {
        let Some(result) = &self.track else {
            return (Vec::new(), false);
        };
        let times: Option<Vec<_>> = result
            .points
            .iter()
            .map(|p| p.timestamp.as_deref().and_then(trip::parse_timestamp))
            .collect();

        match times {
            Some(times) if !times.is_empty() => {
                let first = times[0];
                let series = times
                    .iter()
                    .zip(&self.cumulative_km)
                    .map(|(&t, &km)| [trip::days_between(first, t), km])
                    .collect();
                (series, true)
            }
            _ => {
                let series = self
                    .cumulative_km
                    .iter()
                    .enumerate()
                    .map(|(i, &km)| [i as f64, km])
                    .collect();
                (series, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movebank_tracker::track::table;

    const ANIMALS: &str = "id,local_identifier\n10,Max\n11,Moritz\n";

    #[test]
    fn animals_opened_before_a_study_survive_selection() {
        let mut state = AppState::new(ViewerConfig::default());
        state.set_individuals(&table::parse(ANIMALS));
        state.select_study(0);
        assert_eq!(state.individuals.len(), 2);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn switching_study_clears_its_animals_with_a_message() {
        let mut state = AppState::new(ViewerConfig::default());
        state.select_study(0);
        state.set_individuals(&table::parse(ANIMALS));
        state.selected_individual = Some(1);

        state.select_study(0);
        assert_eq!(state.individuals.len(), 2);

        state.select_study(1);
        assert!(state.individuals.is_empty());
        assert_eq!(state.selected_individual, None);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn distance_chart_ends_at_the_trip_duration() {
        let body = "timestamp,location_long,location_lat\n\
                    2021-01-01 00:00:00.000,0.0,0.0\n\
                    2021-01-01 00:00:00.864,1.0,0.0\n";
        let mut state = AppState::new(ViewerConfig::default());
        state.set_track(body, "events.csv".to_string(), 600.0);

        let (series, by_time) = state.distance_series();
        assert!(by_time);
        let summary = state.track.as_ref().and_then(|t| t.summary.as_ref()).unwrap();
        assert_eq!(series[1][0], summary.duration_days);
        assert_eq!(series[1][1], summary.total_distance_km);
    }
}
