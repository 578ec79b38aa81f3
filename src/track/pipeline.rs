use super::model::{TrackResult, Viewport};
use super::{project, sanitize, table, trip};

/// Run the full pipeline with the default margin.
pub fn run(raw: &str, viewport_width: f64, viewport_height: f64) -> TrackResult {
    run_with_viewport(raw, &Viewport::new(viewport_width, viewport_height))
}

/// Parse → sanitize → {project, analyze}.
///
/// No usable points gives [`TrackResult::empty`], which callers show as
/// "no tracking data" rather than an error.
pub fn run_with_viewport(raw: &str, viewport: &Viewport) -> TrackResult {
    let records = table::parse(raw);
    let points = sanitize::sanitize(&records);

    // `analyze` only fails on an empty slice, which is this same branch.
    let Ok(summary) = trip::analyze(&points) else {
        log::info!("No usable tracking points in {} records", records.len());
        return TrackResult::empty();
    };
    let projected = project::project(&points, viewport);

    log::info!(
        "Track: {} points, {:.1} km over {:.1} days",
        summary.point_count,
        summary.total_distance_km,
        summary.duration_days
    );

    TrackResult {
        projected,
        summary: Some(summary),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_header_only_are_no_data() {
        for raw in ["", "header_only_line"] {
            let result = run(raw, 300.0, 300.0);
            assert!(result.is_empty());
            assert!(result.projected.is_empty());
            assert!(result.points.is_empty());
            assert_eq!(result, TrackResult::empty());
        }
    }

    #[test]
    fn all_hidden_is_no_data() {
        let raw = "timestamp,location_long,location_lat,visible\n\
                   2020-01-01 00:00:00.000,1.0,2.0,false\n";
        assert!(run(raw, 300.0, 300.0).is_empty());
    }

    #[test]
    fn projected_and_points_line_up() {
        let raw = "timestamp,location_long,location_lat,visible\n\
                   2020-01-01 00:00:00.000,0.0,0.0,true\n\
                   2020-01-01 12:00:00.000,,5.0,true\n\
                   2020-01-02 00:00:00.000,1.0,0.0,true\n";
        let result = run(raw, 300.0, 300.0);
        assert_eq!(result.points.len(), 2);
        assert_eq!(result.projected.len(), 2);
        let summary = result.summary.unwrap();
        assert_eq!(summary.point_count, 2);
        assert!((summary.duration_days - 1.0).abs() < 1e-9);
        assert!((summary.total_distance_km - 111.19).abs() < 0.5);
    }

    #[test]
    fn custom_margin_is_respected() {
        let raw = "location_long,location_lat\n0,0\n10,10\n";
        let result = run_with_viewport(raw, &Viewport::new(100.0, 100.0).with_margin(5.0));
        assert_eq!(result.projected[0].x, 5.0);
        assert_eq!(result.projected[1].x, 95.0);
    }
}
