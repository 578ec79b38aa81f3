use movebank_tracker::svg::{SvgStyle, render_svg};
use movebank_tracker::track::{self, BoundingBox, TrackResult, Viewport, project, sanitize, table, trip};

const HEADER: &str = "timestamp,location_long,location_lat,visible";

fn export(rows: &[&str]) -> String {
    let mut body = String::from(HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body
}

#[test]
fn empty_bodies_are_no_data_not_errors() {
    assert_eq!(track::run("", 300.0, 300.0), TrackResult::empty());
    assert_eq!(track::run("header_only_line", 300.0, 300.0), TrackResult::empty());
    assert_eq!(track::run(HEADER, 300.0, 300.0), TrackResult::empty());
}

#[test]
fn parser_yields_one_record_per_row_with_all_columns() {
    let body = export(&[
        "2020-01-01 00:00:00.000,1.0,2.0,true",
        "2020-01-01 01:00:00.000,1.5",
        ",,,",
        "2020-01-01 02:00:00.000,2.0,3.0,true,extra,fields",
    ]);
    let records = table::parse(&body);
    assert_eq!(records.len(), 4);
    for rec in &records {
        for col in HEADER.split(',') {
            assert!(rec.get(col).is_some(), "missing {col}");
        }
    }
    assert_eq!(records[1].get("location_lat"), Some(""));
    assert_eq!(records[3].len(), 4);
}

#[test]
fn dirty_export_degrades_to_fewer_points() {
    let body = export(&[
        "2021-06-01 00:00:00.000,8.0,47.0,true",
        "2021-06-01 06:00:00.000,8.1,47.1,false",
        "2021-06-01 12:00:00.000,,47.2,true",
        "2021-06-01 18:00:00.000,8.3,north,true",
        "2021-06-02 00:00:00.000,8.4,47.4,",
        "2021-06-02 06:00:00.000,8.5,47.5",
    ]);
    let result = track::run(&body, 400.0, 300.0);

    let longs: Vec<f64> = result.points.iter().map(|p| p.longitude).collect();
    assert_eq!(longs, vec![8.0, 8.4, 8.5]);
    assert_eq!(result.projected.len(), 3);

    let summary = result.summary.expect("summary for non-empty track");
    assert_eq!(summary.point_count, 3);
    assert_eq!(summary.start_timestamp.as_deref(), Some("2021-06-01 00:00:00.000"));
    assert_eq!(summary.end_timestamp.as_deref(), Some("2021-06-02 06:00:00.000"));
    assert!((summary.duration_days - 1.25).abs() < 1e-9);
}

#[test]
fn projection_stays_within_margins() {
    let rows: Vec<String> = (0..40)
        .map(|i| {
            let t = i as f64;
            format!(
                "2020-01-01 00:00:00.000,{},{},true",
                10.0 + (t * 0.7).sin() * 3.0,
                50.0 + (t * 0.3).cos() * 2.0
            )
        })
        .collect();
    let body = export(&rows.iter().map(String::as_str).collect::<Vec<_>>());
    let vp = Viewport::new(320.0, 240.0);
    let result = track::run_with_viewport(&body, &vp);
    assert_eq!(result.projected.len(), 40);
    for p in &result.projected {
        assert!(p.x >= vp.margin - 1e-9 && p.x <= vp.width - vp.margin + 1e-9);
        assert!(p.y >= vp.margin - 1e-9 && p.y <= vp.height - vp.margin + 1e-9);
    }
}

#[test]
fn shared_longitude_has_equal_finite_x() {
    let body = export(&[
        "2020-01-01 00:00:00.000,5.0,1.0,true",
        "2020-01-02 00:00:00.000,5.0,2.0,true",
        "2020-01-03 00:00:00.000,5.0,4.0,true",
    ]);
    let result = track::run(&body, 300.0, 300.0);
    let xs: Vec<f64> = result.projected.iter().map(|p| p.x).collect();
    assert!(xs.iter().all(|x| x.is_finite()));
    assert!(xs.windows(2).all(|w| w[0] == w[1]));
    assert!(result.projected.iter().all(|p| p.y.is_finite()));
}

#[test]
fn equator_degree_is_about_111_km() {
    let body = export(&[
        "2020-01-01 00:00:00.000,0.0,0.0,true",
        "2020-01-02 00:00:00.000,1.0,0.0,true",
    ]);
    let summary = track::run(&body, 300.0, 300.0).summary.unwrap();
    assert!((summary.total_distance_km - 111.19).abs() < 0.5);
}

#[test]
fn single_point_trip() {
    let body = export(&["2020-01-01 00:00:00.000,13.4,52.5,true"]);
    let result = track::run(&body, 300.0, 300.0);
    let summary = result.summary.as_ref().unwrap();
    assert_eq!(summary.total_distance_km, 0.0);
    assert_eq!(summary.duration_days, 0.0);
    assert_eq!(result.projected[0].x, 150.0);
    assert_eq!(result.projected[0].y, 150.0);
}

#[test]
fn stages_compose_like_the_pipeline() {
    let body = export(&[
        "2020-01-01 00:00:00.000,1.0,1.0,true",
        "2020-01-05 00:00:00.000,2.0,3.0,true",
    ]);
    let vp = Viewport::new(300.0, 300.0);
    let points = sanitize::sanitize(&table::parse(&body));
    let bb = BoundingBox::from_points(&points).unwrap();
    assert_eq!((bb.min_long, bb.max_long), (1.0, 2.0));

    let expected = TrackResult {
        projected: project::project(&points, &vp),
        summary: Some(trip::analyze(&points).unwrap()),
        points,
    };
    assert_eq!(track::run_with_viewport(&body, &vp), expected);
}

#[test]
fn svg_of_pipeline_result() {
    let body = export(&[
        "2020-01-01 00:00:00.000,1.0,1.0,true",
        "2020-01-02 00:00:00.000,2.0,2.0,true",
    ]);
    let vp = Viewport::new(300.0, 300.0);
    let svg = render_svg(&track::run_with_viewport(&body, &vp), &vp, &SvgStyle::default());
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("class=\"track-line\""));
}
