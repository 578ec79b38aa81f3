use super::model::{BoundingBox, ProjectedPoint, TrackPoint, Viewport};

/// Scale `points` into `viewport`, keeping relative position.
///
/// Longitude runs left → right, latitude bottom → top (north up). A
/// zero-span axis puts every point on the centre line of that axis.
/// Output order and length match the input.
pub fn project(points: &[TrackPoint], viewport: &Viewport) -> Vec<ProjectedPoint> {
    let Some(bounds) = BoundingBox::from_points(points) else {
        return Vec::new();
    };

    let m = viewport.margin;
    let inner_w = viewport.width - 2.0 * m;
    let inner_h = viewport.height - 2.0 * m;

    let long_span = bounds.long_span();
    let lat_span = bounds.lat_span();

    points
        .iter()
        .map(|p| {
            let x = if long_span == 0.0 {
                m + inner_w / 2.0
            } else {
                (p.longitude - bounds.min_long) / long_span * inner_w + m
            };
            let y = if lat_span == 0.0 {
                m + inner_h / 2.0
            } else {
                (bounds.max_lat - p.latitude) / lat_span * inner_h + m
            };
            ProjectedPoint { x, y }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, long: f64) -> TrackPoint {
        TrackPoint::new(lat, long, None)
    }

    #[test]
    fn corners_map_to_margins() {
        let points = [pt(10.0, -20.0), pt(-10.0, 20.0)];
        let out = project(&points, &Viewport::new(300.0, 200.0));
        assert_eq!(out[0], ProjectedPoint { x: 20.0, y: 20.0 });
        assert_eq!(out[1], ProjectedPoint { x: 280.0, y: 180.0 });
    }

    #[test]
    fn north_is_up() {
        let points = [pt(50.0, 0.0), pt(40.0, 1.0)];
        let out = project(&points, &Viewport::new(300.0, 300.0));
        assert!(out[0].y < out[1].y);
    }

    #[test]
    fn interior_points_stay_inside_margins() {
        let points: Vec<TrackPoint> = (0..50)
            .map(|i| {
                let t = i as f64;
                pt((t * 0.37).sin() * 30.0, (t * 0.11).cos() * 90.0)
            })
            .collect();
        let vp = Viewport::new(420.0, 300.0).with_margin(15.0);
        for p in project(&points, &vp) {
            assert!(p.x >= 15.0 - 1e-9 && p.x <= 405.0 + 1e-9, "x out of range: {}", p.x);
            assert!(p.y >= 15.0 - 1e-9 && p.y <= 285.0 + 1e-9, "y out of range: {}", p.y);
        }
    }

    #[test]
    fn shared_longitude_centres_x() {
        let points = [pt(1.0, 5.0), pt(2.0, 5.0), pt(3.0, 5.0)];
        let out = project(&points, &Viewport::new(300.0, 300.0));
        for p in &out {
            assert!(p.x.is_finite());
            assert_eq!(p.x, 150.0);
        }
        assert_eq!(out[0].y, 280.0);
        assert_eq!(out[2].y, 20.0);
    }

    #[test]
    fn single_point_lands_in_centre() {
        let out = project(&[pt(47.0, 8.0)], &Viewport::new(300.0, 200.0));
        assert_eq!(out, vec![ProjectedPoint { x: 150.0, y: 100.0 }]);
    }

    #[test]
    fn empty_input_projects_to_nothing() {
        assert!(project(&[], &Viewport::new(300.0, 300.0)).is_empty());
    }
}
