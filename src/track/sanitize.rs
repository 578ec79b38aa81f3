use super::model::{TabularRecord, TrackPoint};

// ---------------------------------------------------------------------------
// Movebank event attribute names
// ---------------------------------------------------------------------------

pub const TIMESTAMP: &str = "timestamp";
pub const LONGITUDE: &str = "location_long";
pub const LATITUDE: &str = "location_lat";
pub const VISIBLE: &str = "visible";

/// Keep the records that carry a usable, visible location, in source order.
///
/// A record passes when:
/// * `location_long` and `location_lat` are non-empty and parse to finite floats
/// * `visible` is anything but the literal `"false"` (absent counts as visible)
pub fn sanitize(records: &[TabularRecord]) -> Vec<TrackPoint> {
    let points: Vec<TrackPoint> = records.iter().filter_map(to_track_point).collect();

    let dropped = records.len() - points.len();
    if dropped > 0 {
        log::debug!(
            "Sanitizer kept {} of {} records ({dropped} dropped)",
            points.len(),
            records.len()
        );
    }
    points
}

fn to_track_point(record: &TabularRecord) -> Option<TrackPoint> {
    if record.get(VISIBLE) == Some("false") {
        return None;
    }
    let longitude = parse_coordinate(record.get_or_empty(LONGITUDE))?;
    let latitude = parse_coordinate(record.get_or_empty(LATITUDE))?;

    let timestamp = record.get(TIMESTAMP).filter(|t| !t.is_empty());
    Some(TrackPoint::new(latitude, longitude, timestamp))
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::debug!("Rejecting coordinate '{raw}'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(long: &str, lat: &str, visible: Option<&str>) -> TabularRecord {
        let mut rec = TabularRecord::new();
        rec.insert(TIMESTAMP, "2020-01-01 00:00:00.000");
        rec.insert(LONGITUDE, long);
        rec.insert(LATITUDE, lat);
        if let Some(v) = visible {
            rec.insert(VISIBLE, v);
        }
        rec
    }

    #[test]
    fn explicit_false_is_hidden() {
        assert!(sanitize(&[event("1.0", "2.0", Some("false"))]).is_empty());
    }

    #[test]
    fn other_visibility_values_are_visible() {
        let records = [
            event("1.0", "2.0", Some("")),
            event("1.0", "2.0", Some("true")),
            event("1.0", "2.0", None),
            event("1.0", "2.0", Some("FALSE")),
        ];
        let points = sanitize(&records);
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p.visible));
    }

    #[test]
    fn missing_or_bad_coordinates_are_dropped() {
        let records = [
            event("", "2.0", None),
            event("1.0", "", None),
            event("east", "2.0", None),
            event("1.0", "NaN", None),
            event("inf", "2.0", None),
            event("8.5", "47.25", None),
        ];
        let points = sanitize(&records);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].longitude, 8.5);
        assert_eq!(points[0].latitude, 47.25);
    }

    #[test]
    fn order_is_preserved_and_empty_timestamp_is_none() {
        let mut late = event("3.0", "3.0", None);
        late.insert(TIMESTAMP, "");
        let records = [event("1.0", "1.0", None), late, event("2.0", "2.0", None)];
        let points = sanitize(&records);
        let longs: Vec<f64> = points.iter().map(|p| p.longitude).collect();
        assert_eq!(longs, vec![1.0, 3.0, 2.0]);
        assert_eq!(points[1].timestamp, None);
        assert_eq!(points[0].timestamp.as_deref(), Some("2020-01-01 00:00:00.000"));
    }

    #[test]
    fn no_records_no_points() {
        assert!(sanitize(&[]).is_empty());
    }
}
