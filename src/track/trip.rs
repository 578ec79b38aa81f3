use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::model::{TrackPoint, TripSummary};

/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Formats seen in Movebank exports, most common first.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TripError {
    #[error("cannot summarise a trip without any points")]
    EmptyTrack,
}

/// Summarise an ordered, non-empty point sequence.
///
/// The order is taken as given: start/end are the first and last points, so
/// out-of-order input can produce a negative duration. A missing or
/// unparseable timestamp at either end yields a duration of `0.0`.
pub fn analyze(points: &[TrackPoint]) -> Result<TripSummary, TripError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(TripError::EmptyTrack);
    };

    let total_distance_km: f64 = points
        .windows(2)
        .map(|w| segment_km(&w[0], &w[1]))
        .sum();

    Ok(TripSummary {
        point_count: points.len(),
        start_timestamp: first.timestamp.clone(),
        end_timestamp: last.timestamp.clone(),
        duration_days: duration_days(first, last),
        total_distance_km,
    })
}

/// Running distance at each point; the first entry is always `0.0`.
pub fn cumulative_distance_km(points: &[TrackPoint]) -> Vec<f64> {
    let mut total = 0.0;
    let mut out = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += segment_km(&points[i - 1], p);
        }
        out.push(total);
    }
    out
}

/// Great-circle distance between two lat/long positions in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` past 1 for near-antipodal pairs.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

fn segment_km(a: &TrackPoint, b: &TrackPoint) -> f64 {
    haversine_km(a.latitude, a.longitude, b.latitude, b.longitude)
}

fn duration_days(first: &TrackPoint, last: &TrackPoint) -> f64 {
    let start = first.timestamp.as_deref().and_then(parse_timestamp);
    let end = last.timestamp.as_deref().and_then(parse_timestamp);
    match (start, end) {
        (Some(s), Some(e)) => days_between(s, e),
        _ => {
            log::debug!(
                "Duration unavailable (start {:?}, end {:?}); reporting 0 days",
                first.timestamp,
                last.timestamp
            );
            0.0
        }
    }
}

/// Fractional days from `start` to `end`, millisecond resolution.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Parse a source timestamp as UTC. Accepts the Movebank
/// `YYYY-MM-DD HH:MM:SS.sss` layout, RFC 3339, or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(t);
        }
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.naive_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
