use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::trip::parse_timestamp;

// ---------------------------------------------------------------------------
// TabularRecord – one data row keyed by header name
// ---------------------------------------------------------------------------

/// A single parsed row: column name → cell value, in header order.
///
/// Duplicate header names keep the position of their first occurrence and
/// the value of their last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularRecord {
    fields: Vec<(String, String)>,
}

impl TabularRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`, overwriting an earlier value for the same column.
    pub fn insert(&mut self, column: &str, value: &str) {
        match self.fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, slot)) => *slot = value.to_string(),
            None => self.fields.push((column.to_string(), value.to_string())),
        }
    }

    /// Cell value for `column`, or `None` if the header never named it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Cell value for `column`, treating an absent column as empty.
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for TabularRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = TabularRecord::new();
        for (k, v) in iter {
            record.insert(k.as_ref(), v.as_ref());
        }
        record
    }
}

// ---------------------------------------------------------------------------
// TrackPoint – one sanitized location fix
// ---------------------------------------------------------------------------

/// A geolocated tracking event that survived sanitizing.
///
/// `latitude` and `longitude` are always finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Raw timestamp text from the source; `None` when the cell was empty.
    pub timestamp: Option<String>,
    pub visible: bool,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64, timestamp: Option<&str>) -> Self {
        Self {
            latitude,
            longitude,
            timestamp: timestamp.map(str::to_string),
            visible: true,
        }
    }

    /// Tooltip text used by the renderers.
    pub fn label(&self) -> String {
        format!(
            "{}\nLat: {}, Long: {}",
            self.timestamp.as_deref().unwrap_or("Unknown time"),
            self.latitude,
            self.longitude
        )
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Lat/long extent of a point sequence. Min may equal max on either axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_long: f64,
    pub max_long: f64,
}

impl BoundingBox {
    /// Single pass over `points`; `None` when there are none.
    pub fn from_points(points: &[TrackPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = BoundingBox {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_long: first.longitude,
            max_long: first.longitude,
        };
        Some(points[1..].iter().fold(init, |bb, p| BoundingBox {
            min_lat: bb.min_lat.min(p.latitude),
            max_lat: bb.max_lat.max(p.latitude),
            min_long: bb.min_long.min(p.longitude),
            max_long: bb.max_long.max(p.longitude),
        }))
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn long_span(&self) -> f64 {
        self.max_long - self.min_long
    }
}

/// Position in viewport pixel space, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixel drawing area the trajectory is scaled into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Viewport {
    pub const DEFAULT_MARGIN: f64 = 20.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Self::DEFAULT_MARGIN,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

// ---------------------------------------------------------------------------
// TripSummary
// ---------------------------------------------------------------------------

/// Statistics over one loaded trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub point_count: usize,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
    /// Fractional days from start to end. Negative if the input was out of order.
    pub duration_days: f64,
    pub total_distance_km: f64,
}

impl TripSummary {
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_timestamp.as_deref().and_then(parse_timestamp)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.end_timestamp.as_deref().and_then(parse_timestamp)
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = |t: Option<NaiveDateTime>| {
            t.map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "unknown".to_string())
        };
        writeln!(f, "Total Points:   {}", self.point_count)?;
        writeln!(f, "Start Date:     {}", date(self.start_time()))?;
        writeln!(f, "End Date:       {}", date(self.end_time()))?;
        writeln!(f, "Duration:       {:.0} days", self.duration_days)?;
        write!(f, "Total Distance: {:.0} km", self.total_distance_km)
    }
}

// ---------------------------------------------------------------------------
// TrackResult – what the pipeline hands to a renderer
// ---------------------------------------------------------------------------

/// Output of one pipeline run. `summary` is `None` exactly when there was no
/// usable tracking data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackResult {
    pub projected: Vec<ProjectedPoint>,
    pub summary: Option<TripSummary>,
    pub points: Vec<TrackPoint>,
}

impl TrackResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }

    /// Pretty-printed JSON of points, projection and summary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
