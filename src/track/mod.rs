/// Tracking-data pipeline: parsing, sanitizing, projection, trip statistics.
///
/// Architecture:
/// ```text
///  raw direct-read body (comma-delimited text)
///        │
///        ▼
///   ┌──────────┐
///   │  table    │  header + rows → Vec<TabularRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sanitize  │  keep visible, geolocated rows → Vec<TrackPoint>
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │ project   │   │  trip     │
///   └──────────┘   └──────────┘
///   ProjectedPoint   TripSummary
/// ```
///
/// [`pipeline`] sequences the stages; every stage is a pure function.

pub mod loader;
pub mod model;
pub mod pipeline;
pub mod project;
pub mod sanitize;
pub mod table;
pub mod trip;

pub use model::{
    BoundingBox, ProjectedPoint, TabularRecord, TrackPoint, TrackResult, TripSummary, Viewport,
};
pub use pipeline::{run, run_with_viewport};
pub use trip::TripError;
