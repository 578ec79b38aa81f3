use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{TabularRecord, TrackResult, Viewport};
use super::{pipeline, table};

/// Extensions accepted for saved direct-read responses.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Read a saved response body from disk.
pub fn read_body(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        bail!("Unsupported file extension: .{ext}");
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Load an event export and run it through the pipeline.
pub fn load_track(path: &Path, viewport: &Viewport) -> Result<TrackResult> {
    let body = read_body(path)?;
    Ok(pipeline::run_with_viewport(&body, viewport))
}

/// Load any tabular export (studies, individuals) as raw records.
pub fn load_records(path: &Path) -> Result<Vec<TabularRecord>> {
    let body = read_body(path)?;
    Ok(table::parse(&body))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_event_export_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "timestamp,location_long,location_lat,visible").unwrap();
        writeln!(file, "2020-01-01 00:00:00.000,8.0,47.0,true").unwrap();
        writeln!(file, "2020-01-03 00:00:00.000,8.5,47.5,true").unwrap();

        let result = load_track(file.path(), &Viewport::new(300.0, 300.0)).unwrap();
        assert_eq!(result.points.len(), 2);
        assert!((result.summary.unwrap().duration_days - 2.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = read_body(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn missing_file_carries_context() {
        let err = read_body(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("reading /definitely/not/here.csv"));
    }
}
