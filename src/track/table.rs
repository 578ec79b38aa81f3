use csv::{ReaderBuilder, Trim};

use super::model::TabularRecord;

/// Parse a comma-delimited response body into records keyed by the header row.
///
/// * The first non-empty line is the header; an input with no data row
///   yields an empty `Vec`.
/// * Fields are whitespace-trimmed. There is no quoting: a `"` is an ordinary
///   character and a literal comma always splits a field.
/// * Short rows are padded with `""`, long rows are truncated to the header.
/// * Blank lines are skipped.
pub fn parse(text: &str) -> Vec<TabularRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            log::warn!("Unreadable header row: {e}");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping data row {row_no}: {e}");
                continue;
            }
        };
        let record: TabularRecord = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h, row.get(i).unwrap_or("")))
            .collect();
        records.push(record);
    }

    log::debug!(
        "Parsed {} records with {} columns",
        records.len(),
        headers.len()
    );
    records
}
