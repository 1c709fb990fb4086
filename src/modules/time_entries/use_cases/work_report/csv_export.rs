use chrono::{SecondsFormat, TimeZone, Utc};
use csv::Writer;

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::primitives::EpochMillis;

pub const CSV_HEADER: [&str; 3] = ["id", "timestamp", "type"];

/// One row per entry, timestamps as RFC 3339 UTC with millisecond precision.
pub fn render_csv(entries: &[TimeEntry]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;

    for entry in entries {
        wtr.write_record([
            entry.id.to_string(),
            format_timestamp(entry.timestamp),
            entry.entry_type.as_str().to_string(),
        ])?;
    }

    wtr.flush()?;
    wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

// Out-of-range instants fall back to the raw epoch value.
fn format_timestamp(ms: EpochMillis) -> String {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| ms.to_string())
}
