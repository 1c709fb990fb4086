// Query parameters selecting a time range, shared by the history and report routes.
//
// Accepted forms per bound
// - epoch milliseconds: `1741593600000`
// - RFC 3339 instant: `2025-03-10T08:00:00Z`
// - calendar date: `2025-03-10` (UTC; start of day for `start_date`, last
//   millisecond of the day for `end_date`)
//
// Blank values count as absent.

use crate::modules::time_entries::adapters::outbound::time_entry_store::EntryRange;
use crate::shared::core::primitives::EpochMillis;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "invalid {field} {value:?}, expected epoch milliseconds, an RFC 3339 instant or a YYYY-MM-DD date"
)]
pub struct RangeParamError {
    pub field: &'static str,
    pub value: String,
}

#[derive(Clone, Copy)]
enum Edge {
    Start,
    End,
}

impl RangeQuery {
    pub fn new(start_date: Option<String>, end_date: Option<String>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn to_range(&self) -> Result<EntryRange, RangeParamError> {
        Ok(EntryRange {
            start: parse_bound("start_date", self.start_date.as_deref(), Edge::Start)?,
            end: parse_bound("end_date", self.end_date.as_deref(), Edge::End)?,
        })
    }
}

fn parse_bound(
    field: &'static str,
    raw: Option<&str>,
    edge: Edge,
) -> Result<Option<EpochMillis>, RangeParamError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if let Ok(ms) = raw.parse::<EpochMillis>() {
        return Ok(Some(ms));
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(instant.timestamp_millis()));
    }
    let invalid = || RangeParamError {
        field,
        value: raw.to_string(),
    };
    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
    let at = match edge {
        Edge::Start => day.and_hms_milli_opt(0, 0, 0, 0),
        Edge::End => day.and_hms_milli_opt(23, 59, 59, 999),
    }
    .ok_or_else(invalid)?;
    Ok(Some(at.and_utc().timestamp_millis()))
}
