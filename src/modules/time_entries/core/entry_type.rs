// The closed vocabulary of clock events.
//
// Purpose
// - Five labels: IN, PAUSE, RESUME, RETURN, OUT. These spellings are stable and
//   must round-trip unchanged through JSON, GraphQL, CSV and SQL.
//
// Notes
// - RESUME and RETURN are one semantic event ("back to work after a pause")
//   with two accepted spellings. Rules never require the two to match.
// - Anything outside the five labels is rejected at parse time, so a typo can
//   never become a sixth type that slips past the transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    In,
    Pause,
    Resume,
    Return,
    Out,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid entry type {0:?}, expected one of IN, PAUSE, RESUME, RETURN, OUT")]
pub struct ParseEntryTypeError(pub String);

impl EntryType {
    pub const ALL: [EntryType; 5] = [
        EntryType::In,
        EntryType::Pause,
        EntryType::Resume,
        EntryType::Return,
        EntryType::Out,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::In => "IN",
            EntryType::Pause => "PAUSE",
            EntryType::Resume => "RESUME",
            EntryType::Return => "RETURN",
            EntryType::Out => "OUT",
        }
    }

    /// IN, RESUME or RETURN: opens a worked interval.
    pub fn starts_work(&self) -> bool {
        matches!(self, EntryType::In | EntryType::Resume | EntryType::Return)
    }

    /// PAUSE or OUT: closes a worked interval.
    pub fn stops_work(&self) -> bool {
        matches!(self, EntryType::Pause | EntryType::Out)
    }

    pub fn is_resume(&self) -> bool {
        matches!(self, EntryType::Resume | EntryType::Return)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ParseEntryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        EntryType::ALL
            .into_iter()
            .find(|t| t.as_str() == label)
            .ok_or_else(|| ParseEntryTypeError(s.to_string()))
    }
}
