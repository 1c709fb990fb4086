// ClockState is the canonical work state implied by an employee's last entry.
//
// Mapping
// - no entry        -> Start
// - OUT             -> ClockedOut
// - IN/RESUME/RETURN -> Working
// - PAUSE           -> Paused
//
// Transition table
// - Start, ClockedOut -> IN
// - Working          -> PAUSE, OUT
// - Paused           -> RESUME, RETURN
//
// Boundaries
// - Pure. No input or output.

use crate::modules::time_entries::core::entry_type::EntryType;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockState {
    Start,
    Working,
    Paused,
    ClockedOut,
}

impl ClockState {
    pub fn from_last(last: Option<EntryType>) -> Self {
        match last {
            None => ClockState::Start,
            Some(EntryType::Out) => ClockState::ClockedOut,
            Some(EntryType::Pause) => ClockState::Paused,
            Some(EntryType::In | EntryType::Resume | EntryType::Return) => ClockState::Working,
        }
    }

    pub fn admits(&self, requested: EntryType) -> bool {
        match self {
            ClockState::Start | ClockState::ClockedOut => requested == EntryType::In,
            ClockState::Working => requested.stops_work(),
            ClockState::Paused => requested.is_resume(),
        }
    }

    /// The labels a client may offer next, in vocabulary order.
    pub fn allowed_next(&self) -> Vec<EntryType> {
        EntryType::ALL
            .into_iter()
            .filter(|t| self.admits(*t))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClockState::Start => "START",
            ClockState::Working => "WORKING",
            ClockState::Paused => "PAUSED",
            ClockState::ClockedOut => "CLOCKED_OUT",
        }
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
