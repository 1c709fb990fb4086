// Pure decision function for a clock transition.
//
// Responsibilities
// - Check the requested type against the state implied by the last entry.
// - On success describe the entry to append; on failure name the prior state
//   the request needed.
// - Never perform input or output.

use crate::modules::time_entries::core::entry_type::EntryType;
use crate::modules::time_entries::core::state::ClockState;
use crate::modules::time_entries::core::time_entry::NewTimeEntry;
use crate::modules::time_entries::use_cases::record_transition::decision::{
    DecideError, Decision,
};
use crate::shared::core::primitives::{EmployeeId, EpochMillis};

pub fn decide_record(
    last: Option<EntryType>,
    employee_id: EmployeeId,
    requested: EntryType,
    recorded_at: EpochMillis,
) -> Decision {
    if ClockState::from_last(last).admits(requested) {
        return Decision::Accepted {
            entry: NewTimeEntry {
                employee_id,
                entry_type: requested,
                timestamp: recorded_at,
            },
        };
    }
    Decision::Rejected {
        reason: DecideError::InvalidTransition {
            last,
            requested,
            required: required_prior(requested),
        },
    }
}

fn required_prior(requested: EntryType) -> &'static str {
    match requested {
        EntryType::In => "OUT or this is the first entry",
        EntryType::Pause | EntryType::Out => "IN, RESUME or RETURN",
        EntryType::Resume | EntryType::Return => "PAUSE",
    }
}
