use crate::modules::time_entries::core::entry_type::EntryType;
use crate::modules::time_entries::core::time_entry::NewTimeEntry;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("cannot {requested} unless last entry was {required} (last entry: {})", describe_last(.last))]
    InvalidTransition {
        last: Option<EntryType>,
        requested: EntryType,
        required: &'static str,
    },
}

fn describe_last(last: &Option<EntryType>) -> &'static str {
    last.as_ref().map_or("none", EntryType::as_str)
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { entry: NewTimeEntry },
    Rejected { reason: DecideError },
}
