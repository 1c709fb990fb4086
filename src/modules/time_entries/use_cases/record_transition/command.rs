// Command data type for recording a clock transition.
//
// Purpose
// - Carry the caller's intent as received: who, and the raw requested label.
//
// Notes
// - The label stays a string here so an unknown label is reported as an invalid
//   type by the handler rather than lost in transport deserialization.
// - There is no timestamp: the handler assigns it at acceptance time.

use crate::shared::core::primitives::EmployeeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTransition {
    pub employee_id: EmployeeId,
    pub requested_type: String,
}

impl RecordTransition {
    pub fn new(employee_id: EmployeeId, requested_type: impl Into<String>) -> Self {
        Self {
            employee_id,
            requested_type: requested_type.into(),
        }
    }
}
