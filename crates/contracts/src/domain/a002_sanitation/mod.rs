pub mod aggregate;
pub mod checklist;

pub use aggregate::{
    filter_permits, Inspection, Permit, Violation, INSPECTIONS, PENDING_INSPECTION, PERMITS,
    VIOLATIONS,
};
pub use checklist::{ChecklistItem, ChecklistSummary, InspectionChecklist, CHECKLIST_TEMPLATE};
