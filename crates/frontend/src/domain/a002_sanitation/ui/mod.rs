mod checklist;
mod page;

pub use checklist::InspectionChecklistForm;
pub use page::SanitationPage;
