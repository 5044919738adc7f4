pub mod aggregate;
pub mod request;

pub use aggregate::{
    portal_summary, FamilyMember, MyComplaint, MyPermit, MyVaccination, PortalSummary,
    VisitRecord, CONSULTATION_HISTORY, FAMILY_HEALTH, MY_COMPLAINTS, MY_PERMITS, MY_VACCINATIONS,
};
pub use request::{RequestType, ServiceRequestDto, SubmittedRequest};
