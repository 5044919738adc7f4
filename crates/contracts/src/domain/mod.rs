//! Records each portal page works with, their mock datasets and form
//! validation. Modules are numbered the way pages appear in the staff menu,
//! resident self-service last.

pub mod a001_patient;
pub mod a002_sanitation;
pub mod a003_immunization;
pub mod a004_wastewater;
pub mod a005_surveillance;
pub mod a006_resident;
