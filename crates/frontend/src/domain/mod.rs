//! One module per portal area, staff pages first.

pub mod a001_patient;
pub mod a002_sanitation;
pub mod a003_immunization;
pub mod a004_wastewater;
pub mod a005_surveillance;
pub mod a006_resident;
