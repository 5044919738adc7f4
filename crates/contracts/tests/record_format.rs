//! JSON shape of the records the pages render, matching the field names of
//! the portal's existing data files.

use contracts::domain::a001_patient::PATIENTS;
use contracts::domain::a002_sanitation::PERMITS;
use contracts::domain::a003_immunization::TimbangSchedule;
use contracts::domain::a006_resident::RequestType;
use contracts::system::access::PageKey;
use contracts::system::auth::Role;
use serde_json::json;

#[test]
fn patient_uses_camel_case_visit_date() {
    let value = serde_json::to_value(&PATIENTS[0]).unwrap();
    assert_eq!(value["lastVisit"], json!("2025-12-01"));
    assert_eq!(value["gender"], json!("Male"));
    assert!(value.get("last_visit").is_none());
}

#[test]
fn permit_kind_is_serialized_as_type() {
    let value = serde_json::to_value(&PERMITS[0]).unwrap();
    assert_eq!(value["type"], json!("Food Establishment"));
    assert_eq!(value["businessName"], json!("Dela Cruz Sari-Sari Store"));
}

#[test]
fn enums_use_their_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Sysadmin).unwrap(), "\"sysadmin\"");
    assert_eq!(serde_json::to_string(&PageKey::ResidentQrCode).unwrap(), "\"resident-qr-code\"");
    assert_eq!(serde_json::to_string(&RequestType::Septic).unwrap(), "\"septic\"");

    let role: Role = serde_json::from_str("\"bhw\"").unwrap();
    assert_eq!(role, Role::Bhw);
}

#[test]
fn timbang_slot_round_trips() {
    let schedule = TimbangSchedule::default();
    let text = serde_json::to_string(&schedule).unwrap();
    assert!(text.contains("\"childrenDue\":12"));
    assert!(text.contains("\"status\":\"confirmed\""));

    let back: TimbangSchedule = serde_json::from_str(&text).unwrap();
    assert_eq!(back, schedule);
}
