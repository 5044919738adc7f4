use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::mock::{date, ymd};

// ============================================================================
// Records shown to the signed-in resident (the demo household)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: u32,
    pub name: String,
    pub relationship: String,
    pub age: u32,
    #[serde(rename = "bloodType")]
    pub blood_type: String,
    pub conditions: String,
    #[serde(rename = "lastCheckup")]
    pub last_checkup: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub id: String,
    pub patient: String,
    pub date: NaiveDate,
    pub complaint: String,
    pub diagnosis: String,
    pub medicine: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyPermit {
    pub id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "dateApplied")]
    pub date_applied: NaiveDate,
    #[serde(rename = "dateApproved")]
    pub date_approved: Option<NaiveDate>,
    #[serde(rename = "expiryDate")]
    pub expiry_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyComplaint {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "dateSubmitted")]
    pub date_submitted: NaiveDate,
    #[serde(rename = "lastUpdate")]
    pub last_update: NaiveDate,
    pub status: String,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyVaccination {
    pub id: u32,
    pub member: String,
    pub vaccine: String,
    pub date: NaiveDate,
    pub status: String,
}

/// Counters on the resident home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalSummary {
    pub family_members: usize,
    pub active_permits: usize,
    pub open_complaints: usize,
    pub vaccinations: usize,
}

pub fn portal_summary() -> PortalSummary {
    PortalSummary {
        family_members: FAMILY_HEALTH.len(),
        active_permits: MY_PERMITS.iter().filter(|p| p.status == "Approved").count(),
        open_complaints: MY_COMPLAINTS.iter().filter(|c| c.status != "Resolved").count(),
        vaccinations: MY_VACCINATIONS.len(),
    }
}

// ============================================================================
// Mock data
// ============================================================================

pub static FAMILY_HEALTH: Lazy<Vec<FamilyMember>> = Lazy::new(|| {
    [
        (1, "Juan Dela Cruz", "Self", 45, "O+", "None", ymd(2025, 12, 1), "Healthy"),
        (2, "Maria Dela Cruz", "Spouse", 42, "A+", "Mild Hypertension", ymd(2025, 11, 15), "Under Monitoring"),
        (3, "Pedro Dela Cruz Jr.", "Son", 2, "O+", "None", ymd(2025, 11, 20), "Healthy"),
    ]
    .into_iter()
    .map(
        |(id, name, relationship, age, blood_type, conditions, last_checkup, status)| FamilyMember {
            id,
            name: name.into(),
            relationship: relationship.into(),
            age,
            blood_type: blood_type.into(),
            conditions: conditions.into(),
            last_checkup,
            status: status.into(),
        },
    )
    .collect()
});

pub static CONSULTATION_HISTORY: Lazy<Vec<VisitRecord>> = Lazy::new(|| {
    vec![
        VisitRecord {
            id: "C001".into(),
            patient: "Juan Dela Cruz".into(),
            date: ymd(2025, 12, 1),
            complaint: "Headache, Fever".into(),
            diagnosis: "Flu".into(),
            medicine: "Paracetamol 500mg".into(),
        },
        VisitRecord {
            id: "C002".into(),
            patient: "Maria Dela Cruz".into(),
            date: ymd(2025, 11, 15),
            complaint: "Dizziness".into(),
            diagnosis: "High Blood Pressure".into(),
            medicine: "Amlodipine 5mg".into(),
        },
    ]
});

pub static MY_PERMITS: Lazy<Vec<MyPermit>> = Lazy::new(|| {
    vec![
        MyPermit {
            id: "SP-2025-001".into(),
            business_name: "Dela Cruz Sari-Sari Store".into(),
            kind: "Sanitation Permit".into(),
            date_applied: ymd(2025, 11, 1),
            date_approved: date(2025, 11, 15),
            expiry_date: date(2026, 1, 15),
            status: "Approved".into(),
        },
        MyPermit {
            id: "SP-2025-002".into(),
            business_name: "Dela Cruz Carinderia".into(),
            kind: "Sanitation Permit".into(),
            date_applied: ymd(2025, 11, 28),
            date_approved: None,
            expiry_date: None,
            status: "Pending".into(),
        },
    ]
});

pub static MY_COMPLAINTS: Lazy<Vec<MyComplaint>> = Lazy::new(|| {
    vec![
        MyComplaint {
            id: "WC-2025-012".into(),
            kind: "Wastewater".into(),
            description: "Clogged drainage in front of house causing flooding".into(),
            location: "Zone 1, Purok 3".into(),
            date_submitted: ymd(2025, 11, 28),
            last_update: ymd(2025, 12, 2),
            status: "In Progress".into(),
            remarks: "Scheduled for clearing on Dec 6".into(),
        },
        MyComplaint {
            id: "WC-2025-008".into(),
            kind: "Sanitation".into(),
            description: "Uncollected garbage in the corner lot".into(),
            location: "Zone 1, Purok 3".into(),
            date_submitted: ymd(2025, 11, 15),
            last_update: ymd(2025, 11, 18),
            status: "Resolved".into(),
            remarks: "Garbage collected. Area cleared.".into(),
        },
    ]
});

pub static MY_VACCINATIONS: Lazy<Vec<MyVaccination>> = Lazy::new(|| {
    vec![
        MyVaccination {
            id: 1,
            member: "Pedro Dela Cruz".into(),
            vaccine: "Measles".into(),
            date: ymd(2025, 10, 15),
            status: "Completed".into(),
        },
        MyVaccination {
            id: 2,
            member: "Pedro Dela Cruz".into(),
            vaccine: "Polio".into(),
            date: ymd(2025, 9, 20),
            status: "Completed".into(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_summary_counts() {
        assert_eq!(
            portal_summary(),
            PortalSummary {
                family_members: 3,
                active_permits: 1,
                open_complaints: 1,
                vaccinations: 2,
            }
        );
    }
}
