use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::mock::{date, matches_query, ymd};

/// Permit status that offers the inspection checklist.
pub const PENDING_INSPECTION: &str = "Pending Inspection";

/// Sanitation permit application of a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permit {
    pub id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    pub owner: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "dateApplied")]
    pub date_applied: NaiveDate,
    pub status: String,
    #[serde(rename = "expiryDate")]
    pub expiry_date: Option<NaiveDate>,
}

impl Permit {
    pub fn awaits_inspection(&self) -> bool {
        self.status == PENDING_INSPECTION
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(rename = "inspectionDate")]
    pub inspection_date: NaiveDate,
    pub inspector: String,
    pub result: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(rename = "violationType")]
    pub violation_type: String,
    #[serde(rename = "dateIssued")]
    pub date_issued: NaiveDate,
    pub deadline: NaiveDate,
    pub status: String,
    /// Whole pesos.
    #[serde(rename = "fineAmount")]
    pub fine_amount: u32,
}

impl Violation {
    pub fn fine_label(&self) -> String {
        format!("₱{}", self.fine_amount)
    }
}

/// Permits whose business name, owner or id contains the query.
pub fn filter_permits<'a>(permits: &'a [Permit], query: &str) -> Vec<&'a Permit> {
    permits
        .iter()
        .filter(|p| matches_query(query, &[&p.business_name, &p.owner, &p.id]))
        .collect()
}

pub static PERMITS: Lazy<Vec<Permit>> = Lazy::new(|| {
    vec![
        Permit {
            id: "SP-2025-001".into(),
            business_name: "Dela Cruz Sari-Sari Store".into(),
            owner: "Juan Dela Cruz".into(),
            address: "Zone 1, Purok 3".into(),
            kind: "Food Establishment".into(),
            date_applied: ymd(2025, 11, 1),
            status: "Approved".into(),
            expiry_date: date(2026, 1, 15),
        },
        Permit {
            id: "SP-2025-002".into(),
            business_name: "Santos Carinderia".into(),
            owner: "Maria Santos".into(),
            address: "Zone 2, Purok 1".into(),
            kind: "Food Establishment".into(),
            date_applied: ymd(2025, 11, 28),
            status: PENDING_INSPECTION.into(),
            expiry_date: None,
        },
        Permit {
            id: "SP-2025-003".into(),
            business_name: "Reyes Bakery".into(),
            owner: "Pedro Reyes".into(),
            address: "Zone 1, Purok 5".into(),
            kind: "Food Establishment".into(),
            date_applied: ymd(2025, 11, 15),
            status: "Under Review".into(),
            expiry_date: None,
        },
    ]
});

pub static INSPECTIONS: Lazy<Vec<Inspection>> = Lazy::new(|| {
    vec![
        Inspection {
            id: "INS-2025-001".into(),
            business_name: "Dela Cruz Sari-Sari Store".into(),
            inspection_date: ymd(2025, 11, 20),
            inspector: "Pedro Reyes (BSI)".into(),
            result: "Passed".into(),
            notes: "All sanitation requirements met".into(),
        },
        Inspection {
            id: "INS-2025-002".into(),
            business_name: "Garcia Hardware".into(),
            inspection_date: ymd(2025, 11, 25),
            inspector: "Pedro Reyes (BSI)".into(),
            result: "Failed".into(),
            notes: "Waste disposal not compliant".into(),
        },
    ]
});

pub static VIOLATIONS: Lazy<Vec<Violation>> = Lazy::new(|| {
    vec![Violation {
        id: "VIO-2025-001".into(),
        business_name: "Garcia Hardware".into(),
        violation_type: "Improper Waste Disposal".into(),
        date_issued: ymd(2025, 11, 25),
        deadline: ymd(2025, 12, 10),
        status: "Open".into(),
        fine_amount: 500,
    }]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_permit_offers_inspection() {
        let pending: Vec<_> = PERMITS.iter().filter(|p| p.awaits_inspection()).collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].business_name, "Santos Carinderia");
    }

    #[test]
    fn test_filter_permits_by_owner() {
        let found = filter_permits(&PERMITS, "reyes");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "SP-2025-003");
    }

    #[test]
    fn test_fine_label() {
        assert_eq!(VIOLATIONS[0].fine_label(), "₱500");
    }
}
