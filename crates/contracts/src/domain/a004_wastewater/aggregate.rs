use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::mock::ymd;
use crate::shared::status::StatusTone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Priority::Medium => StatusTone::Info,
            Priority::High => StatusTone::Warning,
            Priority::Critical => StatusTone::Danger,
        }
    }
}

/// Drainage or septic complaint filed by a resident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub complainant: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(rename = "dateSubmitted")]
    pub date_submitted: NaiveDate,
    pub priority: Priority,
    pub status: String,
    #[serde(rename = "assignedTo")]
    pub assigned_to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSchedule {
    pub id: String,
    #[serde(rename = "complaintId")]
    pub complaint_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(rename = "scheduledDate")]
    pub scheduled_date: NaiveDate,
    #[serde(rename = "timeSlot")]
    pub time_slot: String,
    #[serde(rename = "assignedTeam")]
    pub assigned_team: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    #[serde(rename = "complaintId")]
    pub complaint_id: String,
    #[serde(rename = "serviceType")]
    pub service_type: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "completionDate")]
    pub completion_date: Option<NaiveDate>,
    pub status: String,
    pub notes: String,
}

impl Complaint {
    pub fn is_open(&self) -> bool {
        self.status != "Resolved"
    }
}

pub static COMPLAINTS: Lazy<Vec<Complaint>> = Lazy::new(|| {
    [
        ("WC-2025-001", "Juan Dela Cruz", "Clogged Drainage", "Zone 1, Purok 3", ymd(2025, 11, 28), Priority::High, "In Progress"),
        ("WC-2025-002", "Maria Santos", "Septic Tank Overflow", "Zone 2, Purok 1", ymd(2025, 11, 25), Priority::Critical, "Scheduled"),
        ("WC-2025-003", "Ana Garcia", "Foul Odor", "Zone 3, Purok 2", ymd(2025, 11, 20), Priority::Medium, "Resolved"),
    ]
    .into_iter()
    .map(|(id, complainant, kind, location, date_submitted, priority, status)| Complaint {
        id: id.into(),
        complainant: complainant.into(),
        kind: kind.into(),
        location: location.into(),
        date_submitted,
        priority,
        status: status.into(),
        assigned_to: "Pedro Reyes (BSI)".into(),
    })
    .collect()
});

pub static SCHEDULES: Lazy<Vec<ServiceSchedule>> = Lazy::new(|| {
    vec![
        ServiceSchedule {
            id: "SCH-2025-001".into(),
            complaint_id: "WC-2025-002".into(),
            kind: "Septic Tank Pump-out".into(),
            location: "Zone 2, Purok 1".into(),
            scheduled_date: ymd(2025, 12, 5),
            time_slot: "9:00 AM - 11:00 AM".into(),
            assigned_team: "Sanitation Team A".into(),
            status: "Confirmed".into(),
        },
        ServiceSchedule {
            id: "SCH-2025-002".into(),
            complaint_id: "WC-2025-001".into(),
            kind: "Drainage Clearing".into(),
            location: "Zone 1, Purok 3".into(),
            scheduled_date: ymd(2025, 12, 6),
            time_slot: "1:00 PM - 3:00 PM".into(),
            assigned_team: "Sanitation Team B".into(),
            status: "Pending".into(),
        },
    ]
});

pub static SERVICE_TRACKING: Lazy<Vec<ServiceRecord>> = Lazy::new(|| {
    vec![ServiceRecord {
        id: "SRV-2025-001".into(),
        complaint_id: "WC-2025-003".into(),
        service_type: "Odor Treatment".into(),
        start_date: ymd(2025, 11, 22),
        completion_date: Some(ymd(2025, 11, 22)),
        status: "Completed".into(),
        notes: "Applied disinfectant and cleared minor blockage".into(),
    }]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_schedule_points_at_a_complaint() {
        for schedule in SCHEDULES.iter() {
            assert!(COMPLAINTS.iter().any(|c| c.id == schedule.complaint_id));
        }
    }

    #[test]
    fn test_open_complaints_by_priority() {
        let mut open: Vec<_> = COMPLAINTS.iter().filter(|c| c.is_open()).collect();
        open.sort_by(|a, b| b.priority.cmp(&a.priority));
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].priority, Priority::Critical);
        assert_eq!(open[0].priority.tone(), StatusTone::Danger);
    }
}
