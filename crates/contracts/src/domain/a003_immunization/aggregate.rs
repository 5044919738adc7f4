use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::mock::{date, series, ymd, SeriesPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineRecord {
    pub id: String,
    #[serde(rename = "childName")]
    pub child_name: String,
    pub age: String,
    pub parent: String,
    pub vaccine: String,
    #[serde(rename = "dateGiven")]
    pub date_given: NaiveDate,
    #[serde(rename = "nextDose")]
    pub next_dose: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub id: String,
    #[serde(rename = "childName")]
    pub child_name: String,
    pub age: String,
    pub weight_kg: f32,
    pub height_cm: u32,
    pub status: String,
    #[serde(rename = "lastAssessment")]
    pub last_assessment: NaiveDate,
}

/// Scheduled SMS to a parent about an upcoming dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsReminder {
    pub id: u32,
    pub recipient: String,
    /// Masked mobile number.
    pub phone: String,
    pub message: String,
    #[serde(rename = "scheduledDate")]
    pub scheduled_date: NaiveDate,
    pub status: String,
}

pub static VACCINE_RECORDS: Lazy<Vec<VaccineRecord>> = Lazy::new(|| {
    vec![
        vaccine("VAX-2025-001", "Pedro Dela Cruz Jr.", "2 years", "Juan Dela Cruz", "Measles", ymd(2025, 10, 15), date(2026, 10, 15), "Completed"),
        vaccine("VAX-2025-002", "Maria Santos Jr.", "6 months", "Maria Santos", "BCG", ymd(2025, 6, 1), None, "Completed"),
        vaccine("VAX-2025-003", "Ana Reyes", "1 year", "Pedro Reyes", "Polio", ymd(2025, 9, 20), date(2025, 12, 20), "Due Soon"),
    ]
});

pub static NUTRITION_RECORDS: Lazy<Vec<NutritionRecord>> = Lazy::new(|| {
    vec![
        nutrition("NUT-2025-001", "Pedro Dela Cruz Jr.", "2 years", 12.5, 85, "Normal", ymd(2025, 11, 15)),
        nutrition("NUT-2025-002", "Maria Santos Jr.", "6 months", 7.2, 65, "Normal", ymd(2025, 11, 20)),
        nutrition("NUT-2025-003", "Jose Garcia", "3 years", 10.0, 88, "Underweight", ymd(2025, 11, 10)),
    ]
});

pub static SMS_REMINDERS: Lazy<Vec<SmsReminder>> = Lazy::new(|| {
    vec![
        SmsReminder {
            id: 1,
            recipient: "Juan Dela Cruz".into(),
            phone: "0917****123".into(),
            message: "Reminder: Pedro's Measles booster is due on Oct 15, 2026".into(),
            scheduled_date: ymd(2026, 10, 1),
            status: "Scheduled".into(),
        },
        SmsReminder {
            id: 2,
            recipient: "Pedro Reyes".into(),
            phone: "0918****456".into(),
            message: "Reminder: Ana's Polio vaccine is due on Dec 20, 2025".into(),
            scheduled_date: ymd(2025, 12, 15),
            status: "Scheduled".into(),
        },
    ]
});

pub static VACCINATION_TREND: Lazy<Vec<SeriesPoint>> = Lazy::new(|| {
    series(&[("Jan", 42), ("Feb", 38), ("Mar", 55), ("Apr", 47), ("May", 52), ("Jun", 48)])
});

pub static NUTRITION_STATUS: Lazy<Vec<SeriesPoint>> =
    Lazy::new(|| series(&[("Normal", 85), ("Underweight", 10), ("Overweight", 5)]));

#[allow(clippy::too_many_arguments)]
fn vaccine(
    id: &str,
    child_name: &str,
    age: &str,
    parent: &str,
    vaccine: &str,
    date_given: NaiveDate,
    next_dose: Option<NaiveDate>,
    status: &str,
) -> VaccineRecord {
    VaccineRecord {
        id: id.to_string(),
        child_name: child_name.to_string(),
        age: age.to_string(),
        parent: parent.to_string(),
        vaccine: vaccine.to_string(),
        date_given,
        next_dose,
        status: status.to_string(),
    }
}

fn nutrition(
    id: &str,
    child_name: &str,
    age: &str,
    weight_kg: f32,
    height_cm: u32,
    status: &str,
    last_assessment: NaiveDate,
) -> NutritionRecord {
    NutritionRecord {
        id: id.to_string(),
        child_name: child_name.to_string(),
        age: age.to_string(),
        weight_kg,
        height_cm,
        status: status.to_string(),
        last_assessment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_without_next_dose() {
        let open: Vec<_> = VACCINE_RECORDS.iter().filter(|r| r.next_dose.is_none()).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].vaccine, "BCG");
    }

    #[test]
    fn test_nutrition_status_shares_sum_to_hundred() {
        assert_eq!(NUTRITION_STATUS.iter().map(|p| p.value).sum::<u32>(), 100);
    }
}
