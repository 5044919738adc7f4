use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::mock::{series, SeriesPoint};
use crate::shared::status::StatusTone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCardData {
    pub title: String,
    pub value: String,
    pub change: String,
    /// `None` renders the change line in the neutral colour.
    pub positive: Option<bool>,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub action: String,
    pub user: String,
    pub time: String,
    /// Icon key of the feed entry.
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingSchedule {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub title: String,
    pub badge: String,
    pub tone: StatusTone,
    pub message: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
    pub trend: String,
}

impl SummaryRow {
    pub fn is_up(&self) -> bool {
        self.trend.starts_with('+')
    }
}

pub static STAT_CARDS: Lazy<Vec<StatCardData>> = Lazy::new(|| {
    [
        ("Total Patients", "1,284", "+12% from last month", Some(true), "users"),
        ("Consultations Today", "48", "+5 from yesterday", Some(true), "stethoscope"),
        ("Pending Permits", "23", "8 require inspection", None, "clipboard-check"),
        ("Vaccinations (Dec)", "156", "Target: 200", None, "syringe"),
    ]
    .into_iter()
    .map(|(title, value, change, positive, icon)| StatCardData {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        positive,
        icon: icon.into(),
    })
    .collect()
});

pub static RECENT_ACTIVITIES: Lazy<Vec<Activity>> = Lazy::new(|| {
    [
        (1, "New patient consultation", "Maria Santos", "5 min ago", "health"),
        (2, "Sanitation permit approved", "Ana Garcia", "15 min ago", "permit"),
        (3, "Immunization record added", "Maria Santos", "1 hour ago", "vaccine"),
        (4, "Outbreak alert created", "System", "2 hours ago", "alert"),
        (5, "Wastewater complaint filed", "Juan Dela Cruz", "3 hours ago", "complaint"),
    ]
    .into_iter()
    .map(|(id, action, user, time, kind)| Activity {
        id,
        action: action.into(),
        user: user.into(),
        time: time.into(),
        kind: kind.into(),
    })
    .collect()
});

pub static UPCOMING_SCHEDULES: Lazy<Vec<UpcomingSchedule>> = Lazy::new(|| {
    [
        (1, "Vaccination Drive", "Dec 5, 2025", "Health Center"),
        (2, "Sanitation Inspection", "Dec 6, 2025", "Zone 1-3"),
        (3, "Nutrition Monitoring", "Dec 7, 2025", "Day Care Center"),
    ]
    .into_iter()
    .map(|(id, title, date, location)| UpcomingSchedule {
        id,
        title: title.into(),
        date: date.into(),
        location: location.into(),
    })
    .collect()
});

pub static HEALTH_ALERTS: Lazy<Vec<HealthAlert>> = Lazy::new(|| {
    vec![
        HealthAlert {
            title: "Dengue Case Increase".into(),
            badge: "Active".into(),
            tone: StatusTone::Warning,
            message: "5 new dengue cases reported in Zone 2. Enhanced surveillance recommended."
                .into(),
            footer: "Reported: Dec 3, 2025".into(),
        },
        HealthAlert {
            title: "Measles Vaccination Drive".into(),
            badge: "Upcoming".into(),
            tone: StatusTone::Info,
            message: "Mass vaccination scheduled for children ages 6-59 months.".into(),
            footer: "Date: Dec 5, 2025".into(),
        },
    ]
});

pub static MONTHLY_SUMMARY: Lazy<Vec<SummaryRow>> = Lazy::new(|| {
    [
        ("Total Consultations", "342", "+8%"),
        ("Permits Issued", "28", "+15%"),
        ("Vaccinations", "156", "-5%"),
        ("Complaints Resolved", "12", "+20%"),
    ]
    .into_iter()
    .map(|(label, value, trend)| SummaryRow {
        label: label.into(),
        value: value.into(),
        trend: trend.into(),
    })
    .collect()
});

/// Consultations per week of the month.
pub static WEEKLY_ACTIVITY: Lazy<Vec<SeriesPoint>> =
    Lazy::new(|| series(&[("Week 1", 85), ("Week 2", 92), ("Week 3", 78), ("Week 4", 87)]));

pub static DISEASE_DISTRIBUTION: Lazy<Vec<SeriesPoint>> = Lazy::new(|| {
    series(&[
        ("Respiratory", 30),
        ("Hypertension", 20),
        ("Dengue", 18),
        ("Influenza", 17),
        ("Leptospirosis", 15),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_trend_direction() {
        let down: Vec<_> = MONTHLY_SUMMARY.iter().filter(|r| !r.is_up()).collect();
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].label, "Vaccinations");
    }

    #[test]
    fn test_four_stat_cards() {
        assert_eq!(STAT_CARDS.len(), 4);
        assert_eq!(STAT_CARDS.iter().filter(|c| c.positive.is_none()).count(), 2);
    }
}
