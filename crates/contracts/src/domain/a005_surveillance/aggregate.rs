use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::mock::ymd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Rising => "Rising",
            Trend::Stable => "Stable",
            Trend::Falling => "Falling",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutbreakAlert {
    pub id: u32,
    pub disease: String,
    pub zone: String,
    pub cases: u32,
    pub trend: Trend,
    pub severity: String,
    #[serde(rename = "lastUpdate")]
    pub last_update: NaiveDate,
}

impl OutbreakAlert {
    pub fn summary(&self) -> String {
        format!("{} cases in {}", self.cases, self.zone)
    }
}

/// Headline counter of the surveillance week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStat {
    pub label: String,
    pub value: u32,
    /// Percent change against the previous week.
    pub change_pct: i32,
    pub icon: String,
}

impl WeeklyStat {
    pub fn change_label(&self) -> String {
        format!("{:+}%", self.change_pct)
    }

    pub fn is_increase(&self) -> bool {
        self.change_pct > 0
    }
}

pub static OUTBREAK_ALERTS: Lazy<Vec<OutbreakAlert>> = Lazy::new(|| {
    vec![
        OutbreakAlert {
            id: 1,
            disease: "Dengue".into(),
            zone: "Zone 2".into(),
            cases: 5,
            trend: Trend::Rising,
            severity: "Moderate".into(),
            last_update: ymd(2025, 12, 3),
        },
        OutbreakAlert {
            id: 2,
            disease: "Flu".into(),
            zone: "Zone 1, 3".into(),
            cases: 12,
            trend: Trend::Stable,
            severity: "Low".into(),
            last_update: ymd(2025, 12, 2),
        },
    ]
});

pub static WEEKLY_STATS: Lazy<Vec<WeeklyStat>> = Lazy::new(|| {
    [
        ("Total Cases", 48, 8, "activity"),
        ("Dengue Cases", 5, 25, "bug"),
        ("Respiratory", 23, -5, "thermometer"),
        ("Diarrhea Cases", 8, 12, "droplets"),
    ]
    .into_iter()
    .map(|(label, value, change_pct, icon)| WeeklyStat {
        label: label.into(),
        value,
        change_pct,
        icon: icon.into(),
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_label_is_signed() {
        assert_eq!(WEEKLY_STATS[0].change_label(), "+8%");
        assert_eq!(WEEKLY_STATS[2].change_label(), "-5%");
        assert!(!WEEKLY_STATS[2].is_increase());
    }

    #[test]
    fn test_alert_summary() {
        assert_eq!(OUTBREAK_ALERTS[0].summary(), "5 cases in Zone 2");
    }
}
