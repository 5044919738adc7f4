//! Staff dashboard: headline counters, activity feed, schedules, health
//! alerts and the barangay health index gauge.

pub mod dto;
pub mod health_index;

pub use dto::{
    Activity, HealthAlert, StatCardData, SummaryRow, UpcomingSchedule, DISEASE_DISTRIBUTION,
    HEALTH_ALERTS, MONTHLY_SUMMARY, RECENT_ACTIVITIES, STAT_CARDS, UPCOMING_SCHEDULES,
    WEEKLY_ACTIVITY,
};
pub use health_index::{HealthBand, HealthIndex, ANIMATION_MS, ANIMATION_STEPS};
