pub mod aggregate;

pub use aggregate::{OutbreakAlert, Trend, WeeklyStat, OUTBREAK_ALERTS, WEEKLY_STATS};
