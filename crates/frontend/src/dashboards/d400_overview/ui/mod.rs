mod dashboard;
mod health_index_meter;

pub use dashboard::OverviewDashboard;
pub use health_index_meter::HealthIndexMeter;
