pub mod details;
mod page;

pub use page::HealthCenterPage;
