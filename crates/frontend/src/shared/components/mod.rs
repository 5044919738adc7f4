pub mod bar_chart;
pub mod field_error;
pub mod page_header;
pub mod row_actions;
pub mod stat_card;
pub mod status_badge;

pub use bar_chart::BarChart;
pub use field_error::FieldError;
pub use page_header::PageHeader;
pub use row_actions::RowActions;
pub use stat_card::StatCard;
pub use status_badge::{StatusBadge, ToneBadge};
