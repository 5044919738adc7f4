mod page;

pub use page::SurveillancePage;
