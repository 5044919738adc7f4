mod view;

pub use view::ReportGenerator;
