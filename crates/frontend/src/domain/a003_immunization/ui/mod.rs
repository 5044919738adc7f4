mod page;
mod timbang;

pub use page::ImmunizationPage;
pub use timbang::TimbangScheduler;
