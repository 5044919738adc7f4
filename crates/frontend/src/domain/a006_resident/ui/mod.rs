//! Resident self-service pages

mod complaints;
mod family_health;
mod home;
mod permits;
mod qr_code;
mod request;

pub use complaints::MyComplaintsPage;
pub use family_health::FamilyHealthPage;
pub use home::ResidentHomePage;
pub use permits::MyPermitsPage;
pub use qr_code::MyQrCodePage;
pub use request::FileRequestPage;
