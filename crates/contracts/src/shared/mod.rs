pub mod cancel;
pub mod config;
pub mod delay;
pub mod error;
pub mod mock;
pub mod status;
pub mod view_model;
