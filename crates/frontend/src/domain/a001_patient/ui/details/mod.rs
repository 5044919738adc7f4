//! "Add New Patient" form
//!
//! MVVM split:
//! - view_model.rs: form state, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::NewPatientForm;
pub use view_model::NewPatientViewModel;
