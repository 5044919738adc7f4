//! Shared domain and access core of the barangay health & sanitation portal.
//!
//! Everything here is plain Rust with no browser dependency: roles and
//! sessions, the access policy table, route resolution, page view-models,
//! the simulated service ports and the mock datasets the pages render.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
