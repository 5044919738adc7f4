pub mod context;
pub mod delay;
pub mod guard;
