//! Domain Layer
//!
//! Business entities, value objects, and the repository/notifier seams.
//! No infrastructure dependencies.

pub mod entity;
pub mod repository;
pub mod value_object;
