//! Type-safe wrappers and enums for injury tracker data.

pub mod fields;
pub mod ids;

pub use fields::{StatField, TeammateSelector};
pub use ids::InjuryId;
