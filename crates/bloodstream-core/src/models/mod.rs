//! Domain models for the BloodStream portal.

mod blood_group;
mod patient;

pub use blood_group::*;
pub use patient::*;
