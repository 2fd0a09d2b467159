//! Domain models for pets and their care schedules.

pub mod dashboard;
pub mod frequency;
pub mod pet;
pub mod schedules;

pub use dashboard::*;
pub use frequency::Frequency;
pub use pet::Pet;
pub use schedules::*;
