//! # Storage Module
//!
//! Read access to the shelter's record store.
//!
//! The domain depends only on the [`CareRecordStorage`] trait; the CSV
//! implementation in [`csv`] is what the server wires in. Swapping in a
//! database-backed store means implementing the same trait.
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Read Only**: The dashboard never writes; record maintenance happens elsewhere
//! - **Unfiltered Collections**: Repositories return every pet's records; per-pet
//!   filtering happens in the domain
//! - **Testability**: An in-memory double backs the domain tests

pub mod csv;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use self::csv::{CsvCareRecordRepository, CsvConnection};
pub use traits::CareRecordStorage;
