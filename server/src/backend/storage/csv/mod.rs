//! # CSV Storage Module
//!
//! File-based implementation of [`CareRecordStorage`](crate::backend::storage::CareRecordStorage).
//! Each resource lives in its own CSV file (`pets.csv`, `injury_reports.csv`,
//! ...) inside the configured data directory.

pub mod care_record_repository;
pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use care_record_repository::CsvCareRecordRepository;
pub use connection::CsvConnection;
