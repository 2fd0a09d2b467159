//! # Storage Traits
//!
//! This module defines the storage abstraction the dashboard reads through,
//! so the domain layer works with any record store (CSV files, a database,
//! an in-memory fake) without modification.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::{
    ChecksSchedule, Frequency, InjuryReport, MedicationSchedule, Pet, PetFood,
    VaccinationSchedule,
};

/// Read-only access to pets and their care records
///
/// The `list_*` methods return the full collection for every pet; narrowing
/// to one pet is the caller's job. Collections come back most recent first
/// (descending id), and callers rely on that order for display.
#[async_trait]
pub trait CareRecordStorage: Send + Sync {
    /// Retrieve a specific pet by ID
    async fn fetch_pet(&self, pet_id: i64) -> Result<Option<Pet>>;

    async fn list_frequencies(&self) -> Result<Vec<Frequency>>;

    async fn list_medication_schedules(&self) -> Result<Vec<MedicationSchedule>>;

    async fn list_vaccination_schedules(&self) -> Result<Vec<VaccinationSchedule>>;

    async fn list_checks_schedules(&self) -> Result<Vec<ChecksSchedule>>;

    async fn list_injury_reports(&self) -> Result<Vec<InjuryReport>>;

    async fn list_pet_foods(&self) -> Result<Vec<PetFood>>;
}
