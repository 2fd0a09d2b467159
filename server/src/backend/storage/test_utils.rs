//! In-memory storage double for domain tests.
//!
//! `MockCareStorage` serves fixed collections, can be told to fail a given
//! resource, and counts calls so tests can assert what was (not) fetched.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::backend::domain::errors::CareResource;
use crate::backend::domain::models::{
    ChecksSchedule, Frequency, InjuryReport, MedicationSchedule, Pet, PetFood,
    VaccinationSchedule,
};
use crate::backend::storage::traits::CareRecordStorage;

#[derive(Default)]
pub struct MockCareStorage {
    pub pets: Vec<Pet>,
    pub frequencies: Vec<Frequency>,
    pub medication_schedules: Vec<MedicationSchedule>,
    pub vaccination_schedules: Vec<VaccinationSchedule>,
    pub checks_schedules: Vec<ChecksSchedule>,
    pub injury_reports: Vec<InjuryReport>,
    pub pet_foods: Vec<PetFood>,
    failing: HashSet<CareResource>,
    calls: Mutex<HashMap<CareResource, usize>>,
}

impl MockCareStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read of `resource` fail with a storage error
    pub fn failing_on(mut self, resource: CareResource) -> Self {
        self.failing.insert(resource);
        self
    }

    /// Number of reads issued for `resource`
    pub fn calls(&self, resource: CareResource) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&resource)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn serve<T: Clone>(&self, resource: CareResource, items: &[T]) -> Result<Vec<T>> {
        *self.calls.lock().unwrap().entry(resource).or_insert(0) += 1;
        if self.failing.contains(&resource) {
            return Err(anyhow!("simulated {} outage", resource));
        }
        Ok(items.to_vec())
    }
}

#[async_trait]
impl CareRecordStorage for MockCareStorage {
    async fn fetch_pet(&self, pet_id: i64) -> Result<Option<Pet>> {
        let pets = self.serve(CareResource::Pets, &self.pets)?;
        Ok(pets.into_iter().find(|pet| pet.id == pet_id))
    }

    async fn list_frequencies(&self) -> Result<Vec<Frequency>> {
        self.serve(CareResource::Frequencies, &self.frequencies)
    }

    async fn list_medication_schedules(&self) -> Result<Vec<MedicationSchedule>> {
        self.serve(CareResource::MedicationSchedules, &self.medication_schedules)
    }

    async fn list_vaccination_schedules(&self) -> Result<Vec<VaccinationSchedule>> {
        self.serve(CareResource::VaccinationSchedules, &self.vaccination_schedules)
    }

    async fn list_checks_schedules(&self) -> Result<Vec<ChecksSchedule>> {
        self.serve(CareResource::ChecksSchedules, &self.checks_schedules)
    }

    async fn list_injury_reports(&self) -> Result<Vec<InjuryReport>> {
        self.serve(CareResource::InjuryReports, &self.injury_reports)
    }

    async fn list_pet_foods(&self) -> Result<Vec<PetFood>> {
        self.serve(CareResource::PetFoods, &self.pet_foods)
    }
}
