//! Per-pet dashboard aggregation.
//!
//! This service pulls every care collection from storage, narrows them to a
//! single pet, applies the status rules and assembles one snapshot.
//!
//! ## Algorithm
//!
//! 1. Look up the pet; an unknown id fails with [`CareError::PetNotFound`]
//!    before any collection is read.
//! 2. Read the six collections concurrently and wait for all of them. Any
//!    failure aborts the whole call; there is no partial snapshot.
//! 3. Filter each collection to the pet. Medications and diet keep only
//!    active records, injuries only recent ones; vaccinations and checkups
//!    are kept in full.
//! 4. Vaccinations and injuries dated after `as_of` are logged as invalid
//!    records and not dropped. A future injury still falls outside the
//!    recency window.
//! 5. Count totals: active medications, recent injuries, and the full
//!    per-pet vaccination, checkup and diet collections.
//!
//! Everything after the join is pure, so the same records and `as_of` always
//! produce the same snapshot.

use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::Arc;

use super::care_dates::age_from_birthday;
use super::care_status::{
    is_active_diet, is_active_medication, is_recent_injury, preview, vaccination_due_dates,
};
use super::errors::{CareError, CareResource};
use super::models::{
    ChecksSchedule, DashboardTotals, Frequency, InjuryReport, MedicationSchedule, Pet,
    PetDashboardSnapshot, PetDashboardSummary, PetFood, PetRecord, VaccinationSchedule,
};
use crate::backend::storage::CareRecordStorage;

/// Unfiltered collections for every pet, as read from storage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareRecords {
    pub frequencies: Vec<Frequency>,
    pub medication_schedules: Vec<MedicationSchedule>,
    pub vaccination_schedules: Vec<VaccinationSchedule>,
    pub checks_schedules: Vec<ChecksSchedule>,
    pub injury_reports: Vec<InjuryReport>,
    pub pet_foods: Vec<PetFood>,
}

/// Service that builds pet dashboards from a record store
pub struct PetDashboardService<S: CareRecordStorage> {
    storage: Arc<S>,
}

impl<S: CareRecordStorage> Clone for PetDashboardService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: CareRecordStorage> PetDashboardService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Build the full dashboard for `pet_id`, evaluated on `as_of`
    pub async fn build_pet_dashboard(
        &self,
        pet_id: i64,
        as_of: NaiveDate,
    ) -> Result<PetDashboardSnapshot, CareError> {
        info!("Building dashboard for pet {} as of {}", pet_id, as_of);

        let pet = self
            .storage
            .fetch_pet(pet_id)
            .await
            .map_err(|e| CareError::fetch(CareResource::Pets, e))?
            .ok_or(CareError::PetNotFound(pet_id))?;

        let records = self.fetch_care_records().await?;
        let snapshot = assemble_snapshot(pet, records, as_of);

        info!(
            "Dashboard for pet {}: {} active medications, {} vaccinations, {} checkups, {} recent injuries, {} diet entries",
            pet_id,
            snapshot.totals.medications,
            snapshot.totals.vaccinations,
            snapshot.totals.checkups,
            snapshot.totals.injuries_recent,
            snapshot.totals.diet,
        );

        Ok(snapshot)
    }

    /// Build the dashboard and cut every section down to `limit` items
    pub async fn build_pet_dashboard_summary(
        &self,
        pet_id: i64,
        as_of: NaiveDate,
        limit: usize,
    ) -> Result<PetDashboardSummary, CareError> {
        let snapshot = self.build_pet_dashboard(pet_id, as_of).await?;
        Ok(summarize_snapshot(&snapshot, limit))
    }

    /// Read every care collection concurrently, failing if any read fails
    async fn fetch_care_records(&self) -> Result<CareRecords, CareError> {
        let storage = &self.storage;

        let (
            frequencies,
            medication_schedules,
            vaccination_schedules,
            checks_schedules,
            injury_reports,
            pet_foods,
        ) = tokio::try_join!(
            async {
                storage
                    .list_frequencies()
                    .await
                    .map_err(|e| CareError::fetch(CareResource::Frequencies, e))
            },
            async {
                storage
                    .list_medication_schedules()
                    .await
                    .map_err(|e| CareError::fetch(CareResource::MedicationSchedules, e))
            },
            async {
                storage
                    .list_vaccination_schedules()
                    .await
                    .map_err(|e| CareError::fetch(CareResource::VaccinationSchedules, e))
            },
            async {
                storage
                    .list_checks_schedules()
                    .await
                    .map_err(|e| CareError::fetch(CareResource::ChecksSchedules, e))
            },
            async {
                storage
                    .list_injury_reports()
                    .await
                    .map_err(|e| CareError::fetch(CareResource::InjuryReports, e))
            },
            async {
                storage
                    .list_pet_foods()
                    .await
                    .map_err(|e| CareError::fetch(CareResource::PetFoods, e))
            },
        )?;

        debug!(
            "Fetched {} frequencies, {} medication schedules, {} vaccination schedules, {} checks, {} injury reports, {} pet foods",
            frequencies.len(),
            medication_schedules.len(),
            vaccination_schedules.len(),
            checks_schedules.len(),
            injury_reports.len(),
            pet_foods.len(),
        );

        Ok(CareRecords {
            frequencies,
            medication_schedules,
            vaccination_schedules,
            checks_schedules,
            injury_reports,
            pet_foods,
        })
    }
}

/// Keep only the records that belong to `pet_id`, preserving order
fn for_pet<T: PetRecord>(records: Vec<T>, pet_id: i64) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| record.pet_id() == pet_id)
        .collect()
}

/// Log vaccinations and injuries dated after `as_of`; they stay in the snapshot
fn warn_future_dated(
    vaccinations: &[VaccinationSchedule],
    injuries: &[InjuryReport],
    as_of: NaiveDate,
) {
    let checks = vaccinations
        .iter()
        .map(|vaccination| vaccination.validate(as_of))
        .chain(injuries.iter().map(|report| report.validate(as_of)));

    for check in checks {
        if let Err(e) = check {
            warn!("{}", e);
        }
    }
}

/// Derive the dashboard snapshot from already-fetched records
pub fn assemble_snapshot(pet: Pet, records: CareRecords, as_of: NaiveDate) -> PetDashboardSnapshot {
    let pet_id = pet.id;

    let medications = for_pet(records.medication_schedules, pet_id);
    let vaccinations = for_pet(records.vaccination_schedules, pet_id);
    let checkups = for_pet(records.checks_schedules, pet_id);
    let injuries = for_pet(records.injury_reports, pet_id);
    let diet = for_pet(records.pet_foods, pet_id);

    warn_future_dated(&vaccinations, &injuries, as_of);

    let diet_total = diet.len();

    let active_medications: Vec<MedicationSchedule> = medications
        .into_iter()
        .filter(|schedule| is_active_medication(schedule, as_of))
        .collect();
    let active_diet: Vec<PetFood> = diet
        .into_iter()
        .filter(|food| is_active_diet(food, as_of))
        .collect();
    let recent_injuries: Vec<InjuryReport> = injuries
        .into_iter()
        .filter(|report| is_recent_injury(report, as_of))
        .collect();

    let upcoming_vaccinations = vaccination_due_dates(&vaccinations, &records.frequencies, as_of);

    let totals = DashboardTotals {
        medications: active_medications.len(),
        vaccinations: vaccinations.len(),
        checkups: checkups.len(),
        injuries_recent: recent_injuries.len(),
        diet: diet_total,
    };

    PetDashboardSnapshot {
        age: age_from_birthday(pet.birthday, as_of),
        pet,
        as_of,
        active_medications,
        vaccinations,
        checkups,
        recent_injuries,
        diet: active_diet,
        upcoming_vaccinations,
        totals,
    }
}

/// Cut each snapshot section down to its first `limit` items
pub fn summarize_snapshot(snapshot: &PetDashboardSnapshot, limit: usize) -> PetDashboardSummary {
    PetDashboardSummary {
        pet: snapshot.pet.clone(),
        as_of: snapshot.as_of,
        age: snapshot.age,
        active_medications: preview(&snapshot.active_medications, limit),
        vaccinations: preview(&snapshot.vaccinations, limit),
        checkups: preview(&snapshot.checkups, limit),
        recent_injuries: preview(&snapshot.recent_injuries, limit),
        diet: preview(&snapshot.diet, limit),
        upcoming_vaccinations: preview(&snapshot.upcoming_vaccinations, limit),
        totals: snapshot.totals,
    }
}
