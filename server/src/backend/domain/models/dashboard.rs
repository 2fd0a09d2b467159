//! Derived, never-persisted views produced by the dashboard aggregator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pet::Pet;
use super::schedules::{
    ChecksSchedule, InjuryReport, MedicationSchedule, PetFood, VaccinationSchedule,
};

/// Whole years plus remainder months (0..=11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetAge {
    pub years: u32,
    pub months: u32,
}

/// Next expected vaccination, estimated from the last dose and its frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationDue {
    pub vaccination_id: i64,
    pub vaccine_id: i64,
    pub frequency_name: String,
    pub due_on: NaiveDate,
    pub overdue: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTotals {
    pub medications: usize,
    pub vaccinations: usize,
    pub checkups: usize,
    pub injuries_recent: usize,
    pub diet: usize,
}

/// Everything the dashboard shows for one pet at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDashboardSnapshot {
    pub pet: Pet,
    pub as_of: NaiveDate,
    pub age: Option<PetAge>,
    pub active_medications: Vec<MedicationSchedule>,
    pub vaccinations: Vec<VaccinationSchedule>,
    pub checkups: Vec<ChecksSchedule>,
    pub recent_injuries: Vec<InjuryReport>,
    pub diet: Vec<PetFood>,
    pub upcoming_vaccinations: Vec<VaccinationDue>,
    pub totals: DashboardTotals,
}

/// Leading slice of a list plus the count that did not fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPreview<T> {
    pub items: Vec<T>,
    pub remaining: usize,
}

/// Snapshot with every section cut down to a preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDashboardSummary {
    pub pet: Pet,
    pub as_of: NaiveDate,
    pub age: Option<PetAge>,
    pub active_medications: ListPreview<MedicationSchedule>,
    pub vaccinations: ListPreview<VaccinationSchedule>,
    pub checkups: ListPreview<ChecksSchedule>,
    pub recent_injuries: ListPreview<InjuryReport>,
    pub diet: ListPreview<PetFood>,
    pub upcoming_vaccinations: ListPreview<VaccinationDue>,
    pub totals: DashboardTotals,
}
