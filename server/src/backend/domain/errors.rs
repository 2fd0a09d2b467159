//! Error taxonomy for the care-schedule engine.
//!
//! Storage adapters keep returning `anyhow::Result`; the domain wraps those
//! failures in [`CareError::Fetch`] without interpreting them, so callers can
//! tell "bad input" and "unknown pet" apart from "the store is unavailable".

use std::fmt;
use thiserror::Error;

/// Collections the dashboard reads from the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareResource {
    Pets,
    Frequencies,
    MedicationSchedules,
    VaccinationSchedules,
    ChecksSchedules,
    InjuryReports,
    PetFoods,
}

impl CareResource {
    /// Resource name as used by the record store
    pub fn as_str(&self) -> &'static str {
        match self {
            CareResource::Pets => "pets",
            CareResource::Frequencies => "frequencies",
            CareResource::MedicationSchedules => "medication_schedules",
            CareResource::VaccinationSchedules => "vaccination_schedules",
            CareResource::ChecksSchedules => "checks_schedules",
            CareResource::InjuryReports => "injury_reports",
            CareResource::PetFoods => "pet_foods",
        }
    }
}

impl fmt::Display for CareResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CareError {
    /// Malformed or impossible date input; never replaced by "now"
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("pet not found: {0}")]
    PetNotFound(i64),

    /// Failure reported by the record store, passed through untouched
    #[error("failed to fetch {resource}")]
    Fetch {
        resource: CareResource,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid {resource} record {id}: {reason}")]
    InvalidRecord {
        resource: CareResource,
        id: i64,
        reason: String,
    },
}

impl CareError {
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CareError::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn fetch(resource: CareResource, source: anyhow::Error) -> Self {
        CareError::Fetch { resource, source }
    }
}
