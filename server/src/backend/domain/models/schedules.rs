//! server/src/backend/domain/models/schedules.rs
//!
//! The five per-pet record shapes read by the dashboard. All of them are
//! created and edited elsewhere; here they are immutable snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::backend::domain::errors::{CareError, CareResource};

/// Records that hang off a single pet
pub trait PetRecord {
    fn pet_id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub medication_id: i64,
    pub frequency_id: i64,
    pub date_started: NaiveDate,
    pub date_ended: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl MedicationSchedule {
    pub fn validate(&self) -> Result<(), CareError> {
        validate_window(
            CareResource::MedicationSchedules,
            self.id,
            self.date_started,
            self.date_ended,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub vaccine_id: i64,
    pub frequency_id: i64,
    pub date_given: NaiveDate,
    pub notes: Option<String>,
}

impl VaccinationSchedule {
    /// Vaccinations cannot be recorded ahead of time
    pub fn validate(&self, today: NaiveDate) -> Result<(), CareError> {
        validate_not_future(
            CareResource::VaccinationSchedules,
            self.id,
            self.date_given,
            today,
        )
    }
}

/// Periodic health check. `performed` is the only completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecksSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub check_id: i64,
    pub date_created: NaiveDate,
    pub notes: Option<String>,
    pub performed: bool,
}

/// Diet assignment; same active-window shape as [`MedicationSchedule`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetFood {
    pub id: i64,
    pub pet_id: i64,
    pub food_id: i64,
    pub frequency_id: i64,
    pub date_started: NaiveDate,
    pub date_ended: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl PetFood {
    pub fn validate(&self) -> Result<(), CareError> {
        validate_window(
            CareResource::PetFoods,
            self.id,
            self.date_started,
            self.date_ended,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryReport {
    pub id: i64,
    pub pet_id: i64,
    pub injury_id: i64,
    pub body_part: String,
    pub description: String,
    pub date: NaiveDate,
}

impl InjuryReport {
    pub fn validate(&self, today: NaiveDate) -> Result<(), CareError> {
        validate_not_future(CareResource::InjuryReports, self.id, self.date, today)
    }
}

macro_rules! impl_pet_record {
    ($($record:ty),+ $(,)?) => {
        $(
            impl PetRecord for $record {
                fn pet_id(&self) -> i64 {
                    self.pet_id
                }
            }
        )+
    };
}

impl_pet_record!(
    MedicationSchedule,
    VaccinationSchedule,
    ChecksSchedule,
    PetFood,
    InjuryReport,
);

fn validate_window(
    resource: CareResource,
    id: i64,
    started: NaiveDate,
    ended: Option<NaiveDate>,
) -> Result<(), CareError> {
    match ended {
        Some(ended) if ended < started => Err(CareError::InvalidRecord {
            resource,
            id,
            reason: format!("date_ended {} is before date_started {}", ended, started),
        }),
        _ => Ok(()),
    }
}

fn validate_not_future(
    resource: CareResource,
    id: i64,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), CareError> {
    if date > today {
        return Err(CareError::InvalidRecord {
            resource,
            id,
            reason: format!("date {} is in the future", date),
        });
    }
    Ok(())
}
