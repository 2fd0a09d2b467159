//! # CSV Care Record Repository
//!
//! Reads pets and their care records from one CSV file per resource in the
//! data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── pet_care.yaml                 (optional server config)
//! ├── pets.csv
//! ├── frequencies.csv
//! ├── medication_schedules.csv
//! ├── vaccination_schedules.csv
//! ├── checks_schedules.csv
//! ├── pet_foods.csv
//! └── injury_reports.csv
//! ```
//!
//! ## CSV Format
//!
//! Each file has a header row naming the record fields. Optional values are
//! left empty and dates are `YYYY-MM-DD` (timestamps are accepted too):
//! ```csv
//! id,pet_id,medication_id,frequency_id,date_started,date_ended,notes
//! 12,3,7,1,2025-03-01,,"Half a tablet with food"
//! 11,3,4,2,2025-01-01,2025-02-01,
//! ```
//!
//! A missing file is read as an empty collection. A row that cannot be parsed
//! fails the whole read; rows that parse but break a record invariant are
//! logged and kept, so the dashboard shows what is actually stored.

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use super::connection::CsvConnection;
use crate::backend::domain::care_dates::parse_care_date;
use crate::backend::domain::errors::CareResource;
use crate::backend::domain::models::{
    ChecksSchedule, Frequency, InjuryReport, MedicationSchedule, Pet, PetFood,
    VaccinationSchedule,
};
use crate::backend::storage::traits::CareRecordStorage;

#[derive(Debug, Deserialize)]
struct PetRecord {
    id: i64,
    name: String,
    nickname: Option<String>,
    pet_type: String,
    breed: String,
    gender: Option<String>,
    birthday: String,
    date_admitted: String,
    picture: Option<String>,
    notes: Option<String>,
    adopted: Option<bool>,
}

impl TryFrom<PetRecord> for Pet {
    type Error = anyhow::Error;

    fn try_from(record: PetRecord) -> Result<Self> {
        Ok(Pet {
            id: record.id,
            name: record.name,
            nickname: record.nickname,
            pet_type: record.pet_type,
            breed: record.breed,
            gender: record.gender,
            birthday: parse_care_date(&record.birthday)?,
            date_admitted: parse_care_date(&record.date_admitted)?,
            picture: record.picture,
            notes: record.notes,
            adopted: record.adopted,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FrequencyRecord {
    id: i64,
    name: String,
    interval_days: u32,
}

impl TryFrom<FrequencyRecord> for Frequency {
    type Error = anyhow::Error;

    fn try_from(record: FrequencyRecord) -> Result<Self> {
        Ok(Frequency {
            id: record.id,
            name: record.name,
            interval_days: record.interval_days,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MedicationScheduleRecord {
    id: i64,
    pet_id: i64,
    medication_id: i64,
    frequency_id: i64,
    date_started: String,
    date_ended: Option<String>,
    notes: Option<String>,
}

impl TryFrom<MedicationScheduleRecord> for MedicationSchedule {
    type Error = anyhow::Error;

    fn try_from(record: MedicationScheduleRecord) -> Result<Self> {
        Ok(MedicationSchedule {
            id: record.id,
            pet_id: record.pet_id,
            medication_id: record.medication_id,
            frequency_id: record.frequency_id,
            date_started: parse_care_date(&record.date_started)?,
            date_ended: parse_optional_date(record.date_ended.as_deref())?,
            notes: record.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
struct VaccinationScheduleRecord {
    id: i64,
    pet_id: i64,
    vaccine_id: i64,
    frequency_id: i64,
    date_given: String,
    notes: Option<String>,
}

impl TryFrom<VaccinationScheduleRecord> for VaccinationSchedule {
    type Error = anyhow::Error;

    fn try_from(record: VaccinationScheduleRecord) -> Result<Self> {
        Ok(VaccinationSchedule {
            id: record.id,
            pet_id: record.pet_id,
            vaccine_id: record.vaccine_id,
            frequency_id: record.frequency_id,
            date_given: parse_care_date(&record.date_given)?,
            notes: record.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChecksScheduleRecord {
    id: i64,
    pet_id: i64,
    check_id: i64,
    date_created: String,
    notes: Option<String>,
    performed: bool,
}

impl TryFrom<ChecksScheduleRecord> for ChecksSchedule {
    type Error = anyhow::Error;

    fn try_from(record: ChecksScheduleRecord) -> Result<Self> {
        Ok(ChecksSchedule {
            id: record.id,
            pet_id: record.pet_id,
            check_id: record.check_id,
            date_created: parse_care_date(&record.date_created)?,
            notes: record.notes,
            performed: record.performed,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PetFoodRecord {
    id: i64,
    pet_id: i64,
    food_id: i64,
    frequency_id: i64,
    date_started: String,
    date_ended: Option<String>,
    notes: Option<String>,
}

impl TryFrom<PetFoodRecord> for PetFood {
    type Error = anyhow::Error;

    fn try_from(record: PetFoodRecord) -> Result<Self> {
        Ok(PetFood {
            id: record.id,
            pet_id: record.pet_id,
            food_id: record.food_id,
            frequency_id: record.frequency_id,
            date_started: parse_care_date(&record.date_started)?,
            date_ended: parse_optional_date(record.date_ended.as_deref())?,
            notes: record.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
struct InjuryReportRecord {
    id: i64,
    pet_id: i64,
    injury_id: i64,
    body_part: String,
    description: String,
    date: String,
}

impl TryFrom<InjuryReportRecord> for InjuryReport {
    type Error = anyhow::Error;

    fn try_from(record: InjuryReportRecord) -> Result<Self> {
        Ok(InjuryReport {
            id: record.id,
            pet_id: record.pet_id,
            injury_id: record.injury_id,
            body_part: record.body_part,
            description: record.description,
            date: parse_care_date(&record.date)?,
        })
    }
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Ok(Some(parse_care_date(value)?)),
    }
}

/// CSV-based care record repository, one file per resource
#[derive(Debug, Clone)]
pub struct CsvCareRecordRepository {
    connection: CsvConnection,
}

impl CsvCareRecordRepository {
    /// Create a new CSV care record repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read every row of a resource file, converting rows into domain models.
    ///
    /// Results are sorted by descending id, the most recent record first.
    fn read_resource<R, T>(&self, resource: CareResource, id_of: fn(&T) -> i64) -> Result<Vec<T>>
    where
        R: DeserializeOwned,
        T: TryFrom<R, Error = anyhow::Error>,
    {
        let file_path = self.connection.resource_file_path(resource);

        if !file_path.exists() {
            debug!("{} does not exist, returning empty {} list", file_path.display(), resource);
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for (index, result) in csv_reader.deserialize::<R>().enumerate() {
            // Header is line 1
            let line = index + 2;
            let row = result
                .with_context(|| format!("{}: malformed row at line {}", file_path.display(), line))?;
            let record = T::try_from(row)
                .with_context(|| format!("{}: invalid row at line {}", file_path.display(), line))?;
            records.push(record);
        }

        records.sort_by_key(|record| std::cmp::Reverse(id_of(record)));

        debug!("Read {} {} from {}", records.len(), resource, file_path.display());
        Ok(records)
    }
}

#[async_trait]
impl CareRecordStorage for CsvCareRecordRepository {
    async fn fetch_pet(&self, pet_id: i64) -> Result<Option<Pet>> {
        let pets = self.read_resource::<PetRecord, Pet>(CareResource::Pets, |pet| pet.id)?;
        Ok(pets.into_iter().find(|pet| pet.id == pet_id))
    }

    async fn list_frequencies(&self) -> Result<Vec<Frequency>> {
        let frequencies = self.read_resource::<FrequencyRecord, Frequency>(
            CareResource::Frequencies,
            |frequency| frequency.id,
        )?;
        for frequency in &frequencies {
            if let Err(e) = frequency.validate() {
                warn!("{}", e);
            }
        }
        Ok(frequencies)
    }

    async fn list_medication_schedules(&self) -> Result<Vec<MedicationSchedule>> {
        let schedules = self.read_resource::<MedicationScheduleRecord, MedicationSchedule>(
            CareResource::MedicationSchedules,
            |schedule| schedule.id,
        )?;
        for schedule in &schedules {
            if let Err(e) = schedule.validate() {
                warn!("{}", e);
            }
        }
        Ok(schedules)
    }

    async fn list_vaccination_schedules(&self) -> Result<Vec<VaccinationSchedule>> {
        self.read_resource::<VaccinationScheduleRecord, VaccinationSchedule>(
            CareResource::VaccinationSchedules,
            |schedule| schedule.id,
        )
    }

    async fn list_checks_schedules(&self) -> Result<Vec<ChecksSchedule>> {
        self.read_resource::<ChecksScheduleRecord, ChecksSchedule>(
            CareResource::ChecksSchedules,
            |schedule| schedule.id,
        )
    }

    async fn list_injury_reports(&self) -> Result<Vec<InjuryReport>> {
        self.read_resource::<InjuryReportRecord, InjuryReport>(
            CareResource::InjuryReports,
            |report| report.id,
        )
    }

    async fn list_pet_foods(&self) -> Result<Vec<PetFood>> {
        let foods = self.read_resource::<PetFoodRecord, PetFood>(
            CareResource::PetFoods,
            |food| food.id,
        )?;
        for food in &foods {
            if let Err(e) = food.validate() {
                warn!("{}", e);
            }
        }
        Ok(foods)
    }
}
