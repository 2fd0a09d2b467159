//! server/src/backend/io/rest/mappers/dashboard_mapper.rs

use chrono::NaiveDate;

use crate::backend::domain::models::{
    ChecksSchedule, DashboardTotals, InjuryReport, ListPreview, MedicationSchedule, Pet, PetAge,
    PetDashboardSnapshot, PetDashboardSummary, PetFood, VaccinationDue, VaccinationSchedule,
};

/// Mapper from domain dashboard views to the shared response DTOs.
///
/// Dates leave the server as `YYYY-MM-DD` strings.
pub struct DashboardMapper;

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl DashboardMapper {
    pub fn to_dashboard_dto(domain: PetDashboardSnapshot) -> shared::PetDashboardResponse {
        shared::PetDashboardResponse {
            pet: Self::to_pet_dto(domain.pet),
            as_of: format_date(domain.as_of),
            age: domain.age.map(Self::to_age_dto),
            active_medications: domain
                .active_medications
                .into_iter()
                .map(Self::to_medication_dto)
                .collect(),
            vaccinations: domain
                .vaccinations
                .into_iter()
                .map(Self::to_vaccination_dto)
                .collect(),
            checkups: domain.checkups.into_iter().map(Self::to_checkup_dto).collect(),
            recent_injuries: domain
                .recent_injuries
                .into_iter()
                .map(Self::to_injury_dto)
                .collect(),
            diet: domain.diet.into_iter().map(Self::to_food_dto).collect(),
            upcoming_vaccinations: domain
                .upcoming_vaccinations
                .into_iter()
                .map(Self::to_vaccination_due_dto)
                .collect(),
            totals: Self::to_totals_dto(domain.totals),
        }
    }

    pub fn to_summary_dto(domain: PetDashboardSummary) -> shared::PetDashboardSummaryResponse {
        shared::PetDashboardSummaryResponse {
            pet: Self::to_pet_dto(domain.pet),
            as_of: format_date(domain.as_of),
            age: domain.age.map(Self::to_age_dto),
            active_medications: Self::to_preview_dto(
                domain.active_medications,
                Self::to_medication_dto,
            ),
            vaccinations: Self::to_preview_dto(domain.vaccinations, Self::to_vaccination_dto),
            checkups: Self::to_preview_dto(domain.checkups, Self::to_checkup_dto),
            recent_injuries: Self::to_preview_dto(domain.recent_injuries, Self::to_injury_dto),
            diet: Self::to_preview_dto(domain.diet, Self::to_food_dto),
            upcoming_vaccinations: Self::to_preview_dto(
                domain.upcoming_vaccinations,
                Self::to_vaccination_due_dto,
            ),
            totals: Self::to_totals_dto(domain.totals),
        }
    }

    fn to_preview_dto<T, D>(preview: ListPreview<T>, map: fn(T) -> D) -> shared::SectionPreview<D> {
        shared::SectionPreview {
            items: preview.items.into_iter().map(map).collect(),
            remaining: preview.remaining,
        }
    }

    pub fn to_pet_dto(domain: Pet) -> shared::Pet {
        shared::Pet {
            id: domain.id,
            name: domain.name,
            nickname: domain.nickname,
            pet_type: domain.pet_type,
            breed: domain.breed,
            gender: domain.gender,
            birthday: format_date(domain.birthday),
            date_admitted: format_date(domain.date_admitted),
            picture: domain.picture,
            notes: domain.notes,
            adopted: domain.adopted,
        }
    }

    fn to_age_dto(domain: PetAge) -> shared::PetAge {
        shared::PetAge {
            years: domain.years,
            months: domain.months,
        }
    }

    fn to_medication_dto(domain: MedicationSchedule) -> shared::MedicationSchedule {
        shared::MedicationSchedule {
            id: domain.id,
            pet_id: domain.pet_id,
            medication_id: domain.medication_id,
            frequency_id: domain.frequency_id,
            date_started: format_date(domain.date_started),
            date_ended: domain.date_ended.map(format_date),
            notes: domain.notes,
        }
    }

    fn to_vaccination_dto(domain: VaccinationSchedule) -> shared::VaccinationSchedule {
        shared::VaccinationSchedule {
            id: domain.id,
            pet_id: domain.pet_id,
            vaccine_id: domain.vaccine_id,
            frequency_id: domain.frequency_id,
            date_given: format_date(domain.date_given),
            notes: domain.notes,
        }
    }

    fn to_checkup_dto(domain: ChecksSchedule) -> shared::ChecksSchedule {
        shared::ChecksSchedule {
            id: domain.id,
            pet_id: domain.pet_id,
            check_id: domain.check_id,
            date_created: format_date(domain.date_created),
            notes: domain.notes,
            performed: domain.performed,
        }
    }

    fn to_food_dto(domain: PetFood) -> shared::PetFood {
        shared::PetFood {
            id: domain.id,
            pet_id: domain.pet_id,
            food_id: domain.food_id,
            frequency_id: domain.frequency_id,
            date_started: format_date(domain.date_started),
            date_ended: domain.date_ended.map(format_date),
            notes: domain.notes,
        }
    }

    fn to_injury_dto(domain: InjuryReport) -> shared::InjuryReport {
        shared::InjuryReport {
            id: domain.id,
            pet_id: domain.pet_id,
            injury_id: domain.injury_id,
            body_part: domain.body_part,
            description: domain.description,
            date: format_date(domain.date),
        }
    }

    fn to_vaccination_due_dto(domain: VaccinationDue) -> shared::VaccinationDue {
        shared::VaccinationDue {
            vaccination_id: domain.vaccination_id,
            vaccine_id: domain.vaccine_id,
            frequency_name: domain.frequency_name,
            due_on: format_date(domain.due_on),
            overdue: domain.overdue,
        }
    }

    fn to_totals_dto(domain: DashboardTotals) -> shared::DashboardTotals {
        shared::DashboardTotals {
            medications: domain.medications,
            vaccinations: domain.vaccinations,
            checkups: domain.checkups,
            injuries_recent: domain.injuries_recent,
            diet: domain.diet,
        }
    }
}
