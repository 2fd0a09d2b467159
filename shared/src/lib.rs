use serde::{Deserialize, Serialize};

/// A pet tracked by the shelter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub nickname: Option<String>,
    /// Species, e.g. "dog" or "cat"
    pub pet_type: String,
    pub breed: String,
    pub gender: Option<String>,
    /// Birthday (YYYY-MM-DD)
    pub birthday: String,
    /// Date the pet arrived at the shelter (YYYY-MM-DD)
    pub date_admitted: String,
    pub picture: Option<String>,
    pub notes: Option<String>,
    pub adopted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub medication_id: i64,
    pub frequency_id: i64,
    /// YYYY-MM-DD
    pub date_started: String,
    /// YYYY-MM-DD, absent while the course is open-ended
    pub date_ended: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub vaccine_id: i64,
    pub frequency_id: i64,
    /// YYYY-MM-DD
    pub date_given: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecksSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub check_id: i64,
    /// YYYY-MM-DD
    pub date_created: String,
    pub notes: Option<String>,
    pub performed: bool,
}

/// Diet assignment for a pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetFood {
    pub id: i64,
    pub pet_id: i64,
    pub food_id: i64,
    pub frequency_id: i64,
    /// YYYY-MM-DD
    pub date_started: String,
    /// YYYY-MM-DD, absent while the diet is open-ended
    pub date_ended: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryReport {
    pub id: i64,
    pub pet_id: i64,
    pub injury_id: i64,
    pub body_part: String,
    pub description: String,
    /// YYYY-MM-DD
    pub date: String,
}

/// Age broken down into whole years and remainder months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetAge {
    pub years: u32,
    pub months: u32,
}

/// Estimated next vaccination date derived from the vaccine's frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationDue {
    pub vaccination_id: i64,
    pub vaccine_id: i64,
    pub frequency_name: String,
    /// YYYY-MM-DD
    pub due_on: String,
    pub overdue: bool,
}

/// Counts shown in the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTotals {
    /// Active medications only
    pub medications: usize,
    pub vaccinations: usize,
    pub checkups: usize,
    /// Injuries inside the recency window only
    pub injuries_recent: usize,
    /// Every diet assignment for the pet, active or not
    pub diet: usize,
}

/// Query parameters for the dashboard endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetDashboardRequest {
    /// Evaluation date (YYYY-MM-DD); the server uses today when omitted
    pub as_of: Option<String>,
    /// Number of items per section in the summary view
    pub limit: Option<usize>,
}

/// Full dashboard for one pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDashboardResponse {
    pub pet: Pet,
    /// Date the snapshot was evaluated against (YYYY-MM-DD)
    pub as_of: String,
    /// None when the recorded birthday is after `as_of`
    pub age: Option<PetAge>,
    pub active_medications: Vec<MedicationSchedule>,
    pub vaccinations: Vec<VaccinationSchedule>,
    pub checkups: Vec<ChecksSchedule>,
    pub recent_injuries: Vec<InjuryReport>,
    pub diet: Vec<PetFood>,
    pub upcoming_vaccinations: Vec<VaccinationDue>,
    pub totals: DashboardTotals,
}

/// First few items of a section plus how many were left out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPreview<T> {
    pub items: Vec<T>,
    /// Rendered as "+N more"
    pub remaining: usize,
}

/// Compact dashboard with every section truncated to `limit` items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDashboardSummaryResponse {
    pub pet: Pet,
    pub as_of: String,
    pub age: Option<PetAge>,
    pub active_medications: SectionPreview<MedicationSchedule>,
    pub vaccinations: SectionPreview<VaccinationSchedule>,
    pub checkups: SectionPreview<ChecksSchedule>,
    pub recent_injuries: SectionPreview<InjuryReport>,
    pub diet: SectionPreview<PetFood>,
    pub upcoming_vaccinations: SectionPreview<VaccinationDue>,
    pub totals: DashboardTotals,
}

/// Error body returned by the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
