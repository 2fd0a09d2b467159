//! Status rules applied to individual care records.
//!
//! ## Business Rules
//!
//! - A medication or diet is **active** while it has no end date or its end
//!   date is on/after the evaluation date. Overlapping records are fine.
//! - An injury is **recent** when it happened within the trailing
//!   [`RECENT_INJURY_WINDOW_DAYS`] window, both ends inclusive.
//! - Vaccinations and checkups are never windowed.
//! - Rules never reorder a list; previews cut it positionally.

use chrono::NaiveDate;
use log::warn;
use std::collections::HashMap;
use std::num::NonZeroU32;

use super::care_dates::{is_ongoing, is_within_trailing_window, next_due_date};
use super::models::{
    Frequency, InjuryReport, ListPreview, MedicationSchedule, PetFood, VaccinationDue,
    VaccinationSchedule,
};

/// Trailing window, in days, inside which an injury counts as recent
pub const RECENT_INJURY_WINDOW_DAYS: NonZeroU32 = match NonZeroU32::new(30) {
    Some(days) => days,
    None => panic!("recent injury window must be non-zero"),
};

/// Number of items a dashboard section shows before "+N more"
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

pub fn is_active_medication(schedule: &MedicationSchedule, as_of: NaiveDate) -> bool {
    is_ongoing(schedule.date_started, schedule.date_ended, as_of)
}

pub fn is_active_diet(food: &PetFood, as_of: NaiveDate) -> bool {
    is_ongoing(food.date_started, food.date_ended, as_of)
}

pub fn is_recent_injury(report: &InjuryReport, as_of: NaiveDate) -> bool {
    is_within_trailing_window(report.date, RECENT_INJURY_WINDOW_DAYS, as_of)
}

/// Keep the first `limit` items and count the rest
pub fn preview<T: Clone>(items: &[T], limit: usize) -> ListPreview<T> {
    let shown = items.len().min(limit);
    ListPreview {
        items: items[..shown].to_vec(),
        remaining: items.len() - shown,
    }
}

/// Estimate the next dose for each vaccination, in the order given.
///
/// Vaccinations whose frequency is unknown or has a zero interval get no
/// estimate.
pub fn vaccination_due_dates(
    vaccinations: &[VaccinationSchedule],
    frequencies: &[Frequency],
    as_of: NaiveDate,
) -> Vec<VaccinationDue> {
    let by_id: HashMap<i64, &Frequency> = frequencies
        .iter()
        .map(|frequency| (frequency.id, frequency))
        .collect();

    vaccinations
        .iter()
        .filter_map(|vaccination| {
            let Some(frequency) = by_id.get(&vaccination.frequency_id) else {
                warn!(
                    "Vaccination {} references unknown frequency {}, skipping due date",
                    vaccination.id, vaccination.frequency_id
                );
                return None;
            };
            let Some(interval) = NonZeroU32::new(frequency.interval_days) else {
                warn!(
                    "Frequency {} has a zero interval, skipping due date for vaccination {}",
                    frequency.id, vaccination.id
                );
                return None;
            };

            let due_on = next_due_date(vaccination.date_given, interval);
            Some(VaccinationDue {
                vaccination_id: vaccination.id,
                vaccine_id: vaccination.vaccine_id,
                frequency_name: frequency.name.clone(),
                due_on,
                overdue: due_on < as_of,
            })
        })
        .collect()
}
