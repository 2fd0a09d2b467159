//! Date arithmetic for care schedules.
//!
//! Every function here takes the evaluation date (`as_of`) explicitly and
//! compares calendar dates only, never timestamps, so results do not drift
//! with the server's time zone.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use std::num::NonZeroU32;

use super::errors::CareError;
use super::models::PetAge;

/// Parse a stored or user-supplied date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps. For timestamps only the calendar date as written is kept.
pub fn parse_care_date(input: &str) -> Result<NaiveDate, CareError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CareError::invalid_date(input, "date is empty"));
    }

    let date_error = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => return Ok(date),
        Err(e) => e,
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(timestamp.date());
        }
    }

    Err(CareError::invalid_date(input, date_error.to_string()))
}

/// Age in whole years and remainder months.
///
/// Returns `None` when the birthday lies after `as_of`. A birthday that falls
/// on a day the `as_of` month does not have (Feb 29, the 31st) is treated as
/// that month's last day.
pub fn age_from_birthday(birthday: NaiveDate, as_of: NaiveDate) -> Option<PetAge> {
    if birthday > as_of {
        return None;
    }

    let anniversary_day = birthday
        .day()
        .min(last_day_of_month(as_of.year(), as_of.month()));

    let mut years = as_of.year() - birthday.year();
    let mut months = as_of.month() as i32 - birthday.month() as i32;

    if as_of.day() < anniversary_day {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Some(PetAge {
        years: years as u32,
        months: months as u32,
    })
}

/// True iff `as_of - window_days <= date <= as_of`
pub fn is_within_trailing_window(date: NaiveDate, window_days: NonZeroU32, as_of: NaiveDate) -> bool {
    let window_start = as_of
        .checked_sub_days(Days::new(u64::from(window_days.get())))
        .unwrap_or(NaiveDate::MIN);

    window_start <= date && date <= as_of
}

/// True iff the course has no end date or ends on/after `as_of`.
///
/// The start date does not gate the result: a course booked to begin later is
/// already reported as ongoing.
pub fn is_ongoing(_started: NaiveDate, ended: Option<NaiveDate>, as_of: NaiveDate) -> bool {
    match ended {
        Some(ended) => ended >= as_of,
        None => true,
    }
}

/// Date one interval after `anchor`
pub fn next_due_date(anchor: NaiveDate, interval_days: NonZeroU32) -> NaiveDate {
    anchor
        .checked_add_days(Days::new(u64::from(interval_days.get())))
        .unwrap_or(NaiveDate::MAX)
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    first_of_next
        .and_then(|date| date.pred_opt())
        .map(|date| date.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_care_date(s).unwrap()
    }

    fn days(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_parse_care_date_formats() {
        assert_eq!(date("2025-03-15"), NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(date(" 2025-03-15 "), NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(
            date("2025-03-15T23:30:00-04:00"),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert_eq!(
            date("2025-03-15T08:00:00.000"),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert_eq!(
            date("2025-03-15 08:00:00"),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_care_date_rejects_garbage() {
        for input in ["", "   ", "not-a-date", "2025-13-01", "2025-02-30", "15/03/2025"] {
            let result = parse_care_date(input);
            assert!(
                matches!(result, Err(CareError::InvalidDate { .. })),
                "expected InvalidDate for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_age_borrows_a_year_before_anniversary() {
        let birthday = date("2020-06-15");

        assert_eq!(
            age_from_birthday(birthday, date("2024-06-14")),
            Some(PetAge { years: 3, months: 11 })
        );
        assert_eq!(
            age_from_birthday(birthday, date("2024-06-15")),
            Some(PetAge { years: 4, months: 0 })
        );
        assert_eq!(
            age_from_birthday(birthday, date("2024-09-01")),
            Some(PetAge { years: 4, months: 2 })
        );
    }

    #[test]
    fn test_age_on_birthday_is_zero() {
        let birthday = date("2023-04-09");
        assert_eq!(
            age_from_birthday(birthday, birthday),
            Some(PetAge { years: 0, months: 0 })
        );
    }

    #[test]
    fn test_age_for_leap_day_birthday() {
        let birthday = date("2020-02-29");

        // Feb 28 stands in for Feb 29 in non-leap years
        assert_eq!(
            age_from_birthday(birthday, date("2021-02-28")),
            Some(PetAge { years: 1, months: 0 })
        );
        assert_eq!(
            age_from_birthday(birthday, date("2021-02-27")),
            Some(PetAge { years: 0, months: 11 })
        );
        assert_eq!(
            age_from_birthday(birthday, date("2024-02-29")),
            Some(PetAge { years: 4, months: 0 })
        );
    }

    #[test]
    fn test_age_for_end_of_month_birthday() {
        let birthday = date("2024-01-31");

        assert_eq!(
            age_from_birthday(birthday, date("2024-02-29")),
            Some(PetAge { years: 0, months: 1 })
        );
        assert_eq!(
            age_from_birthday(birthday, date("2024-02-28")),
            Some(PetAge { years: 0, months: 0 })
        );
        assert_eq!(
            age_from_birthday(date("2020-12-31"), date("2021-01-01")),
            Some(PetAge { years: 0, months: 0 })
        );
    }

    #[test]
    fn test_age_for_future_birthday_is_none() {
        assert_eq!(age_from_birthday(date("2025-06-01"), date("2025-05-31")), None);
    }

    #[test]
    fn test_trailing_window_is_inclusive() {
        let as_of = date("2025-03-15");

        assert!(is_within_trailing_window(date("2025-02-13"), days(30), as_of));
        assert!(!is_within_trailing_window(date("2025-02-12"), days(30), as_of));
        assert!(is_within_trailing_window(as_of, days(30), as_of));
        assert!(!is_within_trailing_window(date("2025-03-16"), days(30), as_of));
        assert!(is_within_trailing_window(date("2025-03-14"), days(1), as_of));
    }

    #[test]
    fn test_ongoing_boundaries() {
        let as_of = date("2025-03-15");
        let started = date("2025-03-05");

        assert!(is_ongoing(started, None, as_of));
        assert!(is_ongoing(started, Some(as_of), as_of));
        assert!(!is_ongoing(started, Some(date("2025-03-14")), as_of));
        assert!(is_ongoing(date("2025-04-01"), None, as_of));
    }

    #[test]
    fn test_next_due_date() {
        assert_eq!(next_due_date(date("2025-01-01"), days(365)), date("2026-01-01"));
        assert_eq!(next_due_date(date("2024-02-22"), days(7)), date("2024-02-29"));
        assert_eq!(next_due_date(NaiveDate::MAX, days(1)), NaiveDate::MAX);
    }
}
