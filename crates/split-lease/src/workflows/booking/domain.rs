use serde::Serialize;

/// Length of the repeating booking week.
pub const DAYS_IN_WEEK: i64 = 7;

const DAY_NAMES: [&str; DAYS_IN_WEEK as usize] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Name of a weekday index (Sunday = 0 through Saturday = 6).
pub fn day_name(index: i64) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|slot| DAY_NAMES.get(slot).copied())
}

pub(crate) fn is_valid_day_index(index: i64) -> bool {
    (0..DAYS_IN_WEEK).contains(&index)
}

/// Resolve a full or three-letter day name ("monday", "Mon") to its index.
pub(crate) fn day_index_from_name(name: &str) -> Option<i64> {
    let lowered = name.trim().to_ascii_lowercase();
    if lowered.len() < 3 {
        return None;
    }
    DAY_NAMES
        .iter()
        .position(|day| {
            let day = day.to_ascii_lowercase();
            day == lowered || (lowered.len() == 3 && day.starts_with(&lowered))
        })
        .map(|slot| slot as i64)
}

/// The weekday after `index` on the circular week.
pub(crate) fn following_day(index: i64) -> i64 {
    (index + 1).rem_euclid(DAYS_IN_WEEK)
}

/// Check-in and check-out days derived from a weekly selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleWindow {
    pub check_in_day: u8,
    pub check_out_day: u8,
    pub check_in_name: &'static str,
    pub check_out_name: &'static str,
}

impl ScheduleWindow {
    /// Indices are reduced into the week, so `7` names Sunday.
    pub(crate) fn new(check_in_day: i64, check_out_day: i64) -> Self {
        let check_in_slot = check_in_day.rem_euclid(DAYS_IN_WEEK) as usize;
        let check_out_slot = check_out_day.rem_euclid(DAYS_IN_WEEK) as usize;
        Self {
            check_in_day: check_in_slot as u8,
            check_out_day: check_out_slot as u8,
            check_in_name: DAY_NAMES[check_in_slot],
            check_out_name: DAY_NAMES[check_out_slot],
        }
    }
}

/// Violations raised while interpreting a weekly schedule or its dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("invalid schedule input: {0}")]
    InvalidInput(String),
    #[error("at least one day must be selected")]
    EmptyInput,
    #[error("day index '{value}' must be an integer between 0 (Sunday) and 6 (Saturday)")]
    InvalidDayIndex { value: String },
    #[error("'{value}' is not a valid date")]
    InvalidDate { value: String },
    #[error("availability bound '{value}' is not a valid date")]
    InvalidBound { value: String },
}

impl ScheduleError {
    pub(crate) fn day_index(value: impl ToString) -> Self {
        Self::InvalidDayIndex {
            value: value.to_string(),
        }
    }
}

/// Numeric precondition violations in pricing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("host nightly rate must be a positive number (got {value})")]
    InvalidRate { value: f64 },
    #[error("nights count must be between {min} and {max} (got {value})")]
    InvalidNightsCount { value: f64, min: f64, max: f64 },
    #[error("four-week rent must be zero or greater (got {value})")]
    InvalidRent { value: f64 },
    #[error("total weeks must be greater than zero (got {value})")]
    InvalidWeeks { value: f64 },
}

/// Error raised while assembling a booking quote.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Pricing(#[from] PricingError),
}
