//! Weekly day selections interpreted on a circular week.
//!
//! Days are indexed Sunday = 0 through Saturday = 6 and the week wraps from
//! Saturday back to Sunday, so `[5, 6, 0, 1]` is one Friday-to-Monday run.
//! Selections are sorted but never deduplicated: a repeated index counts as
//! its own position, which breaks adjacency (`[1, 1, 2]` is not contiguous).

use super::calendar::{format_iso_date, BookingCalendar};
use super::domain::{
    day_index_from_name, following_day, is_valid_day_index, ScheduleError, ScheduleWindow,
    DAYS_IN_WEEK,
};

/// Whether the selection forms a single run on the circular week.
///
/// An empty selection is never contiguous. A single day short-circuits to
/// `true` before range validation, so even `[9]` reports contiguous; every
/// other selection must hold only indices in `0..=6`.
pub fn is_schedule_contiguous(selected_day_indices: &[i64]) -> Result<bool, ScheduleError> {
    match selected_day_indices {
        [] => Ok(false),
        [_] => Ok(single_day_selection_is_contiguous()),
        days => {
            validate_day_indices(days)?;
            let sorted = sorted_days(days);
            Ok(ring_gap_count(&sorted) <= 1)
        }
    }
}

/// Unvalidated shortcut for one-day selections.
fn single_day_selection_is_contiguous() -> bool {
    true
}

/// Derive check-in and check-out days from a weekly selection.
///
/// When the selection holds both Saturday and Sunday and breaks somewhere
/// inside the week, the stay wraps: check-in is the first night after the
/// widest break and check-out is the morning after the last night before it.
/// Otherwise check-in is the earliest selected day and check-out the day
/// after the latest.
pub fn calculate_check_in_out_days(selected_days: &[i64]) -> Result<ScheduleWindow, ScheduleError> {
    if selected_days.is_empty() {
        return Err(ScheduleError::EmptyInput);
    }
    validate_day_indices(selected_days)?;

    let sorted = sorted_days(selected_days);
    let first = sorted[0];
    let last = sorted[sorted.len() - 1];

    let (check_in, last_night) = if first == 0 && last == DAYS_IN_WEEK - 1 {
        match widest_internal_gap(&sorted) {
            Some(before_gap) => (sorted[before_gap + 1], sorted[before_gap]),
            None => (first, last),
        }
    } else {
        (first, last)
    };

    Ok(ScheduleWindow::new(check_in, following_day(last_night)))
}

/// Nights covered by one week of the selection. Check-out falls on the day
/// after the last selected night, so each selected day is a night.
pub fn nights_count(selected_days: &[i64]) -> usize {
    selected_days.len()
}

/// Parse a comma or whitespace separated list of day indices or day names
/// (`"1,2,3"`, `"fri sat sun"`).
///
/// Range checks are left to the schedule operations; only tokens that are
/// neither integers nor weekday names are rejected here.
pub fn parse_day_indices(raw: &str) -> Result<Vec<i64>, ScheduleError> {
    let tokens: Vec<&str> = raw
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ScheduleError::InvalidInput(
            "no day indices supplied".to_string(),
        ));
    }

    tokens
        .into_iter()
        .map(|token| {
            token
                .parse::<i64>()
                .ok()
                .or_else(|| day_index_from_name(token))
                .ok_or_else(|| ScheduleError::day_index(token))
        })
        .collect()
}

impl BookingCalendar {
    /// First date on or after `min_date` that falls on the earliest selected
    /// weekday, as `YYYY-MM-DD`.
    ///
    /// A missing `min_date` is read as the Unix epoch rather than rejected;
    /// a present but unparseable one fails with `InvalidDate`.
    pub fn next_available_check_in(
        &self,
        selected_day_indices: &[i64],
        min_date: Option<&str>,
    ) -> Result<String, ScheduleError> {
        if selected_day_indices.is_empty() {
            return Err(ScheduleError::InvalidInput(
                "selected day indices must not be empty".to_string(),
            ));
        }
        validate_day_indices(selected_day_indices)?;

        let target = sorted_days(selected_day_indices)[0];
        let start = match min_date {
            None => self.epoch(),
            Some(raw) => self
                .parse_instant(raw)
                .ok_or_else(|| ScheduleError::InvalidDate {
                    value: raw.to_string(),
                })?,
        };

        let current = self.weekday_index(start);
        if current == target {
            return Ok(format_iso_date(start));
        }

        let days_until = (target - current).rem_euclid(DAYS_IN_WEEK);
        let next = self
            .add_local_days(start, days_until)
            .ok_or_else(|| ScheduleError::InvalidDate {
                value: min_date.unwrap_or_default().to_string(),
            })?;
        Ok(format_iso_date(next))
    }

    /// Whether `date` falls within the inclusive availability window.
    ///
    /// All three values are reduced to their local calendar date first, so
    /// instants near midnight UTC may land on the neighbouring day. A `None`
    /// bound leaves that side open.
    pub fn is_date_in_range(
        &self,
        date: &str,
        first_available: Option<&str>,
        last_available: Option<&str>,
    ) -> Result<bool, ScheduleError> {
        let day = self
            .parse_instant(date)
            .map(|instant| self.local_date(instant))
            .ok_or_else(|| ScheduleError::InvalidDate {
                value: date.to_string(),
            })?;

        let parse_bound = |raw: &str| {
            self.parse_instant(raw)
                .map(|instant| self.local_date(instant))
                .ok_or_else(|| ScheduleError::InvalidBound {
                    value: raw.to_string(),
                })
        };
        let first = first_available.map(parse_bound).transpose()?;
        let last = last_available.map(parse_bound).transpose()?;

        let after_start = first.map_or(true, |first| day >= first);
        let before_end = last.map_or(true, |last| day <= last);
        Ok(after_start && before_end)
    }
}

/// [`BookingCalendar::next_available_check_in`] on the default calendar.
pub fn calculate_next_available_check_in(
    selected_day_indices: &[i64],
    min_date: Option<&str>,
) -> Result<String, ScheduleError> {
    BookingCalendar::default().next_available_check_in(selected_day_indices, min_date)
}

/// [`BookingCalendar::is_date_in_range`] on the default calendar.
pub fn is_date_in_range(
    date: &str,
    first_available: Option<&str>,
    last_available: Option<&str>,
) -> Result<bool, ScheduleError> {
    BookingCalendar::default().is_date_in_range(date, first_available, last_available)
}

fn validate_day_indices(days: &[i64]) -> Result<(), ScheduleError> {
    match days.iter().find(|day| !is_valid_day_index(**day)) {
        Some(invalid) => Err(ScheduleError::day_index(invalid)),
        None => Ok(()),
    }
}

fn sorted_days(days: &[i64]) -> Vec<i64> {
    let mut sorted = days.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Breaks in a sorted selection of two or more days, counting the
/// Saturday-to-Sunday seam as adjacent.
fn ring_gap_count(sorted: &[i64]) -> usize {
    let internal = sorted
        .windows(2)
        .filter(|pair| pair[1] - pair[0] != 1)
        .count();
    let first = sorted[0];
    let last = sorted[sorted.len() - 1];
    let wraps_cleanly = first + DAYS_IN_WEEK - last == 1;
    internal + usize::from(!wraps_cleanly)
}

/// Index of the day before the widest jump inside a sorted selection.
fn widest_internal_gap(sorted: &[i64]) -> Option<usize> {
    let mut widest: Option<(usize, i64)> = None;
    for (index, pair) in sorted.windows(2).enumerate() {
        let jump = pair[1] - pair[0];
        if jump > 1 && widest.map_or(true, |(_, width)| jump > width) {
            widest = Some((index, jump));
        }
    }
    widest.map(|(index, _)| index)
}
