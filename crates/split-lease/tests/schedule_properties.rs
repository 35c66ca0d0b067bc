use proptest::prelude::*;
use split_lease::workflows::booking::{
    calculate_check_in_out_days, calculate_reservation_total, is_schedule_contiguous,
    BookingCalendar,
};

/// A run of `len` consecutive days starting at `start`, wrapping past Saturday.
fn circular_run(start: i64, len: i64) -> Vec<i64> {
    (0..len).map(|offset| (start + offset) % 7).collect()
}

proptest! {
    #[test]
    fn every_circular_run_is_contiguous(start in 0i64..7, len in 1i64..=7) {
        prop_assert_eq!(is_schedule_contiguous(&circular_run(start, len)), Ok(true));
    }

    #[test]
    fn contiguity_ignores_selection_order(start in 0i64..7, len in 2i64..=7, rotate in 0usize..7) {
        let mut days = circular_run(start, len);
        let shift = rotate % days.len();
        days.rotate_left(shift);
        days.reverse();
        prop_assert_eq!(is_schedule_contiguous(&days), Ok(true));
    }

    #[test]
    fn wrapped_runs_check_in_at_start_and_out_after_end(start in 0i64..7, len in 1i64..7) {
        let days = circular_run(start, len);
        let window = calculate_check_in_out_days(&days).expect("valid run");
        prop_assert_eq!(i64::from(window.check_in_day), start);
        prop_assert_eq!(i64::from(window.check_out_day), (start + len) % 7);
    }

    #[test]
    fn unwrapped_selections_check_out_after_last_day(
        days in proptest::collection::vec(0i64..6, 1..6)
    ) {
        // Saturday is never selected, so nothing wraps.
        let window = calculate_check_in_out_days(&days).expect("valid days");
        let last = *days.iter().max().expect("non-empty");
        prop_assert_eq!(i64::from(window.check_out_day), (last + 1) % 7);
    }

    #[test]
    fn out_of_range_days_are_rejected(
        mut days in proptest::collection::vec(0i64..7, 1..5),
        bad in prop_oneof![7i64..100, -100i64..0]
    ) {
        days.push(bad);
        prop_assert!(is_schedule_contiguous(&days).is_err());
        prop_assert!(calculate_check_in_out_days(&days).is_err());
    }

    #[test]
    fn next_check_in_lands_on_target_weekday_within_a_week(
        days in proptest::collection::vec(0i64..7, 1..7),
        offset in 0i64..3650
    ) {
        let calendar = BookingCalendar::utc();
        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
            + chrono::Duration::days(offset);
        let min_date = start.format("%Y-%m-%d").to_string();
        let next = calendar
            .next_available_check_in(&days, Some(&min_date))
            .expect("valid input");
        let next = chrono::NaiveDate::parse_from_str(&next, "%Y-%m-%d").expect("iso date");

        use chrono::Datelike;
        let target = *days.iter().min().expect("non-empty");
        prop_assert_eq!(i64::from(next.weekday().num_days_from_sunday()), target);
        let waited = (next - start).num_days();
        prop_assert!((0..7).contains(&waited));
    }

    #[test]
    fn reservation_total_is_linear_in_weeks(rent in 0.0f64..10_000.0, weeks in 0.5f64..104.0) {
        let single = calculate_reservation_total(rent, weeks).expect("valid input");
        let doubled = calculate_reservation_total(rent, weeks * 2.0).expect("valid input");
        prop_assert!((doubled - 2.0 * single).abs() <= 1e-6 * doubled.max(1.0));
    }
}
