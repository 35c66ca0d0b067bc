use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::calendar::BookingCalendar;
use super::domain::{BookingError, ScheduleWindow};
use super::pricing::{
    calculate_four_week_rent, calculate_pricing_quote, calculate_reservation_total, PricingQuote,
};
use super::schedule::{calculate_check_in_out_days, is_schedule_contiguous, nights_count};

/// Guest selection and listing terms for a quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub selected_days: Vec<i64>,
    #[serde(default)]
    pub min_date: Option<String>,
    pub host_nightly_rate: f64,
    pub total_weeks: f64,
}

/// Everything the booking surface needs to render a stay proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingQuote {
    pub window: ScheduleWindow,
    pub contiguous: bool,
    pub next_check_in: String,
    pub nights_per_week: usize,
    pub pricing: PricingQuote,
    pub four_week_rent: f64,
    pub reservation_total: f64,
}

/// Composes the schedule and pricing calculations into a single quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingDesk {
    calendar: BookingCalendar,
}

impl BookingDesk {
    pub fn new(calendar: BookingCalendar) -> Self {
        Self { calendar }
    }

    pub fn quote(&self, request: &BookingRequest) -> Result<BookingQuote, BookingError> {
        match self.build_quote(request) {
            Ok(quote) => {
                debug!(
                    check_in = quote.window.check_in_name,
                    check_out = quote.window.check_out_name,
                    nights = quote.nights_per_week,
                    next_check_in = %quote.next_check_in,
                    total = quote.reservation_total,
                    "booking quote prepared"
                );
                Ok(quote)
            }
            Err(err) => {
                warn!(error = %err, days = ?request.selected_days, "booking quote rejected");
                Err(err)
            }
        }
    }

    fn build_quote(&self, request: &BookingRequest) -> Result<BookingQuote, BookingError> {
        let days = &request.selected_days;
        let window = calculate_check_in_out_days(days)?;
        let contiguous = is_schedule_contiguous(days)?;
        let next_check_in = self
            .calendar
            .next_available_check_in(days, request.min_date.as_deref())?;

        let nights = nights_count(days);
        let pricing = calculate_pricing_quote(request.host_nightly_rate, nights as f64)?;
        let four_week_rent = calculate_four_week_rent(pricing.price_per_night, nights as f64)?;
        let reservation_total = calculate_reservation_total(four_week_rent, request.total_weeks)?;

        Ok(BookingQuote {
            window,
            contiguous,
            next_check_in,
            nights_per_week: nights,
            pricing,
            four_week_rent,
            reservation_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::booking::{PricingError, ScheduleError};

    fn request(days: &[i64]) -> BookingRequest {
        BookingRequest {
            selected_days: days.to_vec(),
            min_date: Some("2025-12-07".to_string()),
            host_nightly_rate: 100.0,
            total_weeks: 8.0,
        }
    }

    #[test]
    fn quote_combines_schedule_and_pricing() {
        let desk = BookingDesk::default();
        let quote = desk.quote(&request(&[1, 2, 3, 4])).expect("quote builds");

        assert_eq!(quote.window.check_in_name, "Monday");
        assert_eq!(quote.window.check_out_name, "Friday");
        assert!(quote.contiguous);
        assert_eq!(quote.next_check_in, "2025-12-09");
        assert_eq!(quote.nights_per_week, 4);
        assert!((quote.pricing.price_per_night - 117.0).abs() < 1e-9);
        assert!((quote.four_week_rent - 1872.0).abs() < 1e-9);
        assert!((quote.reservation_total - 3744.0).abs() < 1e-9);
    }

    #[test]
    fn single_night_selection_cannot_be_priced() {
        let desk = BookingDesk::default();
        match desk.quote(&request(&[3])) {
            Err(BookingError::Pricing(PricingError::InvalidNightsCount { value, .. })) => {
                assert_eq!(value, 1.0)
            }
            other => panic!("expected nights count rejection, got {other:?}"),
        }
    }

    #[test]
    fn schedule_errors_surface_before_pricing() {
        let desk = BookingDesk::default();
        let mut bad = request(&[1, 2, 9]);
        bad.host_nightly_rate = -5.0;
        match desk.quote(&bad) {
            Err(BookingError::Schedule(ScheduleError::InvalidDayIndex { value })) => {
                assert_eq!(value, "9")
            }
            other => panic!("expected day index rejection, got {other:?}"),
        }
    }

    #[test]
    fn request_deserializes_without_min_date() {
        let parsed: BookingRequest = serde_json::from_str(
            r#"{"selected_days":[5,6,0],"host_nightly_rate":150.0,"total_weeks":4}"#,
        )
        .expect("valid json");
        assert_eq!(parsed.min_date, None);
        assert_eq!(parsed.selected_days, vec![5, 6, 0]);
    }
}
