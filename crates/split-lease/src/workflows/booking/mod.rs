mod calendar;
pub mod desk;
pub mod domain;
pub mod pricing;
pub mod schedule;

pub use calendar::{format_iso_date, BookingCalendar};
pub use desk::{BookingDesk, BookingQuote, BookingRequest};
pub use domain::{day_name, BookingError, PricingError, ScheduleError, ScheduleWindow};
pub use pricing::{
    calculate_four_week_rent, calculate_guest_facing_price, calculate_pricing_quote,
    calculate_reservation_total, PricingQuote,
};
pub use schedule::{
    calculate_check_in_out_days, calculate_next_available_check_in, is_date_in_range,
    is_schedule_contiguous, nights_count, parse_day_indices,
};
