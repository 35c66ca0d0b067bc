use crate::infra::{money, parse_days, yes_no, CommandContext, DaySelection};
use clap::{Args, Subcommand};
use serde::Serialize;
use split_lease::error::AppError;
use split_lease::workflows::booking::{
    calculate_pricing_quote, calculate_reservation_total, BookingDesk, BookingQuote,
    BookingRequest, PricingQuote,
};

#[derive(Subcommand, Debug)]
pub(crate) enum QuoteCommand {
    /// Guest-facing nightly price for a host rate and weekly night count
    Nightly(NightlyArgs),
    /// Scale a four-week rent to a reservation length in weeks
    Reservation(ReservationArgs),
    /// Full quote for a weekly selection: window, next check-in and totals
    Booking(BookingArgs),
}

#[derive(Args, Debug)]
pub(crate) struct NightlyArgs {
    /// Host nightly rate
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) rate: f64,
    /// Nights per week (2 to 7)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) nights: f64,
}

#[derive(Args, Debug)]
pub(crate) struct ReservationArgs {
    /// Rent for one four-week billing cycle
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) four_week_rent: f64,
    /// Reservation length in weeks
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) weeks: f64,
}

#[derive(Args, Debug)]
pub(crate) struct BookingArgs {
    /// Selected nights as day indices or names, comma separated
    #[arg(long, value_parser = parse_days)]
    pub(crate) days: DaySelection,
    /// Host nightly rate
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) rate: f64,
    /// Reservation length in weeks
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) weeks: f64,
    /// Earliest acceptable check-in date
    #[arg(long)]
    pub(crate) min_date: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReservationReport {
    four_week_rent: f64,
    total_weeks: f64,
    reservation_total: f64,
}

pub(crate) fn run(command: QuoteCommand, context: &CommandContext) -> Result<(), AppError> {
    match command {
        QuoteCommand::Nightly(args) => {
            let quote = calculate_pricing_quote(args.rate, args.nights)?;
            context.emit(&quote, render_pricing)
        }
        QuoteCommand::Reservation(args) => {
            let report = ReservationReport {
                four_week_rent: args.four_week_rent,
                total_weeks: args.weeks,
                reservation_total: calculate_reservation_total(args.four_week_rent, args.weeks)?,
            };
            context.emit(&report, |report| {
                format!(
                    "{} weeks at {} per four weeks: {}",
                    report.total_weeks,
                    money(report.four_week_rent),
                    money(report.reservation_total)
                )
            })
        }
        QuoteCommand::Booking(args) => {
            let request = BookingRequest {
                selected_days: args.days.0,
                min_date: args.min_date,
                host_nightly_rate: args.rate,
                total_weeks: args.weeks,
            };
            let quote = BookingDesk::new(context.calendar).quote(&request)?;
            context.emit(&quote, render_booking)
        }
    }
}

fn render_pricing(quote: &PricingQuote) -> String {
    format!(
        "Base price:      {}\nDiscount:        {}\nMarkup:          {}\nTotal:           {}\nPrice per night: {}",
        money(quote.base_price),
        money(quote.discount_amount),
        money(quote.markup_amount),
        money(quote.total_price),
        money(quote.price_per_night)
    )
}

fn render_booking(quote: &BookingQuote) -> String {
    let mut lines = vec![
        format!(
            "Stay: {} -> {} ({} nights/week, contiguous: {})",
            quote.window.check_in_name,
            quote.window.check_out_name,
            quote.nights_per_week,
            yes_no(quote.contiguous)
        ),
        format!("Next check-in:     {}", quote.next_check_in),
        format!("Price per night:   {}", money(quote.pricing.price_per_night)),
        format!("Four-week rent:    {}", money(quote.four_week_rent)),
        format!("Reservation total: {}", money(quote.reservation_total)),
    ];
    if quote.pricing.discount_amount > 0.0 {
        lines.push(format!(
            "Full-week discount applied: {}",
            money(quote.pricing.discount_amount)
        ));
    }
    lines.join("\n")
}
