use crate::infra::{parse_days, yes_no, CommandContext, DaySelection};
use clap::{Args, Subcommand};
use serde::Serialize;
use split_lease::error::AppError;
use split_lease::workflows::booking::{
    calculate_check_in_out_days, is_schedule_contiguous, nights_count, ScheduleWindow,
};

#[derive(Subcommand, Debug)]
pub(crate) enum ScheduleCommand {
    /// Derive check-in and check-out days for a weekly selection
    Window(WindowArgs),
    /// Find the next check-in date on or after a minimum date
    NextCheckIn(NextCheckInArgs),
    /// Check whether a date falls inside a listing's availability window
    InRange(InRangeArgs),
}

#[derive(Args, Debug)]
pub(crate) struct WindowArgs {
    /// Selected nights as day indices or names (0/sun .. 6/sat), comma separated
    #[arg(long, value_parser = parse_days)]
    pub(crate) days: DaySelection,
}

#[derive(Args, Debug)]
pub(crate) struct NextCheckInArgs {
    /// Selected nights as day indices or names, comma separated
    #[arg(long, value_parser = parse_days)]
    pub(crate) days: DaySelection,
    /// Earliest acceptable date (YYYY-MM-DD or RFC 3339). Omitted means the Unix epoch.
    #[arg(long)]
    pub(crate) min_date: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct InRangeArgs {
    /// Date to test
    #[arg(long)]
    pub(crate) date: String,
    /// First available date (inclusive); open when omitted
    #[arg(long)]
    pub(crate) first: Option<String>,
    /// Last available date (inclusive); open when omitted
    #[arg(long)]
    pub(crate) last: Option<String>,
}

#[derive(Debug, Serialize)]
struct WindowReport {
    selected_days: Vec<i64>,
    contiguous: bool,
    nights_per_week: usize,
    window: ScheduleWindow,
}

#[derive(Debug, Serialize)]
struct NextCheckInReport {
    selected_days: Vec<i64>,
    min_date: Option<String>,
    next_check_in: String,
}

#[derive(Debug, Serialize)]
struct InRangeReport {
    date: String,
    first_available: Option<String>,
    last_available: Option<String>,
    in_range: bool,
}

pub(crate) fn run(command: ScheduleCommand, context: &CommandContext) -> Result<(), AppError> {
    match command {
        ScheduleCommand::Window(args) => {
            let report = window_report(args.days.0)?;
            context.emit(&report, render_window)
        }
        ScheduleCommand::NextCheckIn(args) => {
            let next_check_in = context
                .calendar
                .next_available_check_in(&args.days.0, args.min_date.as_deref())?;
            let report = NextCheckInReport {
                selected_days: args.days.0,
                min_date: args.min_date,
                next_check_in,
            };
            context.emit(&report, |report| {
                format!("Next check-in: {}", report.next_check_in)
            })
        }
        ScheduleCommand::InRange(args) => {
            let in_range = context.calendar.is_date_in_range(
                &args.date,
                args.first.as_deref(),
                args.last.as_deref(),
            )?;
            let report = InRangeReport {
                date: args.date,
                first_available: args.first,
                last_available: args.last,
                in_range,
            };
            context.emit(&report, render_in_range)
        }
    }
}

fn window_report(days: Vec<i64>) -> Result<WindowReport, AppError> {
    let window = calculate_check_in_out_days(&days)?;
    let contiguous = is_schedule_contiguous(&days)?;
    Ok(WindowReport {
        nights_per_week: nights_count(&days),
        selected_days: days,
        contiguous,
        window,
    })
}

fn render_window(report: &WindowReport) -> String {
    format!(
        "Check-in:   {} ({})\nCheck-out:  {} ({})\nNights:     {}\nContiguous: {}",
        report.window.check_in_name,
        report.window.check_in_day,
        report.window.check_out_name,
        report.window.check_out_day,
        report.nights_per_week,
        yes_no(report.contiguous)
    )
}

fn render_in_range(report: &InRangeReport) -> String {
    let first = report.first_available.as_deref().unwrap_or("open");
    let last = report.last_available.as_deref().unwrap_or("open");
    format!(
        "{} is {}within [{first}, {last}]",
        report.date,
        if report.in_range { "" } else { "not " }
    )
}
