use serde::Serialize;
use split_lease::error::AppError;
use split_lease::workflows::booking::{parse_day_indices, BookingCalendar};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommandContext {
    pub(crate) format: OutputFormat,
    pub(crate) calendar: BookingCalendar,
}

impl CommandContext {
    /// Print `value` as pretty JSON, or the text produced by `render`.
    pub(crate) fn emit<T, F>(&self, value: &T, render: F) -> Result<(), AppError>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => println!("{}", render(value)),
        }
        Ok(())
    }
}

/// Weekday selection as typed on the command line (`1,2,3` or `fri,sat,sun`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DaySelection(pub(crate) Vec<i64>);

pub(crate) fn parse_days(raw: &str) -> Result<DaySelection, String> {
    parse_day_indices(raw)
        .map(DaySelection)
        .map_err(|err| err.to_string())
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Two-decimal money formatting for text output.
pub(crate) fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_days_wraps_library_errors() {
        assert_eq!(parse_days("1, 2"), Ok(DaySelection(vec![1, 2])));
        let err = parse_days("monday,someday").expect_err("invalid token");
        assert!(err.contains("someday"));
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(money(101.7899), "$101.79");
        assert_eq!(money(5200.0), "$5200.00");
    }
}
