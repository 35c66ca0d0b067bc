use crate::infra::{CommandContext, OutputFormat};
use crate::proposal::{self, ProposalCommand};
use crate::quote::{self, QuoteCommand};
use crate::schedule::{self, ScheduleCommand};
use clap::{Parser, Subcommand};
use split_lease::config::{AppConfig, CalendarConfig};
use split_lease::error::AppError;
use split_lease::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "split-lease",
    about = "Weekly schedule, pricing and proposal checks for the split-lease booking engine",
    version
)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// IANA timezone for guest-local dates (overrides SPLIT_LEASE_TIMEZONE)
    #[arg(long, global = true)]
    timezone: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check-in/out days, contiguity and availability dates
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
    /// Guest-facing nightly prices and reservation totals
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Proposal status catalogue and guest action guards
    Proposal {
        #[command(subcommand)]
        command: ProposalCommand,
    },
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(timezone) = cli.timezone.as_deref() {
        config.calendar = CalendarConfig::from_timezone_name(timezone)?;
    }
    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        timezone = %config.calendar.timezone,
        "split-lease cli configured"
    );

    let context = CommandContext {
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        calendar: config.calendar.booking_calendar(),
    };

    match cli.command {
        Command::Schedule { command } => schedule::run(command, &context),
        Command::Quote { command } => quote::run(command, &context),
        Command::Proposal { command } => proposal::run(command, &context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "split-lease",
            "schedule",
            "window",
            "--days",
            "5,6,0",
            "--json",
            "--timezone",
            "UTC",
        ])
        .expect("valid arguments");

        assert!(cli.json);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert!(matches!(
            cli.command,
            Command::Schedule {
                command: ScheduleCommand::Window(_)
            }
        ));
    }

    #[test]
    fn invalid_day_lists_are_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["split-lease", "schedule", "window", "--days", "1,9x"])
            .expect_err("bad day token");
        assert!(err.to_string().contains("9x"));
    }

    #[test]
    fn negative_rates_reach_the_pricing_engine() {
        let cli = Cli::try_parse_from([
            "split-lease",
            "quote",
            "nightly",
            "--rate",
            "-5",
            "--nights",
            "4",
        ])
        .expect("negative numbers parse");
        match cli.command {
            Command::Quote {
                command: QuoteCommand::Nightly(args),
            } => assert_eq!(args.rate, -5.0),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
