use chrono_tz::Tz;
use std::env;
use std::fmt;

use crate::workflows::booking::BookingCalendar;

const APP_ENV: &str = "APP_ENV";
const APP_LOG_LEVEL: &str = "APP_LOG_LEVEL";
const SPLIT_LEASE_TIMEZONE: &str = "SPLIT_LEASE_TIMEZONE";

/// Deployment stage the tool runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Unrecognised names fall back to development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Settings for the booking engine and its command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub calendar: CalendarConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Read `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. Missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(APP_ENV)
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let calendar = match lookup(SPLIT_LEASE_TIMEZONE) {
            Some(name) => CalendarConfig::from_timezone_name(&name)?,
            None => CalendarConfig::default(),
        };

        let log_level = lookup(APP_LOG_LEVEL).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            environment,
            calendar,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Zone in which guest-facing dates are treated as "local".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    pub timezone: Tz,
}

impl CalendarConfig {
    pub const DEFAULT_TIMEZONE: &'static str = "America/New_York";

    pub fn from_timezone_name(name: &str) -> Result<Self, ConfigError> {
        let trimmed = name.trim();
        let timezone = trimmed
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone {
                value: trimmed.to_string(),
            })?;
        Ok(Self { timezone })
    }

    pub fn booking_calendar(&self) -> BookingCalendar {
        BookingCalendar::new(self.timezone)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::New_York,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimezone { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimezone { value } => {
                write!(
                    f,
                    "SPLIT_LEASE_TIMEZONE must be an IANA timezone name (got '{value}')"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
