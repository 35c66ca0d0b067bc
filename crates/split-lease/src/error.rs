use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::booking::BookingError;
use crate::workflows::proposals::ProposalExportError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Booking(BookingError),
    ProposalExport(ProposalExportError),
    Output(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Booking(err) => write!(f, "booking error: {}", err),
            AppError::ProposalExport(err) => write!(f, "proposal export error: {}", err),
            AppError::Output(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Booking(err) => Some(err),
            AppError::ProposalExport(err) => Some(err),
            AppError::Output(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<BookingError> for AppError {
    fn from(value: BookingError) -> Self {
        Self::Booking(value)
    }
}

impl From<crate::workflows::booking::ScheduleError> for AppError {
    fn from(value: crate::workflows::booking::ScheduleError) -> Self {
        Self::Booking(BookingError::from(value))
    }
}

impl From<crate::workflows::booking::PricingError> for AppError {
    fn from(value: crate::workflows::booking::PricingError) -> Self {
        Self::Booking(BookingError::from(value))
    }
}

impl From<ProposalExportError> for AppError {
    fn from(value: ProposalExportError) -> Self {
        Self::ProposalExport(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
