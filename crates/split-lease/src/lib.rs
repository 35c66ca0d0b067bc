//! Booking schedule, pricing and proposal lifecycle engine for a split-lease
//! rental marketplace.
//!
//! - [`workflows::booking`] interprets weekly day selections on a circular
//!   week and prices stays.
//! - [`workflows::proposals`] holds the proposal status registry and the
//!   guest action guards.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
