mod cli;
mod infra;
mod proposal;
mod quote;
mod schedule;

use split_lease::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
