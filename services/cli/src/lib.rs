mod cli;
mod demo;
mod infra;
mod render;
mod report;

use property_valuation::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
