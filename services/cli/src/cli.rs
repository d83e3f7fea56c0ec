use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_report, ReportArgs};
use clap::{Parser, Subcommand};
use property_valuation::config::AppConfig;
use property_valuation::error::AppError;
use property_valuation::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Property Valuation",
    about = "Value a property and compare letting strategies from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a valuation report from a JSON request file
    Report(ReportArgs),
    /// Value a built-in sample apartment (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "valuation cli starting");

    match command {
        Command::Report(args) => run_report(args, &config.rates),
        Command::Demo(args) => run_demo(args, &config.rates),
    }
}
