use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::Cli;
pub use domain::models::GateReport;
pub use services::config::load_gate_config;
pub use services::evidence::EvidencePolicy;
pub use services::gate::run_gate;
pub use services::output::print_report;
pub use services::scanners::SystemScanners;

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::handle_gate(&cli) {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(err) => {
            eprintln!("gov-gates: {err:#}");
            ExitCode::from(2)
        }
    }
}
