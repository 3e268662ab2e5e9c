use std::process::ExitCode;

use clap::Parser;
use pumpjack::cli::{self, Cli, Report};
use pumpjack::config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout only ever carries the status line.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    let report = Report::from_outcome(Config::from_env().and_then(|config| cli::run(&cli, &config)));
    match &report {
        Report::Stdout(line) => println!("{}", line),
        Report::Stderr(line) => {
            debug!(message = %line, "Run failed");
            eprintln!("{}", line);
        }
    }
    ExitCode::from(report.exit_status())
}
