use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use mbox_payments::{Report, ScanBuilder, errors::ScanResult};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Print the amounts of payment scheduling notices in an mbox archive, by date")]
struct Args {
    #[arg(index = 1, help = "Path to the mbox archive")]
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    // stdout carries the report, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let Some(path) = args.path else {
        println!("Usage: {} path/to/mbox", program_name());
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error during processing: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> ScanResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let payments = ScanBuilder::new().path(path).scan_with_diagnostics(&mut out)?;
    Report::new(payments).write_to(&mut out)
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
