//! edr-stager binary.
//!
//! This is the entry point for the `edr-stager` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and dispatches
//! to the appropriate command handler. A failing edr command carries its own
//! exit code out of the process; every other failure exits 1.

mod cli;
mod commands;

use edr_stager_util::errors::StagerError;

fn main() {
    let args = cli::parse();
    init_tracing(args.verbose);

    if let Err(report) = commands::dispatch(args) {
        eprintln!("Error: {report:?}");
        std::process::exit(exit_code(&report));
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

fn exit_code(report: &miette::Report) -> i32 {
    report
        .downcast_ref::<StagerError>()
        .map(StagerError::exit_code)
        .unwrap_or(1)
}
