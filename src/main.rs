//! CLI entry point for running a grid algorithm over a board file

use clap::Parser;
use gridalgo::io::cli::{Cli, Runner, describe};
use tracing_subscriber::EnvFilter;

// Allow print for the result summary, which is the program's output
#[allow(clippy::print_stdout)]
fn main() -> gridalgo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridalgo=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let kind = cli.algorithm_kind()?;
    let runner = Runner::new(cli);
    let result = runner.execute()?;
    println!("{}", describe(kind, &result));
    Ok(())
}
