//! CLI entry point for scripted farm sessions

use clap::Parser;
use farmtile::io::cli::{Cli, SessionRunner};
use tracing_subscriber::EnvFilter;

fn main() -> farmtile::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = SessionRunner::new(cli)?;
    runner.process()?;
    Ok(())
}
