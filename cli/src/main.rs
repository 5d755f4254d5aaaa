mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{list, render, session};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `-v` turns on info and `-vv` debug.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Session(args) => session::run(&cli, args),
        Commands::Attributes => list::attributes(),
        Commands::Counties => list::counties(),
    }
}

fn main() -> anyhow::Result<()> { run() }
