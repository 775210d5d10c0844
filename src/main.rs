use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tapcalc::{Config, Engine, ui};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tapcalc", version, about)]
struct Args {
    /// Path to the config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lock every key except clear after equals, overriding the config file.
    #[arg(long)]
    lock_after_equals: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match args.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path).context("Failed to load configuration")?,
        None => Config::default(),
    };
    if args.lock_after_equals {
        config.lock_after_equals = true;
    }

    ui::run(Engine::new(&config))
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
