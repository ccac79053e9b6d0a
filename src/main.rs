#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{debug, error};
use tracing_subscriber::FmtSubscriber;

use user_preferences::cli::{self, Cli};
use user_preferences::config::AppConfig;
use user_preferences::{FileStore, PreferenceEngine};

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::resolve(args.store.clone());

    // Logs go to stderr so command output stays pipeable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!(store = %config.store_path.display(), "Opening preference store");
    let store = FileStore::open(&config.store_path)?;
    let mut engine = PreferenceEngine::initialize(store)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    cli::run(&mut engine, args.command, &mut input, &mut out)
        .inspect_err(|err| error!("command failed: err={err:#}"))
}
