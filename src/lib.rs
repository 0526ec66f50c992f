//! rabsen library root.
//! Exposes the record store, the attendance core, the CLI parser, the HTTP
//! adapter and the high-level run() function.

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use crate::core::{Clock, FixedClock, SystemClock};
use errors::AppResult;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Students { .. } => cli::commands::students::handle(&cli.command, ctx),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, ctx),
        Commands::Recap { .. } => cli::commands::recap::handle(&cli.command, ctx),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, ctx),
        Commands::Qr { .. } => cli::commands::qr::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging: the server is chatty by default, one-shot commands are not
    let default_level = if matches!(cli.command, Commands::Serve { .. }) {
        "info"
    } else {
        "warn"
    };
    init_tracing(default_level);

    // 3️⃣ load config once
    let mut cfg = Config::load()?;

    // 4️⃣ command-line overrides
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    let clock: Arc<dyn Clock> = match &cli.now {
        Some(ts) => Arc::new(FixedClock::parse_rfc3339(ts)?),
        None => Arc::new(SystemClock),
    };

    // 5️⃣ hand everything to the dispatcher
    let mut ctx = AppContext::new(cfg, clock);
    dispatch(&cli, &mut ctx)
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded (e.g. in tests).
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
