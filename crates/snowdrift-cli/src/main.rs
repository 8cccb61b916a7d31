//! # `snowdrift` command line
//!
//! Mint and inspect Snowflake IDs from a shell.
//!
//! ```bash
//! snowdrift generate --machine-id 1
//! snowdrift generate --machine-id 1 --process-id 24 -n 3
//! snowdrift parse 1292053924173320192
//! snowdrift parse --dual --json 1292065108376162304
//! ```

mod commands;
mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{AppConfig, CliArgs};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    telemetry::init_tracing();

    let config = AppConfig::try_from(args)?;

    if let Some(epoch) = config.epoch {
        snowdrift::set_epoch(epoch)
            .with_context(|| format!("invalid epoch: {} ms", epoch.as_millis()))?;
        tracing::info!(epoch_ms = epoch.as_millis() as u64, "using custom epoch");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&config.action, &mut out)
}
