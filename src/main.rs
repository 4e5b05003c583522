//! Entry point for the book shelf viewer.
//!
//! - Load user configuration from `conf/config.toml`.
//! - Apply an optional catalog source given on the command line.
//! - Launch the GUI application with the resulting config.

mod app;
mod cache;
mod catalog;
mod config;
mod covers;
mod text_utils;

use crate::app::run_app;
use crate::config::{AppConfig, load_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let mut config = load_config(Path::new("conf/config.toml"));
    if let Some(source) = parse_args()? {
        info!(%source, "Catalog source overridden from command line");
        config.catalog_source = source;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    log_startup(&config);
    run_app(config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<String>> {
    let mut args = env::args().skip(1);
    let source = args.next();
    if args.next().is_some() {
        return Err(anyhow!("Usage: shelf-viewer [catalog-path-or-url]"));
    }
    Ok(source.filter(|source| !source.trim().is_empty()))
}

fn log_startup(config: &AppConfig) {
    info!(
        source = %config.catalog_source,
        level = %config.log_level,
        "Starting book shelf"
    );
    info!(
        batch_size = config.batch_size,
        threshold = config.scroll_threshold,
        delay_ms = config.scroll_load_delay_ms,
        view = %config.default_view,
        touch = config.touch_input,
        "Active list configuration"
    );
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
