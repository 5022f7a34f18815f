/*
[INPUT]:  LoggingConfig (directory, console level) and RUST_LOG
[OUTPUT]: Global tracing subscriber with daily file + console layers
[POS]:    Observability layer - constructed once by the binary
[UPDATE]: When changing log destinations, formats or levels
*/

use anyhow::{Context, Result, anyhow};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;

/// File name prefix; the appender adds `.YYYY-MM-DD`
pub const LOG_FILE_PREFIX: &str = "trading_bot.log";

/// Keeps the non-blocking file writer alive; logs are flushed on drop
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Crates whose DEBUG output goes to the file; everything else stays at INFO
fn file_filter() -> Targets {
    Targets::new()
        .with_target("binance_futures_adapter", LevelFilter::DEBUG)
        .with_target("binance_futures_bot", LevelFilter::DEBUG)
        .with_target("trading_bot", LevelFilter::DEBUG)
        .with_default(LevelFilter::INFO)
}

fn console_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).context("invalid log level"),
    }
}

/// Install the process-wide subscriber.
///
/// File: DEBUG, no colours, one file per day. Console (stderr): the
/// configured level, overridden by `RUST_LOG` when set.
pub fn init(config: &LoggingConfig) -> Result<LogGuard> {
    std::fs::create_dir_all(&config.dir)
        .with_context(|| format!("create log directory {}", config.dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&config.dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_filter());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter(&config.console_level)?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    info!(dir = %config.dir.display(), "logger initialised");
    Ok(LogGuard { _file: guard })
}
