use anyhow::Context;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Env var holding an `EnvFilter` directive, e.g. `newtab_core=debug`.
pub const LOG_FILTER_ENV: &str = "NEWTAB_LOG";
/// Env var naming a file that receives a DEBUG-level copy of the log.
pub const LOG_FILE_ENV: &str = "NEWTAB_LOG_FILE";

pub fn init_tracing() -> anyhow::Result<()> {
    init_tracing_with_level("newtab", LevelFilter::WARN)
}

/// Install the global subscriber: stderr at `default_level` (overridable via
/// `NEWTAB_LOG`), plus an optional file layer.
pub fn init_tracing_with_level(
    service_name: &str,
    default_level: LevelFilter,
) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_FILTER_ENV)
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {log_path}"))?;

        let file_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_filter(LevelFilter::DEBUG);

        registry
            .with(file_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;
        tracing::info!(service = service_name, path = %log_path, "file logging enabled");
    } else {
        registry
            .try_init()
            .context("Failed to install tracing subscriber")?;
    }

    tracing::debug!(service = service_name, "tracing initialized");
    Ok(())
}
