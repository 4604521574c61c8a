//! Logging and tracing setup for the CLI.
//!
//! Stdout is reserved for command output (including the marker protocol),
//! so human-readable log lines go to stderr and structured JSONL records go
//! to a log file. The file writer is non-blocking; the returned guard must
//! stay alive for the duration of the process so buffered records flush on
//! exit.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log output should go.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (overrides `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for the JSONL log file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with a config-file fallback for
    /// the log directory.
    ///
    /// Precedence: `PROSE_VET_LOG_PATH` > `PROSE_VET_LOG_DIR` > config
    /// `log_dir` > platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("PROSE_VET_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("PROSE_VET_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                prose_vet_core::config::user_data_local_dir()
                    .map(|dir| dir.as_std_path().join("logs"))
            });
        Self { log_path, log_dir }
    }

    /// Resolve the log file path, if any destination is configured.
    fn resolve_log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join("prose-vet.jsonl")))
    }
}

/// Build the env filter for the stderr and file layers.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` forces errors only, each
/// `-v` raises verbosity, and the configured level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber.
///
/// Installs a compact stderr layer plus, when a log destination resolves, a
/// JSONL file layer through a non-blocking writer. Returns the writer guard;
/// drop it only at process exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let Some(log_path) = config.resolve_log_path() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_current_span(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(Some(guard))
}
