// src/logging.rs
// =============================================================================
// Installs the global tracing subscriber.
//
// - Level comes from --log-level, RUST_LOG wins when it is set
// - Format is JSON objects (default) or human-readable text
// - Output goes to stdout, or to --log-file when given
//
// This runs once, from main.rs, before anything logs.
// =============================================================================

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Plain human-readable lines
    Text,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let writer = match &config.file {
        Some(path) => file_writer(path)?,
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let filter = build_env_filter(config.level);
    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(config.file.is_none())
                    .with_writer(writer),
            )
            .try_init(),
    };

    installed.map_err(|e| Error::Logging(format!("failed to install tracing subscriber: {e}")))
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

// Opens (or creates) the log file in append mode
//
// Logs from earlier runs are kept. The file is opened up front so a bad
// path fails the run before any download starts.
fn file_writer(path: &Path) -> Result<BoxMakeWriter> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Logging(format!("log file has no name: {}", path.display())))?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::Logging(format!("cannot open log file {}: {e}", path.display())))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    Ok(BoxMakeWriter::new(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_directives() {
        assert_eq!(LogLevel::Error.as_directive(), "error");
        assert_eq!(LogLevel::Debug.as_directive(), "debug");
    }

    #[test]
    fn test_file_writer_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.log");
        file_writer(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_writer_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("run.log");
        let err = file_writer(&path).err().unwrap();
        assert!(matches!(err, Error::Logging(_)));
    }

    #[test]
    fn test_init_logging_installs_subscriber_once() {
        let config = LoggingConfig {
            level: LogLevel::Info,
            format: LogFormat::Text,
            file: None,
        };
        // A second install in the same process reports an error instead of panicking
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
