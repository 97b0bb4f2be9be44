//! Logging setup for CoinPlan
//!
//! Library code logs through the `log` facade only. This module wires the
//! facade to `env_logger` for applications and tests that want output:
//! human-readable or JSON lines, optionally with timestamps and source
//! locations, to the console or appended to a file.
//!
//! Selection logs values and counts. Origin keys attached to outputs are
//! never logged.
//!
//! # Usage
//!
//! ```
//! use coinplan_selection::logging::{self, LogConfig, LogLevel};
//!
//! let config = LogConfig {
//!     level: LogLevel::Debug,
//!     ..LogConfig::default()
//! };
//! logging::init(&config).expect("Failed to initialize logging");
//! ```

use chrono::Local;
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs::OpenOptions;
use std::io::Write as IoWrite;
use std::sync::{Mutex, Once};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Error conditions
    Error,
    /// Warning conditions
    Warn,
    /// Informational messages
    Info,
    /// Debug-level messages
    Debug,
    /// Trace level (very verbose)
    Trace,
}

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level
    #[serde(default = "default_level")]
    pub level: LogLevel,
    /// Path to log file (None for console-only)
    #[serde(default)]
    pub log_file: Option<String>,
    /// Whether to include timestamps in log messages
    #[serde(default = "default_true")]
    pub include_timestamps: bool,
    /// Whether to include source location in log messages
    #[serde(default = "default_true")]
    pub include_source_location: bool,
    /// Whether to use JSON format for logs (machine-readable)
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_file: None,
            include_timestamps: true,
            include_source_location: true,
            json_format: false,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// Ensure logging is only initialized once
static LOGGING_INIT: Once = Once::new();
static INIT_ERROR: Mutex<Option<String>> = Mutex::new(None);

/// Initialize the logging system with the given configuration
///
/// Safe to call more than once: only the first call configures the logger,
/// later calls report the outcome of that first call.
///
/// # Arguments
/// * `config` - Configuration for the logging system
///
/// # Returns
/// * Result with () on success, error string on failure
pub fn init(config: &LogConfig) -> Result<(), String> {
    let include_timestamps = config.include_timestamps;
    let include_source_location = config.include_source_location;
    let json_format = config.json_format;
    let log_file = config.log_file.clone();
    let level = config.level;

    LOGGING_INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level.into());

        builder.format(move |buf, record| {
            let mut style = buf.style();
            style.set_bold(true);

            let timestamp = if include_timestamps {
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            } else {
                String::new()
            };

            let source_location = if include_source_location {
                format!(" [{}:{}]", record.file().unwrap_or("unknown"), record.line().unwrap_or(0))
            } else {
                String::new()
            };

            if json_format {
                let line = json!({
                    "timestamp": timestamp,
                    "level": record.level().to_string(),
                    "target": record.target(),
                    "location": source_location.trim(),
                    "message": record.args().to_string(),
                });

                writeln!(buf, "{}", line)
            } else {
                if include_timestamps {
                    write!(buf, "{} ", timestamp)?;
                }

                writeln!(
                    buf,
                    "[{}{}] {}",
                    style.value(record.level()),
                    source_location,
                    record.args()
                )
            }
        });

        if let Some(file_path) = &log_file {
            match OpenOptions::new().create(true).append(true).open(file_path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    record_init_error(format!("Failed to open log file {}: {}", file_path, e));
                    return;
                }
            }
        }

        if let Err(e) = builder.try_init() {
            // Another logger (e.g. a test harness) got there first; keep it.
            debug!("Logger already initialized, using existing instance: {}", e);
        }
    });

    match INIT_ERROR.lock() {
        Ok(guard) => match guard.as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        },
        Err(_) => Err("Logging initialization state is poisoned".to_string()),
    }
}

fn record_init_error(error: String) {
    if let Ok(mut guard) = INIT_ERROR.lock() {
        *guard = Some(error);
    }
}

/// Update the log level dynamically
pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into());
}

// Default value functions

fn default_level() -> LogLevel {
    LogLevel::Info
}

fn default_true() -> bool {
    true
}
