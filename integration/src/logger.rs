//! Unified logger for centralized logging configuration

use bookmark_manager_core::SystemError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Log level or filter directives (e.g. `info`, `bookmark_parser=debug`)
    pub level: String,

    /// Include thread IDs
    pub include_thread_ids: bool,

    /// Include target module paths
    pub include_targets: bool,

    /// Colorize output
    pub ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            include_thread_ids: false,
            include_targets: true,
            ansi: true,
        }
    }
}

impl LoggerConfig {
    /// Filter built from the configured level only, ignoring `RUST_LOG`
    pub fn level_filter(&self) -> std::result::Result<EnvFilter, SystemError> {
        EnvFilter::try_new(&self.level).map_err(|e| SystemError::Configuration {
            details: format!("invalid log level '{}': {}", self.level, e),
        })
    }
}

/// Unified logger
pub struct UnifiedLogger;

impl UnifiedLogger {
    /// Initialize the global logger
    ///
    /// `RUST_LOG` takes precedence over the configured level. Fails if a
    /// global subscriber is already installed.
    pub fn init(config: LoggerConfig) -> std::result::Result<(), SystemError> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => config.level_filter()?,
        };

        let console_layer = fmt::layer()
            .with_target(config.include_targets)
            .with_thread_ids(config.include_thread_ids)
            .with_ansi(config.ansi)
            .with_writer(std::io::stderr);

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(console_layer);

        tracing::subscriber::set_global_default(subscriber).map_err(|e| SystemError::Configuration {
            details: e.to_string(),
        })?;

        tracing::info!("Logging initialized with level: {}", config.level);

        Ok(())
    }

    /// Initialize with default configuration
    pub fn init_default() -> std::result::Result<(), SystemError> {
        Self::init(LoggerConfig::default())
    }
}
