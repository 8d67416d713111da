//! CLI runner for common setup.
//!
//! Loads the configuration file and initializes logging so that command
//! handlers start from a ready state.

use tracing::info;
use worldtiles::config::ConfigFile;
use worldtiles::logging::{init_logging, LoggingGuard};

use crate::error::CliError;

/// Keeps logging alive and holds the loaded configuration.
pub struct CliRunner {
    _logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load `~/.worldtiles/config.ini` (or defaults) and start logging.
    pub fn new() -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.directory, &config.logging.file)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            _logging_guard: logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("worldtiles v{}", env!("CARGO_PKG_VERSION"));
        info!("worldtiles CLI: {} command", command);
    }
}
