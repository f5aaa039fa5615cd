//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file or defaults) and apply command-line overrides
//! - Validate the resolved configuration
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Overrides are validated exactly like file values

use std::path::{Path, PathBuf};

use crate::config::{read_config, validate_config, ConfigError, ServiceConfig};

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub records_path: Option<PathBuf>,
    pub bind_address: Option<String>,
}

/// Read (or default) the configuration, apply overrides, then validate.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: Overrides,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(records_path) = overrides.records_path {
        config.data.records_path = records_path.to_string_lossy().into_owned();
    }
    if let Some(bind_address) = overrides.bind_address {
        config.listener.bind_address = bind_address;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
