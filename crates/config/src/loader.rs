use crate::schema::{ConfigError, ValidationResult, validate};
use crate::types::Config;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_JSON: &str = include_str!("../../../assets/termlaunch.default.json");

/// Error type for config loading operations.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Returns the default config file path (~/.termlaunch.json).
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".termlaunch.json"))
}

/// Ensures the config file exists, creating a default one if missing.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or if
/// writing the default config file fails.
pub fn ensure_config_exists() -> Result<PathBuf, LoadError> {
    let path = config_path().ok_or(LoadError::NoHomeDir)?;
    write_default_if_missing(&path)?;
    Ok(path)
}

fn write_default_if_missing(path: &Path) -> Result<(), LoadError> {
    if !path.exists() {
        fs::write(path, DEFAULT_JSON)?;
        log::info!("Created default config at {}", path.display());
    }
    Ok(())
}

/// Loads config from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or fails schema validation.
pub fn load_from_str(s: &str) -> Result<Config, ConfigError> {
    s.parse()
}

/// Loads config from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the config is invalid.
pub fn load_from_path(path: &Path) -> Result<Config, LoadError> {
    let contents = fs::read_to_string(path)?;
    Ok(load_from_str(&contents)?)
}

/// Loads config from the default path (~/.termlaunch.json).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or the config is invalid.
pub fn load() -> Result<Config, LoadError> {
    let path = config_path().ok_or(LoadError::NoHomeDir)?;

    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    load_from_path(&path)
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s).map_err(ConfigError::InvalidJson)?;

        if let ValidationResult::Invalid(errors) = validate(&value) {
            return Err(ConfigError::ValidationFailed(errors));
        }

        serde_json::from_value(value).map_err(ConfigError::InvalidJson)
    }
}
