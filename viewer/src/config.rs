use crate::config::ConfigError::WrongLogLevel;
use display::header::TimeZone;
use display::observer::DisplayOptions;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FRAMES_PATH: &str = "frames.jsonl";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    pub display_data: bool,
    pub time_zone: TimeZone,
    pub frames_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: common::logging::DEFAULT_FORMAT.to_string(),
            display_data: false,
            time_zone: TimeZone::default(),
            frames_path: PathBuf::from(DEFAULT_FRAMES_PATH),
        }
    }
}

impl Config {
    pub fn from_file() -> Result<Self, ConfigError> {
        let data = match std::fs::read_to_string(CONFIG_FILENAME) {
            Ok(value) => value,
            Err(_) => {
                let config = Config::default();
                config.save_to_file()?;
                return Ok(config);
            },
        };

        Self::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<Self, ConfigError> {
        toml::from_str(data).map_err(ConfigError::TomlDeserializationError)
    }

    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let data = toml::to_string(&self).map_err(ConfigError::TomlSerializationError)?;

        std::fs::write(CONFIG_FILENAME, data).map_err(ConfigError::IOError)?;

        Ok(())
    }
}

impl Config {
    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| WrongLogLevel)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            display_data: self.display_data,
            time_zone: self.time_zone,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error.")]
    IOError(#[from] std::io::Error),

    #[error("TOML Serialization Error.")]
    TomlSerializationError(#[from] toml::ser::Error),

    #[error("TOML Deserialization Error.")]
    TomlDeserializationError(#[from] toml::de::Error),

    #[error("Wrong log level.")]
    WrongLogLevel,
}

impl ConfigError {
    pub fn additional_info(&self) -> Option<String> {
        match self {
            ConfigError::IOError(err) => Some(err.to_string()),
            ConfigError::TomlSerializationError(err) => Some(err.to_string()),
            ConfigError::TomlDeserializationError(err) => Some(err.to_string()),
            _ => None,
        }
    }
}
