use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_EARLIEST_YEAR: i32 = 1947;
const STATE_FILE_NAME: &str = "last_calculation.json";

/// Optional TOML config. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
    pub state_file: Option<PathBuf>,
}

/// Years offered for selection, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub earliest: i32,
    pub latest: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            earliest: DEFAULT_EARLIEST_YEAR,
            latest: current_year(),
        }
    }
}

impl YearRange {
    pub fn new(earliest: i32, latest: i32) -> Result<Self, ConfigError> {
        if earliest > latest {
            return Err(ConfigError::InvalidYearRange { earliest, latest });
        }
        Ok(Self { earliest, latest })
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.earliest..=self.latest).contains(&year)
    }
}

/// Resolved settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub years: YearRange,
    pub state_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            years: YearRange::default(),
            state_file: default_state_file(),
        }
    }
}

impl Config {
    /// Loads `path` if given, else the default config file if it exists,
    /// else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_file().filter(|p| p.is_file()) {
                Some(p) => p,
                None => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_file(file)
    }

    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let years = YearRange::new(
            file.earliest_year.unwrap_or(DEFAULT_EARLIEST_YEAR),
            file.latest_year.unwrap_or_else(current_year),
        )?;
        Ok(Self {
            years,
            state_file: file.state_file.unwrap_or_else(default_state_file),
        })
    }
}

/// The newest selectable year unless configured otherwise.
fn current_year() -> i32 {
    Local::now().year()
}

fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("agecalc").join("config.toml"))
}

fn default_state_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agecalc")
        .join(STATE_FILE_NAME)
}
