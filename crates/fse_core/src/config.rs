//! Search configuration, read once at startup from `config.json`.
//!
//! Key names follow the file format users already have:
//!
//! ```json
//! {
//!   "userkey": "ABCDEF123456",
//!   "aircrafttype": "Cessna 172 Skyhawk",
//!   "terminal": "bash",
//!   "from": ["US", "CA"],
//!   "to": ["all"],
//!   "searchlimit": 20
//! }
//! ```

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::matching::{CountryAllowList, JobFilter};

pub const CONFIG_FILE: &str = "config.json";

/// `terminal` value that selects decorated output.
const DECORATED_TERMINAL: &str = "bash";

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Json(err) => write!(f, "invalid config: {err}"),
            ConfigError::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OutputStyle {
    #[default]
    Plain,
    Decorated,
}

impl From<String> for OutputStyle {
    fn from(terminal: String) -> Self {
        if terminal == DECORATED_TERMINAL {
            OutputStyle::Decorated
        } else {
            OutputStyle::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(rename = "userkey")]
    pub user_key: String,
    #[serde(rename = "aircrafttype")]
    pub aircraft_type: String,
    #[serde(rename = "terminal", default)]
    pub output_style: OutputStyle,
    #[serde(rename = "from", default)]
    pub origin_countries: CountryAllowList,
    #[serde(rename = "to", default)]
    pub destination_countries: CountryAllowList,
    /// Maximum number of ranked jobs shown.
    #[serde(rename = "searchlimit", default)]
    pub search_limit: usize,
    /// Maximum number of admitted matches scanned; unset scans everything.
    #[serde(rename = "matchcap", default)]
    pub match_cap: Option<usize>,
}

impl SearchConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(raw)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.user_key.trim().is_empty() {
            return Err(ConfigError::Invalid("userkey cannot be empty".to_string()));
        }
        if self.aircraft_type.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "aircrafttype cannot be empty".to_string(),
            ));
        }
        if self.search_limit == 0 {
            tracing::warn!("searchlimit is 0; no jobs will be listed");
        }
        Ok(self)
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }

    /// Aircraft type as sent to the feed: spaces become `%20`.
    pub fn encoded_aircraft_type(&self) -> String {
        self.aircraft_type.replace(' ', "%20")
    }

    pub fn job_filter(&self) -> JobFilter {
        JobFilter::new(
            self.origin_countries.clone(),
            self.destination_countries.clone(),
        )
    }

    /// Cap handed to the matcher. The ranking limit never caps the scan, so
    /// the best-paying jobs are picked from every admitted assignment.
    pub fn effective_match_cap(&self) -> Option<usize> {
        self.match_cap
    }
}
