//! Configuration: command line flags layered over an optional TOML file

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::state::DEFAULT_ALERT_THRESHOLD;

/// Cities shown when no source is configured
pub const DEFAULT_CITIES: &[&str] = &[
    "London", "Paris", "Prague", "Madrid", "Cairo", "Dubai", "Delhi", "Tokyo", "Sydney",
    "New York",
];

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "weather-dashboard.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Invalid(String),
}

/// Where the weather summary comes from
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// HTTP endpoint returning a JSON array of records
    Endpoint { url: String },
    /// Open-Meteo lookups for a list of cities
    OpenMeteo { cities: Vec<String> },
    /// JSON array of records on disk
    File { path: PathBuf },
}

impl SourceConfig {
    /// Trim city names and drop blank entries such as the tail of `"Paris,"`
    fn normalized(self) -> Self {
        match self {
            SourceConfig::OpenMeteo { cities } => SourceConfig::OpenMeteo {
                cities: cities
                    .iter()
                    .map(|city| city.trim())
                    .filter(|city| !city.is_empty())
                    .map(str::to_owned)
                    .collect(),
            },
            other => other,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::OpenMeteo {
            cities: DEFAULT_CITIES.iter().map(|city| city.to_string()).collect(),
        }
    }
}

/// Terminal weather dashboard
#[derive(Parser, Debug, Default)]
#[command(name = "weather-dashboard")]
#[command(about = "Weather summary dashboard with search, trend chart and heat alert")]
pub struct Args {
    /// TOML config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Summary endpoint returning [{"city": ..., "temperature": ...}]
    #[arg(long, conflicts_with_all = ["file", "cities"])]
    pub url: Option<String>,

    /// Read the summary from a JSON file instead
    #[arg(long, conflicts_with = "cities")]
    pub file: Option<PathBuf>,

    /// Comma-separated cities to look up on Open-Meteo
    #[arg(long, value_delimiter = ',')]
    pub cities: Option<Vec<String>>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Temperature (°C) above which the heat alert fires
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long)]
    pub no_log: bool,
}

/// Shape of the TOML config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub source: Option<SourceConfig>,
    pub timeout_secs: Option<u64>,
    pub alert_threshold: Option<f64>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub source: SourceConfig,
    pub timeout: Duration,
    pub alert_threshold: f64,
    /// `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Read the config file named by `args` (if any) and apply flags on top
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, file)
    }

    /// Flags win over file values, file values win over defaults
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let source = if let Some(url) = &args.url {
            SourceConfig::Endpoint { url: url.clone() }
        } else if let Some(path) = &args.file {
            SourceConfig::File { path: path.clone() }
        } else if let Some(cities) = &args.cities {
            SourceConfig::OpenMeteo {
                cities: cities.clone(),
            }
        } else {
            file.source.unwrap_or_default()
        };
        let source = source.normalized();

        let timeout_secs = args
            .timeout
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let alert_threshold = args
            .threshold
            .or(file.alert_threshold)
            .unwrap_or(DEFAULT_ALERT_THRESHOLD);
        let log_file = if args.no_log {
            None
        } else {
            Some(
                args.log_file
                    .clone()
                    .or(file.log_file)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            )
        };

        let config = Self {
            source,
            timeout: Duration::from_secs(timeout_secs),
            alert_threshold,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.alert_threshold.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "alert threshold must be a finite number, got {}",
                self.alert_threshold
            )));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid("timeout must be at least 1 second".into()));
        }
        match &self.source {
            SourceConfig::OpenMeteo { cities } => {
                if cities.is_empty() {
                    return Err(ConfigError::Invalid("city list is empty".into()));
                }
            }
            SourceConfig::Endpoint { url } if url.trim().is_empty() => {
                return Err(ConfigError::Invalid("endpoint url is empty".into()));
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> FileConfig {
        FileConfig::parse(text, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::resolve(&Args::default(), FileConfig::default()).unwrap();
        assert_eq!(config.source, SourceConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.alert_threshold, 35.0);
        assert_eq!(config.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
    }

    #[test]
    fn test_file_config_endpoint() {
        let file = parse(
            r#"
            alert_threshold = 30.5
            timeout_secs = 3

            [source]
            kind = "endpoint"
            url = "http://localhost:5000/api/weather/summary"
            "#,
        );
        let config = DashboardConfig::resolve(&Args::default(), file).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Endpoint {
                url: "http://localhost:5000/api/weather/summary".into()
            }
        );
        assert_eq!(config.alert_threshold, 30.5);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_file_config_cities() {
        let file = parse(
            r#"
            [source]
            kind = "open_meteo"
            cities = ["Oslo", "Lima"]
            "#,
        );
        assert_eq!(
            file.source,
            Some(SourceConfig::OpenMeteo {
                cities: vec!["Oslo".into(), "Lima".into()]
            })
        );
    }

    #[test]
    fn test_blank_cities_dropped() {
        let args = Args::parse_from(["weather-dashboard", "--cities", "Paris, ,Tokyo ,"]);
        let config = DashboardConfig::resolve(&args, FileConfig::default()).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::OpenMeteo {
                cities: vec!["Paris".into(), "Tokyo".into()]
            }
        );

        let file = parse(
            r#"
            [source]
            kind = "open_meteo"
            cities = [" Rome ", ""]
            "#,
        );
        let config = DashboardConfig::resolve(&Args::default(), file).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::OpenMeteo {
                cities: vec!["Rome".into()]
            }
        );

        let args = Args::parse_from(["weather-dashboard", "--cities", " , "]);
        assert!(matches!(
            DashboardConfig::resolve(&args, FileConfig::default()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = FileConfig::parse("colour = \"red\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = parse(
            r#"
            alert_threshold = 30.0
            log_file = "from-file.log"

            [source]
            kind = "file"
            path = "summary.json"
            "#,
        );
        let args = Args::parse_from([
            "weather-dashboard",
            "--cities",
            "Paris,Prague",
            "--threshold",
            "-5",
            "--no-log",
        ]);
        let config = DashboardConfig::resolve(&args, file).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::OpenMeteo {
                cities: vec!["Paris".into(), "Prague".into()]
            }
        );
        assert_eq!(config.alert_threshold, -5.0);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let args = Args::parse_from(["weather-dashboard", "--timeout", "0"]);
        assert!(matches!(
            DashboardConfig::resolve(&args, FileConfig::default()),
            Err(ConfigError::Invalid(_))
        ));

        let args = Args::parse_from(["weather-dashboard", "--threshold", "NaN"]);
        assert!(matches!(
            DashboardConfig::resolve(&args, FileConfig::default()),
            Err(ConfigError::Invalid(_))
        ));

        let file = parse(
            r#"
            [source]
            kind = "open_meteo"
            cities = []
            "#,
        );
        assert!(DashboardConfig::resolve(&Args::default(), file).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = FileConfig::load(Path::new("/no/such/weather.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
