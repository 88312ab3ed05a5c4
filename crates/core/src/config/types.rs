use serde::{Deserialize, Serialize};

use crate::parking::ParkingStyle;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub parking: ParkingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Parking configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ParkingConfig {
    /// Style the attendant starts with
    #[serde(default)]
    pub style: ParkingStyle,
    /// Limits of lots registered at startup, in registration order
    #[serde(default)]
    pub lots: Vec<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Metrics configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// Print metrics in Prometheus text format to stderr on exit
    #[serde(default)]
    pub dump_on_exit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[parking]
style = "vacant"
lots = [3, 2, 1]

[logging]
filter = "parkwise_core=debug"
format = "json"

[metrics]
dump_on_exit = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.parking.style, ParkingStyle::Vacant);
        assert_eq!(config.parking.lots, vec![3, 2, 1]);
        assert_eq!(config.logging.filter, "parkwise_core=debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.metrics.dump_on_exit);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.parking.style, ParkingStyle::Default);
        assert!(config.parking.lots.is_empty());
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(!config.metrics.dump_on_exit);
    }

    #[test]
    fn test_deserialize_partial_logging_section() {
        let toml = r#"
[logging]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_deserialize_unknown_style_fails() {
        let toml = r#"
[parking]
style = "smallest"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config {
            parking: ParkingConfig {
                style: ParkingStyle::Max,
                lots: vec![10, 20],
            },
            ..Default::default()
        };
        let rendered = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
