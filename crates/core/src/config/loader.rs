use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment variable overrides, e.g. `PARKWISE_PARKING__STYLE=max`
pub const ENV_PREFIX: &str = "PARKWISE_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from built-in defaults with environment variable overrides
pub fn load_default_config() -> Result<Config, ConfigError> {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parking::ParkingStyle;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[parking]
style = "max"
lots = [5]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.parking.style, ParkingStyle::Max);
        assert_eq!(config.parking.lots, vec![5]);
    }

    #[test]
    fn test_load_config_from_str_invalid() {
        let toml = r#"
[parking]
lots = "three"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/parkwise.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        // Jail holds the env lock so concurrent env overrides cannot leak in.
        figment::Jail::expect_with(|_jail| {
            let mut temp_file = NamedTempFile::new().unwrap();
            writeln!(
                temp_file,
                r#"
[parking]
style = "vacant"
lots = [3, 2, 1]

[metrics]
dump_on_exit = true
"#
            )
            .unwrap();

            let config = load_config(temp_file.path()).unwrap();
            assert_eq!(config.parking.style, ParkingStyle::Vacant);
            assert_eq!(config.parking.lots, vec![3, 2, 1]);
            assert!(config.metrics.dump_on_exit);
            assert_eq!(config.logging.filter, "warn");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "parkwise.toml",
                r#"
[parking]
style = "default"
"#,
            )?;
            jail.set_env("PARKWISE_PARKING__STYLE", "max");

            let config = load_config(Path::new("parkwise.toml")).unwrap();
            assert_eq!(config.parking.style, ParkingStyle::Max);
            Ok(())
        });
    }

    #[test]
    fn test_load_default_config_reads_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PARKWISE_METRICS__DUMP_ON_EXIT", "true");

            let config = load_default_config().unwrap();
            assert!(config.metrics.dump_on_exit);
            assert_eq!(config.parking.style, ParkingStyle::Default);
            Ok(())
        });
    }
}
