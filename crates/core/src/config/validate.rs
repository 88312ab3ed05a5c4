use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Every pre-registered lot has a positive limit
/// - Log filter is not blank
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Parking validation
    if let Some(position) = config.parking.lots.iter().position(|&limit| limit == 0) {
        return Err(ConfigError::ValidationError(format!(
            "parking.lots[{}] must be a positive limit",
            position
        )));
    }

    // Logging validation
    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.filter cannot be empty".to_string(),
        ));
    }

    Ok(())
}
