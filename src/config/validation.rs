use crate::config::types::{Config, CrawlerConfig, InputConfig, OutputConfig};
use crate::ConfigError;

/// Upper bound for the per-request timeout (seconds)
const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.fetch_timeout_secs < 1 || config.fetch_timeout_secs > MAX_FETCH_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be between 1 and {}, got {}",
            MAX_FETCH_TIMEOUT_SECS, config.fetch_timeout_secs
        )));
    }

    if config.max_pages_per_seed == Some(0) {
        return Err(ConfigError::Validation(
            "max_pages_per_seed must be >= 1 when set".to_string(),
        ));
    }

    if config.max_seconds_per_seed == Some(0) {
        return Err(ConfigError::Validation(
            "max_seconds_per_seed must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.manifest_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "manifest_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.urls_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "urls_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}
