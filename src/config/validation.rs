use crate::config::types::{CacheConfig, Config, RateLimitConfig, UpstreamConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_upstream_config(&config.upstream)?;
    validate_cache_config(&config.cache)?;
    validate_rate_limit_config(&config.rate_limit)?;
    Ok(())
}

/// Validates upstream site configuration
fn validate_upstream_config(config: &UpstreamConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    // Upstream paths are appended by concatenation
    if !config.base_url.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base-url must end with '/', got '{}'",
            config.base_url
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates cache configuration
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.ttl_secs == 0 {
        return Err(ConfigError::Validation("ttl-secs must be >= 1".to_string()));
    }

    if config.sweep_secs == 0 {
        return Err(ConfigError::Validation(
            "sweep-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates rate limit configuration
fn validate_rate_limit_config(config: &RateLimitConfig) -> Result<(), ConfigError> {
    if config.max_requests == 0 {
        return Err(ConfigError::Validation(
            "max-requests must be >= 1".to_string(),
        ));
    }

    if config.window_secs == 0 {
        return Err(ConfigError::Validation(
            "window-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}
