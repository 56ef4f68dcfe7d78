use crate::config::types::{CrawlConfig, FetchConfig};
use crate::{ConfigError, ConfigResult};
use tokio::sync::Semaphore;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &CrawlConfig) -> ConfigResult<()> {
    if config.workers < 1 {
        return Err(ConfigError::Validation(format!(
            "thread count must be at least 1, got {}",
            config.workers
        )));
    }

    if config.workers > Semaphore::MAX_PERMITS {
        return Err(ConfigError::Validation(format!(
            "thread count must be at most {}, got {}",
            Semaphore::MAX_PERMITS,
            config.workers
        )));
    }

    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates transport configuration
fn validate_fetch_config(config: &FetchConfig) -> ConfigResult<()> {
    if config.timeout.is_zero() {
        return Err(ConfigError::Validation(
            "request timeout must be greater than zero".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Parses and checks the seed URL given on the command line
///
/// The seed must be an absolute `http` or `https` URL with a host, since the
/// host is what every discovered link is classified against.
pub fn parse_seed_url(seed: &str) -> ConfigResult<Url> {
    let url = Url::parse(seed.trim()).map_err(|e| ConfigError::InvalidUrl {
        url: seed.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::MissingHost(seed.to_string()));
    }

    Ok(url)
}
