use crate::cli::Args;
use crate::types::{Config, PhantomEyeError};

/// Builds the runtime configuration for one invocation.
///
/// There is no configuration file: everything starts from `Config::default()`
/// and the parsed arguments only contribute the target domain, which is
/// validated here together with the defaults.
pub fn load_config(args: &Args) -> Result<Config, PhantomEyeError> {
    let config = Config::default();

    validate_domain(&args.domain)?;
    validate_config(&config)?;

    Ok(config)
}

pub fn validate_domain(domain: &str) -> Result<(), PhantomEyeError> {
    if domain.trim().is_empty() {
        return Err(PhantomEyeError::InvalidDomain(
            "The target domain must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_config(config: &Config) -> Result<(), PhantomEyeError> {
    if config.timeout.is_zero() {
        return Err(PhantomEyeError::ConfigError("Timeout must be greater than 0".to_string()));
    }
    if config.max_subdomains == 0 {
        return Err(PhantomEyeError::ConfigError(
            "Subdomain limit must be greater than 0".to_string(),
        ));
    }
    if !config.output_dir.is_dir() {
        return Err(PhantomEyeError::ConfigError(format!(
            "Output directory does not exist: {}",
            config.output_dir.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_subdomains, 20);
        assert_eq!(config.progress_steps, 8);
    }

    #[test]
    fn test_load_config_rejects_blank_domain() {
        let args = Args { domain: "   ".to_string() };
        assert!(matches!(load_config(&args), Err(PhantomEyeError::InvalidDomain(_))));
    }

    #[test]
    fn test_validate_config_rejects_zero_values() {
        let config = Config { timeout: Duration::ZERO, ..Config::default() };
        assert!(validate_config(&config).is_err());

        let config = Config { max_subdomains: 0, ..Config::default() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_rejects_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config { output_dir: dir.path().join("missing"), ..Config::default() };
        assert!(matches!(validate_config(&config), Err(PhantomEyeError::ConfigError(_))));
    }
}
