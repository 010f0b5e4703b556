//! Configuration commands.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", ClientConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    if config.display.max_title_length == Some(0) {
        return Err(ClientError::Config(
            "display.max_title_length must be greater than zero".to_string(),
        ));
    }

    let events_path = config.events_path();
    if events_path.is_dir() {
        return Err(ClientError::Config(format!(
            "store.events_path points to a directory: {}",
            events_path.display()
        )));
    }

    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration and events file paths.
pub fn path(config: &ClientConfig) -> ClientResult<()> {
    println!("config: {}", ClientConfig::default_path().display());
    println!("events: {}", config.events_path().display());
    Ok(())
}
