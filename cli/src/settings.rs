//! Layered configuration for the command line
//!
//! Defaults, then an optional config file, then `FILTER_BUILDER_*`
//! environment variables, then command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use filter_builder_core::FormConfig;

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub api_base: Option<String>,
    pub attempts: Option<u32>,
}

/// Build the effective configuration
pub fn load(config_path: Option<&str>, overrides: &Overrides) -> Result<FormConfig> {
    load_with_env(config_path, overrides, Environment::with_prefix("FILTER_BUILDER"))
}

fn load_with_env(config_path: Option<&str>, overrides: &Overrides, env: Environment) -> Result<FormConfig> {
    let mut builder = Config::builder().add_source(Config::try_from(&FormConfig::default())?);

    if let Some(path) = config_path {
        builder = builder.add_source(File::with_name(path));
    }

    let env = env.prefix_separator("_").separator("__").try_parsing(true);
    let mut config: FormConfig = builder
        .add_source(env)
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    if let Some(endpoint) = &overrides.endpoint {
        config.client.synopsis_url = endpoint.clone();
    }
    if let Some(api_base) = &overrides.api_base {
        config.client.api_base = api_base.clone();
    }
    if let Some(attempts) = overrides.attempts {
        config.client.max_attempts = attempts;
    }

    config.client.validate()?;
    Ok(config)
}
