//! Agent configuration, loadable from TOML with env-var credentials.

use serde::Deserialize;

use fg_racing_api::RacingApiConfig;

/// Top-level configuration for the agent binary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    /// Remote racing-data API settings.
    #[serde(default)]
    pub racing_api: RacingApiConfig,
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from file when it exists, defaults otherwise; credentials
    /// from the environment win either way.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let mut config = if std::path::Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::info!(path, "no config file found, using defaults");
            Self::default()
        };
        config.racing_api.apply_env_credentials();
        Ok(config)
    }
}
