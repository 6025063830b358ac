//! Racing API connection configuration.

use serde::Deserialize;

/// Environment variable overriding the configured username.
pub const ENV_USERNAME: &str = "RACING_API_USERNAME";
/// Environment variable overriding the configured password.
pub const ENV_PASSWORD: &str = "RACING_API_PASSWORD";

/// Connection settings for the remote racing-data API.
///
/// Credentials are the two strings the hosting runtime supplies; every
/// outbound request carries them as a Basic-auth header.
#[derive(Debug, Clone, Deserialize)]
pub struct RacingApiConfig {
    /// API base URL, without the /v1 prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Basic-auth username.
    #[serde(default)]
    pub username: String,
    /// Basic-auth password.
    #[serde(default)]
    pub password: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Minimum interval between paced bulk-range calls, in milliseconds.
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
    /// Region scope for meet listings (e.g. "gb", "ire").
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_base_url() -> String {
    "https://api.theracingapi.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_pacing_ms() -> u64 {
    500
}

fn default_region() -> String {
    "gb".to_string()
}

impl RacingApiConfig {
    /// Overlay credentials from the environment, when present.
    pub fn apply_env_credentials(&mut self) {
        if let Ok(user) = std::env::var(ENV_USERNAME) {
            self.username = user;
        }
        if let Ok(pass) = std::env::var(ENV_PASSWORD) {
            self.password = pass;
        }
    }
}

impl Default for RacingApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
            pacing_ms: default_pacing_ms(),
            region: default_region(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RacingApiConfig::default();
        assert_eq!(config.base_url, "https://api.theracingapi.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.pacing_ms, 500);
        assert_eq!(config.region, "gb");
        assert!(config.username.is_empty());
    }

    #[test]
    fn deserialize_from_toml() {
        let toml_str = r#"
base_url = "http://localhost:9999"
username = "api-user"
password = "api-pass"
timeout_secs = 3
pacing_ms = 250
region = "ire"
"#;
        let config: RacingApiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.username, "api-user");
        assert_eq!(config.password, "api-pass");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.pacing_ms, 250);
        assert_eq!(config.region, "ire");
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: RacingApiConfig = toml::from_str(r#"username = "u""#).unwrap();
        assert_eq!(config.username, "u");
        assert_eq!(config.base_url, "https://api.theracingapi.com");
        assert_eq!(config.pacing_ms, 500);
    }
}
