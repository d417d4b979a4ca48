use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Loads configuration from `GITHUB_ACTIVITY_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_environment(config::Environment::with_prefix("GITHUB_ACTIVITY"))
    }

    fn from_environment(environment: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        config::Environment::with_prefix("GITHUB_ACTIVITY").source(Some(source))
    }

    #[test]
    fn test_defaults_to_public_api() {
        let config = Config::from_environment(environment(&[])).unwrap();

        assert_eq!(config.api_base_url, "https://api.github.com");
    }

    #[test]
    fn test_api_base_url_override() {
        let config = Config::from_environment(environment(&[(
            "GITHUB_ACTIVITY_API_BASE_URL",
            "http://127.0.0.1:8080",
        )]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }
}
