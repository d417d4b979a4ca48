use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TASK_FILE: &str = "tasks.json";

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    /// Where the task list is kept, relative to the working directory unless
    /// absolute.
    pub file: PathBuf,
}

impl Config {
    /// Loads configuration from `TASK_CLI_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_environment(config::Environment::with_prefix("TASK_CLI"))
    }

    fn from_environment(environment: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("file", DEFAULT_TASK_FILE)?
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
