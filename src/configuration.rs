//! src/configuration.rs
use std::path::Path;

pub const ENV_PREFIX: &str = "GOAL_TALLY";

/// Ambient settings only. Nothing here changes what a stage reads or writes.
#[derive(serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
}

/// Wire values of the mapper stage. Not read from files or the environment;
/// the binary always runs with [`PipelineSettings::default`].
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineSettings {
    pub delimiter: char,
    pub key_separator: String,
    pub header_prefix: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            key_separator: "|".to_string(),
            header_prefix: "id,".to_string(),
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    get_configuration_from(&base_path.join("configuration"))
}

/// Layers `base.yaml` from `config_dir` (optional) under `GOAL_TALLY_*`
/// environment variables, e.g. `GOAL_TALLY_LOGGING__LEVEL=debug`.
pub fn get_configuration_from(config_dir: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}

/// Like [`get_configuration`], but an unreadable configuration yields the
/// defaults together with the error so the caller can report it once
/// logging is up.
pub fn get_configuration_or_default() -> (Settings, Option<config::ConfigError>) {
    match get_configuration() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    }
}
