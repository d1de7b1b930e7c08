//! src/configuration.rs
use serde_aux::field_attributes::deserialize_bool_from_anything;
use std::path::PathBuf;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub job: JobSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct JobSettings {
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub verbose: bool,
    /// Text file to count words in. The built-in sample data is used when unset.
    #[serde(default)]
    pub input: Option<PathBuf>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    pub log_filter: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("mapreduce.yaml")))
        .add_source(
            config::Environment::with_prefix("MAPREDUCE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
