//! The `config` module loads translator settings from an optional
//! `config/default.{toml,yaml,json}` file and `IOTHUB_AMQP_*` environment
//! variables, falling back to defaults for anything left unset.
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `IOTHUB_AMQP_MAPPER__STRICT_ANNOTATIONS=false`.

mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{LoggingSettings, MapperSettings, Settings};

const DEFAULT_CONFIG_FILE: &str = "config/default";
const ENV_PREFIX: &str = "IOTHUB_AMQP";

/// Loads the configuration from the default file and environment variables.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(DEFAULT_CONFIG_FILE)
}

/// Loads the configuration from `path` (extension optional, file optional)
/// and environment variables, then merges with default values.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        mapper: MapperSettings {
            strict_annotations: partial
                .mapper
                .as_ref()
                .and_then(|m| m.strict_annotations)
                .unwrap_or(default.mapper.strict_annotations),
            property_capacity_hint: partial
                .mapper
                .as_ref()
                .and_then(|m| m.property_capacity_hint)
                .unwrap_or(default.mapper.property_capacity_hint),
        },
        logging: LoggingSettings {
            level: partial
                .logging
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.logging.level),
        },
    })
}
