use serde::Deserialize;

/// Top-level configuration settings for the translator.
///
/// Includes settings for both the mapper and logging.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub mapper: MapperSettings,
    pub logging: LoggingSettings,
}

/// Configuration settings for the message mapper.
///
/// `strict_annotations` decides whether a mistyped reserved annotation fails
/// the inbound translation or is passed through as a plain property.
/// `property_capacity_hint` is added to the number of application properties
/// when pre-sizing the domain property map.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MapperSettings {
    pub strict_annotations: bool,
    pub property_capacity_hint: usize,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub mapper: Option<PartialMapperSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

/// Partial mapper settings.
#[derive(Debug, Deserialize)]
pub struct PartialMapperSettings {
    pub strict_annotations: Option<bool>,
    pub property_capacity_hint: Option<usize>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

impl Default for MapperSettings {
    fn default() -> Self {
        Self {
            strict_annotations: true,
            // one slot per reserved annotation
            property_capacity_hint: 5,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Provides default values for `Settings`.
impl Default for Settings {
    fn default() -> Self {
        Self {
            mapper: MapperSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
