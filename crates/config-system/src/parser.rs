//! Parser for chart option overrides in multiple formats

use std::str::FromStr;

use crate::{ChartOptionsOverride, ConfigError, Result};

/// Override text format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    #[default]
    Json,
    Toml,
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::Parse(format!(
                "Unsupported override format: {}",
                name
            ))),
        }
    }
}

/// Option override parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse overrides from a string
    pub fn parse_string(content: &str, format: ConfigFormat) -> Result<ChartOptionsOverride> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("YAML parse error: {}", e))),
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e))),
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e))),
        }
    }

    /// Parse overrides given with an optional format name, JSON when absent
    pub fn parse_named(content: &str, format: Option<&str>) -> Result<ChartOptionsOverride> {
        let format = match format {
            Some(name) => name.parse()?,
            None => ConfigFormat::default(),
        };
        Self::parse_string(content, format)
    }
}
