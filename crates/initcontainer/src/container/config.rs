use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Serialization formats a [`ContainerConfig`] can be read from or written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    #[cfg(feature = "yaml-config")]
    Yaml,
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Layout of a container: how many levels it has and, optionally, what to
/// call them in log output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub num_levels: usize,
    /// Names for levels `0..level_names.len()`. Remaining levels are unnamed.
    pub level_names: Vec<String>,
}

impl ContainerConfig {
    pub fn new(num_levels: usize) -> Self {
        Self {
            num_levels,
            level_names: Vec::new(),
        }
    }

    /// Set one name per level, in level order
    pub fn with_level_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.level_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.level_names.len() > self.num_levels {
            return Err(Error::InvalidConfig {
                reason: format!(
                    "{} level names given for {} levels",
                    self.level_names.len(),
                    self.num_levels
                ),
            });
        }
        if let Some(position) = self.level_names.iter().position(|name| name.trim().is_empty()) {
            return Err(Error::InvalidConfig {
                reason: format!("name for level {} is empty", position),
            });
        }
        Ok(())
    }

    /// Parse and validate a config from a string in the given format
    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| parse_error(format, e))?,
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| parse_error(format, e))?,
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| parse_error(format, e))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize this config in the given format
    pub fn to_string(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| serialize_error(format, e))
            }
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| serialize_error(format, e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| serialize_error(format, e)),
        }
    }

    /// Read a config file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::InvalidConfig {
            reason: format!("unsupported config format for path: {}", path.display()),
        })?;
        let data = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded container config from {}", path.display());
        Self::parse(&data, format)
    }
}

fn parse_error<E>(format: ConfigFormat, source: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::ConfigParse {
        format: format.to_string(),
        source: Box::new(source),
    }
}

fn serialize_error<E>(format: ConfigFormat, source: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::ConfigSerialize {
        format: format.to_string(),
        source: Box::new(source),
    }
}
