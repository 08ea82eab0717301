//! Key/value configuration storage
//!
//! Values are stored as text and converted on access through [`ConfigValue`],
//! so the type requested at read time decides how a value is interpreted.
//! A configuration persists as a flat TOML table.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

/// A type that can be written to and read back from a configuration value.
pub trait ConfigValue: Sized {
    /// Error produced when the stored text cannot be parsed.
    type Err: StdError + Send + Sync + 'static;

    /// Render the value as configuration text.
    fn to_config_string(&self) -> String;

    /// Parse a value from configuration text.
    fn from_config_str(value: &str) -> Result<Self, Self::Err>;
}

macro_rules! impl_config_value_via_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConfigValue for $ty {
                type Err = <$ty as std::str::FromStr>::Err;

                fn to_config_string(&self) -> String {
                    self.to_string()
                }

                fn from_config_str(value: &str) -> Result<Self, Self::Err> {
                    value.trim().parse()
                }
            }
        )*
    };
}

impl_config_value_via_parse!(bool, i32, i64, u32, u64, f32, f64);

impl ConfigValue for String {
    type Err = Infallible;

    fn to_config_string(&self) -> String {
        self.clone()
    }

    fn from_config_str(value: &str) -> Result<Self, Self::Err> {
        Ok(value.to_owned())
    }
}

/// Errors that can occur while reading, writing, or querying a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access configuration file '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing configuration key '{0}'")]
    MissingKey(String),

    #[error("invalid value '{value}' for key '{key}'")]
    InvalidValue {
        key: String,
        value: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("unsupported value for key '{0}': arrays and tables cannot be stored")]
    Unsupported(String),
}

/// Flat string key to string value store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, String>,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a typed value under `key`, replacing any previous value.
    pub fn set_value<T: ConfigValue>(&mut self, key: impl Into<String>, value: &T) {
        self.values.insert(key.into(), value.to_config_string());
    }

    /// Store raw text under `key`.
    pub fn set_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw text stored under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parse the value stored under `key` as `T`.
    pub fn value_as<T: ConfigValue>(&self, key: &str) -> Result<T, ConfigError> {
        let raw = self
            .value(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_owned()))?;

        T::from_config_str(raw).map_err(|e| ConfigError::InvalidValue {
            key: key.to_owned(),
            value: raw.to_owned(),
            source: Box::new(e),
        })
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove `key`, returning its raw text if it was present.
    pub fn remove_value(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Stored keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a configuration from a flat TOML table.
    ///
    /// Scalar TOML values (numbers, booleans, datetimes) are accepted and kept
    /// in their textual form, so `angle = 25.3` and `angle = "25.3"` are read
    /// identically.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = text.parse()?;

        let mut values = BTreeMap::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    return Err(ConfigError::Unsupported(key));
                }
            };
            values.insert(key, text);
        }

        Ok(Self { values })
    }

    /// Render the configuration as a TOML table with string values.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(&self.values)?)
    }

    /// Load a configuration file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {:?} ({} keys)", path, config.len());
        Ok(config)
    }

    /// Save the configuration to disk, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(dir.to_path_buf(), e))?;
            }
        }

        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }
}
