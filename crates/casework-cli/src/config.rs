use anyhow::{Context, Result};
use casework::{Inflection, Style};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// File loaded from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "Casework.toml";

/// Configuration for Casework CLI operations
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Settings for the `keys` command
    pub keys: KeysConfig,
}

/// Configuration for renaming JSON object keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeysConfig {
    /// Style every key is converted to
    pub style: Style,

    /// Rename keys of nested objects too, not only the top level
    pub recursive: bool,

    /// Inflection applied to the last word of every key
    pub inflect: Option<Inflection>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key renaming configuration
    pub fn keys(mut self, keys: KeysConfig) -> Self {
        self.keys = keys;
        self
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        contents
            .parse::<Config>()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load a config from a TOML file, falling back to the defaults when the
    /// file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            log::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            log::debug!("no config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            style: Style::Camel,
            recursive: true,
            inflect: None,
        }
    }
}

impl KeysConfig {
    /// Create a new KeysConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set whether nested objects are renamed
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the inflection applied to each key
    pub fn inflect(mut self, inflect: Option<Inflection>) -> Self {
        self.inflect = inflect;
        self
    }
}
