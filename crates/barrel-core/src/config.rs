//! Configuration structures for the barrel index generator.
//!
//! - [`GenerateConfig`] - Generator settings (extensions, overwrite policy, separator)
//! - [`Config`] - Root configuration, loadable from a JSON file
//!
//! All configuration types implement [`Default`]; a missing or partial config
//! file falls back to those defaults field by field.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::SourceExtension;

/// What to do when the target directory already has an index file.
///
/// # Examples
///
/// ```
/// use barrel_core::OverwritePolicy;
///
/// assert_eq!(OverwritePolicy::default(), OverwritePolicy::OverwriteIfExportOnly);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// Any existing index is left untouched and reported as a conflict.
    NeverOverwrite,

    /// An existing index is regenerated when it holds nothing but exports;
    /// one with imports or other logic is reported as a conflict.
    #[default]
    OverwriteIfExportOnly,
}

/// Text placed between rendered statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// One statement per line.
    #[default]
    Newline,

    /// A blank line between statements.
    BlankLine,
}

impl Separator {
    /// Returns the separator text.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newline => "\n",
            Self::BlankLine => "\n\n",
        }
    }
}

/// Configuration for index generation.
///
/// # Examples
///
/// ```
/// use barrel_core::{GenerateConfig, OverwritePolicy, Separator, SourceExtension};
///
/// let config = GenerateConfig::default();
/// assert_eq!(config.extensions, SourceExtension::ALL.to_vec());
/// assert_eq!(config.overwrite_policy, OverwritePolicy::OverwriteIfExportOnly);
/// assert_eq!(config.separator, Separator::Newline);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Source extensions considered for re-export.
    pub extensions: Vec<SourceExtension>,

    /// Policy applied to an existing index file.
    pub overwrite_policy: OverwritePolicy,

    /// Separator between rendered statements.
    pub separator: Separator,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            extensions: SourceExtension::ALL.to_vec(),
            overwrite_policy: OverwritePolicy::default(),
            separator: Separator::default(),
        }
    }
}

impl GenerateConfig {
    /// Checks the configuration for values the generator cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] when `extensions` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::invalid_option(
                "extensions",
                "at least one of js, ts, jsx, tsx is required",
            ));
        }
        Ok(())
    }
}

/// Root configuration for barrel.
///
/// # Examples
///
/// ```
/// use barrel_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// let parsed: Config = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, parsed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generator configuration.
    pub generate: GenerateConfig,
}

impl Config {
    /// Loads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid JSON for this schema, and
    /// [`ConfigError::InvalidOption`] if validation fails.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.generate.validate()?;
        Ok(config)
    }
}
