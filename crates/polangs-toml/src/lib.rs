#![doc = include_str!("../README.md")]

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "polangs.toml";

/// Default directory holding the translation files.
pub const DEFAULT_PO_DIRECTORY: &str = "po";

/// Default path of the language to territory map.
pub const DEFAULT_TERRITORIES: &str = "territories.json";

/// Default coverage threshold, in percent.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Default statistics program.
pub const DEFAULT_MSGFMT: &str = "msgfmt";

#[derive(Debug, Error)]
pub enum LangsConfigError {
    /// Configuration file not found.
    #[error("polangs.toml configuration file not found: {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The threshold is not a percentage.
    #[error("Invalid threshold {0}: expected a percentage between 0 and 100")]
    InvalidThreshold(u8),
}

/// The configuration for `polangs`.
///
/// Every field is optional: command line flags take precedence, and missing
/// values fall back to the `DEFAULT_*` constants.
///
/// ```toml
/// po_directory = "po"
/// territories = "territories.json"
/// threshold = 70
/// msgfmt = "msgfmt"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LangsConfig {
    /// Directory containing the `<language>[_<territory>].po` files.
    #[serde(default)]
    pub po_directory: Option<PathBuf>,
    /// JSON file mapping a language to its default territory.
    #[serde(default)]
    pub territories: Option<PathBuf>,
    /// Minimum coverage, in percent, for a language to be listed.
    #[serde(default)]
    pub threshold: Option<u8>,
    /// Program used to compute the catalog statistics.
    #[serde(default)]
    pub msgfmt: Option<String>,
}

impl LangsConfig {
    /// Reads the configuration from a path.
    ///
    /// Relative paths inside the file are resolved against the directory that
    /// contains it.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LangsConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LangsConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs_err::read_to_string(path)?;
        let config: LangsConfig = toml::from_str(&content)?;
        config.validate()?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.relative_to(base_dir))
    }

    /// Looks for `polangs.toml` in `dir`.
    ///
    /// Returns `Ok(None)` when there is no such file.
    pub fn discover(dir: &Path) -> Result<Option<Self>, LangsConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::read_from_path(path).map(Some)
    }

    fn validate(&self) -> Result<(), LangsConfigError> {
        match self.threshold {
            Some(threshold) if threshold > 100 => Err(LangsConfigError::InvalidThreshold(threshold)),
            _ => Ok(()),
        }
    }

    fn relative_to(self, base_dir: &Path) -> Self {
        let join = |path: PathBuf| {
            if path.is_relative() && base_dir != Path::new("") {
                base_dir.join(path)
            } else {
                path
            }
        };

        Self {
            po_directory: self.po_directory.map(join),
            territories: self.territories.map(join),
            ..self
        }
    }

    /// Returns the configured po directory, or the default one.
    pub fn po_directory_or_default(&self) -> PathBuf {
        self.po_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PO_DIRECTORY))
    }

    /// Returns the configured territory map path, or the default one.
    pub fn territories_or_default(&self) -> PathBuf {
        self.territories
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TERRITORIES))
    }

    /// Returns the configured threshold, or the default one.
    pub fn threshold_or_default(&self) -> u8 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Returns the configured statistics program, or the default one.
    pub fn msgfmt_or_default(&self) -> String {
        self.msgfmt
            .clone()
            .unwrap_or_else(|| DEFAULT_MSGFMT.to_string())
    }
}
