//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::input::FileReader;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Dictionary loading configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Streaming configuration
    #[serde(default)]
    pub stream: StreamConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where clips come from and how their phrases are named
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory scanned recursively for clips
    pub audio_dir: Option<PathBuf>,

    /// JSON object mapping file names or stems to phrases
    pub name_map: Option<PathBuf>,

    /// Accepted clip extensions
    pub suffixes: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            audio_dir: None,
            name_map: None,
            suffixes: crate::dictionary::DEFAULT_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Streaming configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StreamConfig {
    /// In-band symbol treated as a hard boundary
    pub separator: char,

    /// Emit literal runs early after this many symbols
    pub literal_limit: Option<usize>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            separator: '\n',
            literal_limit: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if one was given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.stream.literal_limit == Some(0) {
            return Err(CliError::ConfigError(
                "stream.literal_limit must be greater than 0".to_string(),
            ));
        }
        if self.dictionary.suffixes.is_empty() {
            return Err(CliError::ConfigError(
                "dictionary.suffixes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
