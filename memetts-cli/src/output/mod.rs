//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::error::CliError;

/// One emitted token as the CLI presents it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Token text
    pub text: String,
    /// Clip to play, or None when the text is spoken
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub clip: Option<String>,
    /// Input document or stream segment the token belongs to
    pub segment: usize,
}

impl TokenRecord {
    /// A token that plays a clip
    pub fn clip(text: String, clip: &Path, segment: usize) -> Self {
        Self {
            text,
            clip: Some(clip.display().to_string()),
            segment,
        }
    }

    /// A token that is spoken
    pub fn speech(text: String, segment: usize) -> Self {
        Self {
            text,
            clip: None,
            segment,
        }
    }

    /// `clip` or `speech`
    pub fn kind(&self) -> &'static str {
        if self.clip.is_some() {
            "clip"
        } else {
            "speech"
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single token
    fn format_token(&mut self, token: &TokenRecord) -> Result<()>;

    /// Mark the end of a document or stream segment
    fn format_boundary(&mut self) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tagged token per line
    Text,
    /// JSON array of tokens, or JSON lines when streaming
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from the configuration file
    pub fn from_config(name: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")))
    }

    /// Create a formatter writing to `writer`
    ///
    /// Streaming formatters write each token as soon as it arrives.
    pub fn formatter<W: Write + Send + Sync + 'static>(
        self,
        writer: W,
        pretty_json: bool,
        streaming: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json if streaming => Box::new(JsonFormatter::lines(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
