//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use memetts_core::{Classified, Dictionary, Segmenter, Token};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{CliConfig, DictionaryConfig};
use crate::dictionary::{load_dictionary, load_name_map, NameMap};
use crate::error::CliError;
use crate::output::{OutputFormat, TokenRecord};
use crate::unit::TextUnit;

pub mod list;
pub mod split;
pub mod stream;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text or files into clip and speech tokens
    Split(split::SplitArgs),

    /// Split stdin incrementally, printing tokens as they are decided
    Stream(stream::StreamArgs),

    /// Check a JSON phrase file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Stream(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "MEMETTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Load the configuration file, or defaults
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }
}

/// Where to find the clip dictionary
#[derive(Debug, Clone, Default, Args)]
pub struct DictionaryArgs {
    /// Directory scanned recursively for audio clips
    #[arg(short, long, value_name = "DIR", env = "MEMETTS_AUDIO_DIR")]
    pub audio_dir: Option<PathBuf>,

    /// JSON object mapping clip file names or stems to phrases
    #[arg(short = 'm', long, value_name = "FILE")]
    pub name_map: Option<PathBuf>,

    /// Accepted clip extensions (default: wav, mp3, flac, m4a)
    #[arg(long = "suffix", value_name = "EXT", value_delimiter = ',')]
    pub suffixes: Vec<String>,
}

impl DictionaryArgs {
    /// Load the dictionary, command-line options taking precedence over the
    /// configuration file
    pub fn load(&self, config: &DictionaryConfig) -> Result<Dictionary<String, PathBuf>> {
        let audio_dir = self
            .audio_dir
            .as_ref()
            .or(config.audio_dir.as_ref())
            .ok_or(CliError::AudioDirMissing)?;

        let name_map = match self.name_map.as_ref().or(config.name_map.as_ref()) {
            Some(path) => load_name_map(path)?,
            None => NameMap::new(),
        };

        let suffixes = if self.suffixes.is_empty() {
            &config.suffixes
        } else {
            &self.suffixes
        };

        load_dictionary(audio_dir, &name_map, suffixes)
    }
}

/// Pick the output format from the flag or the configuration file
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => Ok(OutputFormat::from_config(&config.output.default_format)?),
    }
}

/// Output file, or stdout
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Tag a token with its clip, if it has one
pub(crate) fn record<Q: TextUnit>(
    segmenter: &Segmenter<Q, PathBuf>,
    token: &Token<Q>,
    segment: usize,
) -> TokenRecord {
    let text = token.as_seq().render();
    match segmenter.classify(token) {
        Classified::Clip(path) => TokenRecord::clip(text, path, segment),
        Classified::Speech => TokenRecord::speech(text, segment),
    }
}
