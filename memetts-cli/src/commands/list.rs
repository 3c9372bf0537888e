//! List command implementation

use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::{self, Write};

use super::{CommonArgs, DictionaryArgs};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List dictionary phrases with the clip each one plays
    Phrases(PhrasesArgs),

    /// List available output formats
    Formats,
}

/// Arguments for `list phrases`
#[derive(Debug, Args)]
pub struct PhrasesArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Phrases(args) => args.execute(),
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      - One clip/speech tagged token per line");
                println!("  json      - JSON array of tokens (JSON lines when streaming)");
                println!("  markdown  - Numbered Markdown list with totals");
                Ok(())
            }
        }
    }
}

impl PhrasesArgs {
    fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let config = self.common.load_config()?;
        let dictionary = self.dictionary.load(&config.dictionary)?;

        let mut out = io::stdout().lock();
        for (phrase, clip) in dictionary.iter() {
            writeln!(out, "{}\t{}", phrase, clip.display())?;
        }
        out.flush()?;

        if !self.common.quiet {
            eprintln!("{} phrases", dictionary.len());
        }
        Ok(())
    }
}
