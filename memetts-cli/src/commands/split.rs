//! Split command implementation

use anyhow::Result;
use clap::Args;
use memetts_core::{reference, Dictionary, Segmenter};
use rayon::prelude::*;
use std::path::PathBuf;

use super::{open_output, record, resolve_format, CommonArgs, DictionaryArgs};
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, TokenRecord};
use crate::progress::ProgressReporter;
use crate::unit::{self, TextUnit, Unit};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Text to split
    #[arg(value_name = "TEXT", required_unless_present = "input")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Match phrases by character or by word
    #[arg(short, long, value_enum, default_value = "char")]
    pub unit: Unit,

    /// Use the brute-force reference tokenizer
    #[arg(long)]
    pub reference: bool,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// One input document
#[derive(Debug)]
enum Document {
    Text { index: usize, text: String },
    File(PathBuf),
}

impl Document {
    fn name(&self) -> String {
        match self {
            Document::Text { index, .. } => format!("<text {}>", index + 1),
            Document::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Document::Text { text, .. } => Ok(text.clone()),
            Document::File(path) => FileReader::read_text(path),
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let dictionary = self.dictionary.load(&config.dictionary)?;
        let documents = self.documents()?;

        match self.unit {
            Unit::Char => self.run::<String>(&dictionary, &documents, &config),
            Unit::Word => self.run::<Vec<String>>(&dictionary, &documents, &config),
        }
    }

    fn documents(&self) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .text
            .iter()
            .enumerate()
            .map(|(index, text)| Document::Text {
                index,
                text: text.clone(),
            })
            .collect();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} files to segment", files.len());
            documents.extend(files.into_iter().map(Document::File));
        }
        Ok(documents)
    }

    fn run<Q>(
        &self,
        dictionary: &Dictionary<String, PathBuf>,
        documents: &[Document],
        config: &CliConfig,
    ) -> Result<()>
    where
        Q: TextUnit + Send + Sync,
        Q::Symbol: Send + Sync,
    {
        let format = resolve_format(self.format, config)?;
        let segmenter = Segmenter::new(unit::convert::<Q, _>(dictionary));
        let phrases = self.reference.then(|| segmenter.dictionary().phrase_set());

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(documents.len() as u64);

        let results = documents
            .par_iter()
            .enumerate()
            .map(|(segment, document)| -> Result<Vec<TokenRecord>> {
                let text = Q::parse(&document.read()?);
                let tokens = match &phrases {
                    Some(phrases) => reference::split(&text, phrases),
                    None => segmenter.split(&text),
                };
                log::debug!("{}: {} tokens", document.name(), tokens.len());
                progress.file_completed(&document.name());

                Ok(tokens
                    .iter()
                    .map(|token| record(&segmenter, token, segment))
                    .collect())
            })
            .collect::<Result<Vec<_>>>()?;
        progress.finish();

        let mut formatter = format.formatter(
            open_output(self.output.as_deref())?,
            config.output.pretty_json,
            false,
        );
        for (index, tokens) in results.iter().enumerate() {
            if index > 0 {
                formatter.format_boundary()?;
            }
            for token in tokens {
                formatter.format_token(token)?;
            }
        }
        formatter.finish()?;

        log::info!("Segmentation complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_names() {
        let text = Document::Text {
            index: 0,
            text: "哈哈".to_string(),
        };
        assert_eq!(text.name(), "<text 1>");
        assert_eq!(text.read().unwrap(), "哈哈");

        let file = Document::File(PathBuf::from("chat/log.txt"));
        assert_eq!(file.name(), "chat/log.txt");
    }

    #[test]
    fn test_missing_input_file_fails() {
        let file = Document::File(PathBuf::from("/nonexistent/log.txt"));
        assert!(file.read().is_err());
    }
}
