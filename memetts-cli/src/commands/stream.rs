//! Stream command implementation

use anyhow::{Context, Result};
use clap::Args;
use memetts_core::{Dictionary, Segmenter, SegmenterConfig, StreamEvent, StreamTokenizer};
use std::io::{self, BufRead};
use std::path::PathBuf;

use super::{open_output, record, resolve_format, CommonArgs, DictionaryArgs};
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::{OutputFormat, OutputFormatter};
use crate::unit::{self, TextUnit, Unit};

/// Arguments for the stream command
#[derive(Debug, Args)]
pub struct StreamArgs {
    /// Read from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Match phrases by character or by word
    #[arg(short, long, value_enum, default_value = "char")]
    pub unit: Unit,

    /// Character that ends a segment (default: newline)
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Emit literal runs once they reach this many symbols
    #[arg(short, long, value_name = "N")]
    pub literal_limit: Option<usize>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl StreamArgs {
    /// Execute the stream command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let dictionary = self.dictionary.load(&config.dictionary)?;

        let reader: Box<dyn BufRead> = match &self.input {
            Some(path) => Box::new(FileReader::open_buffered(path)?),
            None => Box::new(io::stdin().lock()),
        };

        match self.unit {
            Unit::Char => self.run::<String>(&dictionary, reader, &config),
            Unit::Word => self.run::<Vec<String>>(&dictionary, reader, &config),
        }
    }

    fn run<Q: TextUnit>(
        &self,
        dictionary: &Dictionary<String, PathBuf>,
        mut reader: Box<dyn BufRead>,
        config: &CliConfig,
    ) -> Result<()> {
        let separator = self.separator.unwrap_or(config.stream.separator);
        let segmenter_config = SegmenterConfig::builder()
            .literal_limit(self.literal_limit.or(config.stream.literal_limit))
            .build()?;
        let segmenter = Segmenter::with_config(unit::convert::<Q, _>(dictionary), segmenter_config);

        let format = resolve_format(self.format, config)?;
        let mut formatter = format.formatter(
            open_output(self.output.as_deref())?,
            config.output.pretty_json,
            true,
        );

        let mut session = Session {
            segmenter: &segmenter,
            tokenizer: segmenter.stream_tokenizer(),
            segment: 0,
        };

        let mut line = String::new();
        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                break;
            }

            for (index, part) in line.split(separator).enumerate() {
                if index > 0 {
                    session.tokenizer.flush();
                }
                session.tokenizer.push_seq(&Q::parse(part));
            }
            session.emit(formatter.as_mut())?;
        }

        session.tokenizer.finish();
        session.emit(formatter.as_mut())?;
        formatter.finish()?;

        log::info!("Stream closed after {} segments", session.segment + 1);
        Ok(())
    }
}

/// One tokenizer driven from input lines
struct Session<'s, Q: TextUnit> {
    segmenter: &'s Segmenter<Q, PathBuf>,
    tokenizer: StreamTokenizer<'s, Q>,
    segment: usize,
}

impl<Q: TextUnit> Session<'_, Q> {
    /// Write every decided event
    fn emit(&mut self, formatter: &mut dyn OutputFormatter) -> Result<()> {
        for event in self.tokenizer.drain() {
            match event {
                StreamEvent::Token(token) => {
                    formatter.format_token(&record(self.segmenter, &token, self.segment))?
                }
                StreamEvent::Boundary => {
                    formatter.format_boundary()?;
                    self.segment += 1;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(audio_dir: &TempDir, input: PathBuf, output: PathBuf) -> StreamArgs {
        StreamArgs {
            input: Some(input),
            output: Some(output),
            format: Some(OutputFormat::Json),
            unit: Unit::Char,
            separator: None,
            literal_limit: None,
            dictionary: DictionaryArgs {
                audio_dir: Some(audio_dir.path().to_path_buf()),
                ..DictionaryArgs::default()
            },
            common: CommonArgs {
                quiet: true,
                ..CommonArgs::default()
            },
        }
    }

    #[test]
    fn test_lines_are_segments() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("哈哈.wav"), b"").unwrap();
        let input = dir.path().join("chat.txt");
        let output = dir.path().join("out.jsonl");
        fs::write(&input, "哈\n哈哈好").unwrap();

        args(&dir, input, output.clone()).execute().unwrap();

        let lines: Vec<serde_json::Value> = fs::read_to_string(&output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let texts: Vec<(&str, u64)> = lines
            .iter()
            .map(|v| (v["text"].as_str().unwrap(), v["segment"].as_u64().unwrap()))
            .collect();
        assert_eq!(texts, [("哈", 0), ("哈哈", 1), ("好", 1)]);
        assert!(lines[1]["clip"].as_str().unwrap().ends_with("哈哈.wav"));
    }
}
