//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use memetts_core::{AnySequence, AnyTrie};
use std::path::{Path, PathBuf};

use super::CommonArgs;
use crate::input::FileReader;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// JSON array of phrases: strings, or arrays of words
    #[arg(value_name = "FILE")]
    pub phrases: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        println!("Validating phrase file: {}", self.phrases.display());

        match load_phrase_file(&self.phrases) {
            Ok(trie) => {
                println!("✓ Phrase file is valid!");
                println!("  Kind: {}", trie.kind());
                println!("  Phrases: {}", trie.len());
                println!("  Longest phrase: {} symbols", trie.max_phrase_len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Phrase file is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Build a prefix tree from a JSON phrase file
fn load_phrase_file(path: &Path) -> Result<AnyTrie> {
    let content = FileReader::read_text(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse phrase file: {}", path.display()))?;

    let phrases = values
        .iter()
        .map(AnySequence::from_json)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnyTrie::build(phrases)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memetts_core::{SequenceKind, TrieError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn phrase_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_text_phrases() {
        let file = phrase_file(r#"["我不是", "我不是神鹰", "我不是"]"#);
        let trie = load_phrase_file(file.path()).unwrap();
        assert_eq!(trie.kind(), SequenceKind::Text);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.max_phrase_len(), 5);
    }

    #[test]
    fn test_word_phrases() {
        let file = phrase_file(r#"[["never", "gonna", "give", "you", "up"]]"#);
        let trie = load_phrase_file(file.path()).unwrap();
        assert_eq!(trie.kind(), SequenceKind::Tokens);
    }

    #[test]
    fn test_mixed_kinds_rejected() {
        let file = phrase_file(r#"["哈哈", ["ha", "ha"]]"#);
        let err = load_phrase_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrieError>(),
            Some(TrieError::SequenceKindMismatch { .. })
        ));
    }

    #[test]
    fn test_execute_reports_failure() {
        let file = phrase_file(r#"[1, 2]"#);
        let args = ValidateArgs {
            phrases: file.path().to_path_buf(),
            common: CommonArgs::default(),
        };
        assert!(args.execute().is_err());
    }
}
